//! Data models for `DsExplorer`

pub mod category;
pub mod complexity;
pub mod entry;
pub mod icon;
pub mod suggestion;

pub use category::{Category, CategoryFilter};
pub use complexity::{Complexity, ComplexityClass};
pub use entry::CatalogEntry;
pub use icon::Icon;
pub use suggestion::{Suggestion, SuggestionKind};
