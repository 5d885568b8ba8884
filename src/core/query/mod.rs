//! Query engine
//!
//! Both operations are pure functions of their arguments: they read the
//! entries, allocate their own result, and never fail.

pub mod filter;
pub mod suggest;

pub use filter::{filter, matches_query};
pub use suggest::{suggest, SuggestOptions, DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_QUERY_CHARS};
