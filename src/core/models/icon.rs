//! Icon identifiers
//!
//! Dataset files name a glyph per entry. Unrecognised names fall back to
//! [`Icon::Box`] at load time so rendering never has to handle a missing icon.

use serde::{Deserialize, Serialize};

/// Glyph identifier attached to a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Icon {
    /// 3x3 grid (arrays)
    Grid3X3,
    /// Single arrow (linked lists)
    ArrowRight,
    /// Stacked layers (stacks)
    Layers3,
    /// Two-way arrow (queues)
    ArrowRightLeft,
    /// Branch (trees)
    GitBranch,
    /// Magnifier (search trees)
    Search,
    /// Triangle (heaps)
    Triangle,
    /// Hash sign (hash tables)
    Hash,
    /// Network (graphs)
    Network,
    /// Letter glyph (tries)
    Type,
    /// Fallback
    #[default]
    #[serde(other)]
    Box,
}

impl Icon {
    /// Terminal glyph for this icon
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Grid3X3 => "▦",
            Self::ArrowRight => "→",
            Self::Layers3 => "☰",
            Self::ArrowRightLeft => "⇄",
            Self::GitBranch => "⑂",
            Self::Search => "⌕",
            Self::Triangle => "△",
            Self::Hash => "#",
            Self::Network => "⋈",
            Self::Type => "T",
            Self::Box => "□",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        icon: Icon,
    }

    #[test]
    fn test_known_icon_deserializes() {
        let w: Wrapper = toml::from_str("icon = \"GitBranch\"").unwrap();
        assert_eq!(w.icon, Icon::GitBranch);
        assert_eq!(w.icon.glyph(), "⑂");
    }

    #[test]
    fn test_unknown_icon_falls_back_to_box() {
        let w: Wrapper = toml::from_str("icon = \"Sparkles\"").unwrap();
        assert_eq!(w.icon, Icon::Box);
        assert_eq!(Icon::default(), Icon::Box);
    }
}
