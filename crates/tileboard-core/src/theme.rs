//! Dashboard color themes.

use serde::{Deserialize, Serialize};

/// Available dashboard themes.
///
/// Held on the board and passed to the shell explicitly; the engine never
/// mutates document-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Space,
    Bloomberg,
    Ocean,
    Forest,
}

impl Theme {
    /// All themes, in selector order.
    pub const ALL: [Theme; 5] = [
        Theme::Dark,
        Theme::Space,
        Theme::Bloomberg,
        Theme::Ocean,
        Theme::Forest,
    ];

    /// Stylesheet class for the theme.
    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Space => "theme-space",
            Theme::Bloomberg => "theme-bloomberg",
            Theme::Ocean => "theme-ocean",
            Theme::Forest => "theme-forest",
        }
    }

    /// Human-readable name for the selector UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Space => "Space",
            Theme::Bloomberg => "Bloomberg",
            Theme::Ocean => "Ocean",
            Theme::Forest => "Forest",
        }
    }
}
