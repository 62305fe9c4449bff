//! Input and view mode state types for the application.
//!
//! These enums decide which keybindings are active and how the derived
//! product list is drawn. Neither one influences which products are shown.
//!
//! # Example
//!
//! ```rust
//! use zatalog::app::modes::{InputMode, ViewMode};
//!
//! let input_mode = InputMode::Search;
//! let view_mode = ViewMode::from_config("list").unwrap_or_default();
//! assert_eq!(view_mode, ViewMode::List);
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), s (sort),
    /// c (cards), l (list), r (reload), Esc (clear search), q (quit).
    #[default]
    Browse,

    /// Typing into the search box.
    ///
    /// Characters edit the raw query. Enter keeps the query and returns to
    /// browsing, Esc clears it.
    Search,
}

/// Presentation of the derived product list.
///
/// Pure rendering selector: switching it never touches the derived subset or
/// the statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Grid of multi-line product cards.
    #[default]
    Card,

    /// One product per row.
    List,
}

impl ViewMode {
    /// Parses the `default_view` configuration value.
    ///
    /// Accepts `card`/`cards` and `list` in any case. Returns `None` for
    /// anything else.
    #[must_use]
    pub fn from_config(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "card" | "cards" => Some(Self::Card),
            "list" => Some(Self::List),
            _ => None,
        }
    }

    /// Title of the toggle button for this mode.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Card => "Card View",
            Self::List => "List View",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_mode_parses_config_values() {
        assert_eq!(ViewMode::from_config("card"), Some(ViewMode::Card));
        assert_eq!(ViewMode::from_config(" Cards "), Some(ViewMode::Card));
        assert_eq!(ViewMode::from_config("LIST"), Some(ViewMode::List));
        assert_eq!(ViewMode::from_config("grid"), None);
    }

    #[test]
    fn defaults_match_initial_screen() {
        assert_eq!(InputMode::default(), InputMode::Browse);
        assert_eq!(ViewMode::default(), ViewMode::Card);
    }
}
