//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` and consumed by the renderer.
//! They hold display-ready strings and flags only: prices are already
//! formatted, text is already truncated, and highlight ranges are already
//! resolved to character indices.
//!
//! # Example
//!
//! ```rust
//! use zatalog::app::ViewMode;
//! use zatalog::ui::viewmodel::{ControlsInfo, FooterInfo, HeaderInfo, StatsInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: "Product Catalog".to_string(), status: "Loading products...".to_string(), is_error: false },
//!     controls: ControlsInfo { query: String::new(), search_active: false, view_mode: ViewMode::Card, sort_label: "Price (none)".to_string(), sort_active: false },
//!     items: vec![],
//!     layout: ViewMode::Card,
//!     columns: 1,
//!     selected_index: 0,
//!     stats: StatsInfo { total: "Total Products: 0".to_string(), average: "Average Price: $0.00".to_string() },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//! };
//! assert!(vm.items.is_empty());
//! ```

use crate::app::modes::ViewMode;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Title bar with load status.
    pub header: HeaderInfo,

    /// Search box, view toggles, and sort toggle.
    pub controls: ControlsInfo,

    /// Products inside the visible window, in display order.
    pub items: Vec<DisplayItem>,

    /// How `items` are laid out.
    pub layout: ViewMode,

    /// Cards per grid row. Always 1 in list layout.
    pub columns: usize,

    /// Index of the selected item within `items`.
    pub selected_index: usize,

    /// Statistics lines over the full derived subset.
    pub stats: StatsInfo,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Message shown in place of `items` when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single product.
///
/// Highlight ranges are `(start, end)` character indices, end exclusive,
/// into the already-truncated `name` and `description`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub name: String,
    pub description: String,
    /// Formatted price, e.g. `$25.99`.
    pub price: String,
    /// Image URI, truncated to its slot.
    pub image: String,
    pub is_selected: bool,
    pub name_highlights: Vec<(usize, usize)>,
    pub description_highlights: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text.
    pub title: String,

    /// Load status line, e.g. "10 products, loaded just now".
    pub status: String,

    /// Whether `status` describes a failure.
    pub is_error: bool,
}

/// Controls row display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsInfo {
    /// Raw query as typed.
    pub query: String,

    /// Whether keystrokes currently go to the search box.
    pub search_active: bool,

    /// Which of the two view toggles is pressed.
    pub view_mode: ViewMode,

    /// Sort toggle caption, e.g. "Price ↑ (ascending)".
    pub sort_label: String,

    /// Whether a sort order is applied.
    pub sort_active: bool,
}

/// Statistics footer lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsInfo {
    /// e.g. "Total Products: 10".
    pub total: String,
    /// e.g. "Average Price: $66.16".
    pub average: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current input mode.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No products match \"lamp\"").
    pub message: String,

    /// Secondary explanatory text (e.g., "Press Esc to clear the search").
    pub subtitle: String,
}
