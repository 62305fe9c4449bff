//! Terminal rendering for the catalog screen.
//!
//! ```text
//! AppState ──compute_viewmodel──► UIViewModel ──render──► ANSI on stdout
//! ```
//!
//! Screen layout, top to bottom: title and load status, search box, sort and
//! view toggles, the product cards or list rows, statistics, key hints.
//!
//! Colors come from [`Theme`]; components only read the view model, so they
//! never touch the catalog pipeline directly.

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ControlsInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, StatsInfo, UIViewModel,
};
