//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! Output goes to stdout as ANSI escape sequences; Zellij captures it as the
//! pane content.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    tracing::trace!(
        rows = rows,
        cols = cols,
        visible_items = viewmodel.items.len(),
        layout = ?viewmodel.layout,
        "rendering"
    );

    components::render_screen(&viewmodel, &state.theme, cols, rows);
}
