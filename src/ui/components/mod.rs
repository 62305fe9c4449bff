//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title and load status
//! - [`controls`]: Search box, view toggles, and sort toggle
//! - [`cards`]: Product card grid
//! - [`list`]: Product rows
//! - [`empty`]: Message shown in place of products
//! - [`footer`]: Statistics and keybinding hints
//!
//! # Screen Layout
//!
//! ```text
//! [blank line]
//! [Title]
//! [Load status]
//! [Border]
//! [Search box - 3 lines]
//! [View toggles + sort toggle]
//! [Border]
//! [Cards / list rows / empty state]
//! [Border]
//! [Statistics]
//! [Keybindings]
//! [blank line]
//! ```

mod cards;
mod controls;
mod empty;
mod footer;
mod header;
mod list;

pub use cards::{CARD_GAP, CARD_HEIGHT, CARD_TEXT_WIDTH, CARD_WIDTH};
pub use list::{list_description_width, LIST_IMAGE_WIDTH, LIST_NAME_WIDTH, LIST_PRICE_WIDTH};

use crate::app::modes::ViewMode;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Rows above the product area.
pub const TOP_CHROME_ROWS: usize = 9;

/// Rows below the product area.
pub const BOTTOM_CHROME_ROWS: usize = 4;

/// Renders a horizontal border line at the specified row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full screen for a view model.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = header::render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = controls::render_search_box(current_row, &vm.controls, theme, cols);
    current_row = controls::render_toggles(current_row, &vm.controls, theme);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(empty) = &vm.empty_state {
        empty::render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        match vm.layout {
            ViewMode::Card => cards::render_card_grid(current_row, &vm.items, vm.columns, theme),
            ViewMode::List => list::render_list_rows(current_row, &vm.items, theme, cols),
        };
    }

    let keys_row = rows.saturating_sub(1);
    let stats_row = keys_row.saturating_sub(1);
    let border_row = stats_row.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    footer::render_stats(stats_row, &vm.stats, theme, cols);
    footer::render_footer(keys_row, &vm.footer, theme, cols);
}
