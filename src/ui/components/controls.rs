//! Controls component renderer: search box and toggle buttons.

use crate::app::modes::ViewMode;
use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ControlsInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Text shown in the search box while it is empty and unfocused.
const PLACEHOLDER: &str = "Search products... (press /)";

/// Renders the search input box at the specified row.
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// The border is drawn in `search_bar_border` while the box has focus and in
/// `border` otherwise. A focused box shows a block cursor after the query.
pub fn render_search_box(row: usize, controls: &ControlsInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border_color = if controls.search_active {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let (search_text, text_color) = if controls.query.is_empty() && !controls.search_active {
        (format!(" {PLACEHOLDER}"), &theme.colors.text_dim)
    } else if controls.search_active {
        (format!(" Search: {}█", controls.query), &theme.colors.text_normal)
    } else {
        (format!(" Search: {}", controls.query), &theme.colors.text_normal)
    };
    let search_text: String = search_text.chars().take(inner_width).collect();
    let padding = inner_width.saturating_sub(char_len(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(text_color));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Renders the two view toggles and the sort toggle on one line.
///
/// Exactly one view toggle is drawn pressed. The sort toggle is drawn pressed
/// while an order is applied.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_toggles(row: usize, controls: &ControlsInfo, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));

    for mode in [ViewMode::Card, ViewMode::List] {
        render_toggle(mode.title(), controls.view_mode == mode, theme);
        print!("  ");
    }

    print!("  ");
    render_toggle(&controls.sort_label, controls.sort_active, theme);

    row + 1
}

fn render_toggle(caption: &str, pressed: bool, theme: &Theme) {
    if pressed {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.toggle_active_fg));
        print!("{}", Theme::bg(&theme.colors.toggle_active_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("[ {caption} ]");
    print!("{}", Theme::reset());
}
