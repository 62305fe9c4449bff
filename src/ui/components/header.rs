//! Header component renderer.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title and load status lines at the specified row.
///
/// Both lines are centered. The status uses the error color when the last
/// load failed.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = char_len(&header.title);
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", Theme::reset());

    let status_len = char_len(&header.status);
    let padding = (cols.saturating_sub(status_len)) / 2;
    let status_color = if header.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.text_dim
    };

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(status_color));
    print!("{}", " ".repeat(padding));
    print!("{}", header.status);
    print!("{}", Theme::reset());

    row + 2
}
