//! Footer component renderer: statistics line and keybinding hints.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, StatsInfo};

/// Separator between the two statistics.
const STATS_SEPARATOR: &str = "   │   ";

/// Renders the statistics line, centered.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
/// Total Products: 10   │   Average Price: $66.16
/// ```
pub fn render_stats(row: usize, stats: &StatsInfo, theme: &Theme, cols: usize) -> usize {
    let text_len = char_len(&stats.total) + char_len(STATS_SEPARATOR) + char_len(&stats.average);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::bold());
    print!("{}{}", Theme::fg(&theme.colors.text_normal), stats.total);
    print!("{}{STATS_SEPARATOR}", Theme::fg(&theme.colors.border));
    print!("{}{}", Theme::fg(&theme.colors.price_fg), stats.average);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the footer help bar at the specified row.
///
/// Displays keybinding hints centered horizontally with dimmed styling. If
/// the help text exceeds terminal width, it is truncated to fit.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text: String = footer.keybindings.chars().take(cols).collect();

    let text_len = char_len(&help_text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
