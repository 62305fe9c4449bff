//! Shared rendering utilities and helpers.
//!
//! Everything here operates on character indices, not byte indices, so
//! product names with accents or symbols never split a UTF-8 sequence.
//!
//! # Example
//!
//! ```rust
//! use zatalog::ui::helpers::fit_text;
//!
//! let (text, ranges) = fit_text("Noise Cancelling Headphones", &[(6, 16)], 12);
//! assert_eq!(text, "Noise Can...");
//! assert_eq!(ranges, vec![(6, 9)]);
//! ```

use crate::ui::theme::Theme;

/// Ellipsis appended to truncated text.
const ELLIPSIS: &str = "...";

/// Positions the cursor at a specific row and column.
///
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `max_chars` characters and clips highlight
/// ranges to the part that is still visible.
///
/// Truncated text ends with `...`. Ranges that fall entirely into the cut
/// part are dropped; ranges crossing the cut are shortened.
#[must_use]
pub fn fit_text(text: &str, ranges: &[(usize, usize)], max_chars: usize) -> (String, Vec<(usize, usize)>) {
    let total = char_len(text);
    if total <= max_chars {
        return (text.to_string(), ranges.to_vec());
    }

    let kept = if max_chars < ELLIPSIS.len() {
        max_chars
    } else {
        max_chars - ELLIPSIS.len()
    };
    let mut fitted: String = text.chars().take(kept).collect();
    if kept < max_chars {
        fitted.push_str(ELLIPSIS);
    }

    let clipped = ranges
        .iter()
        .filter(|&&(start, _)| start < kept)
        .map(|&(start, end)| (start, end.min(kept)))
        .collect();

    (fitted, clipped)
}

/// Renders text with highlighted character ranges for search matches.
///
/// Highlighted sections use the match highlight colors. After each highlight
/// the base colors are restored: the selection colors when `is_selected`,
/// otherwise `base_fg`.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base_fg: &str,
    is_selected: bool,
) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        if is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(base_fg));
        }

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        let (text, ranges) = fit_text("Desk Lamp", &[(5, 9)], 20);
        assert_eq!(text, "Desk Lamp");
        assert_eq!(ranges, vec![(5, 9)]);
    }

    #[test]
    fn truncation_is_character_safe() {
        let (text, _) = fit_text("Café Crème Deluxe", &[], 8);
        assert_eq!(text, "Café ...");
        assert_eq!(char_len(&text), 8);
    }

    #[test]
    fn ranges_past_the_cut_are_dropped() {
        let (_, ranges) = fit_text("Portable waterproof speaker", &[(0, 4), (20, 27)], 10);
        assert_eq!(ranges, vec![(0, 4)]);
    }

    #[test]
    fn tiny_widths_do_not_panic() {
        assert_eq!(fit_text("Webcam", &[(0, 3)], 2).0, "We");
        assert_eq!(fit_text("Webcam", &[], 0).0, "");
    }
}
