//! Card grid component renderer.

use crate::ui::helpers::{self, char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Outer width of one card, frame included.
pub const CARD_WIDTH: usize = 34;

/// Text columns inside a card (frame and one space of padding per side removed).
pub const CARD_TEXT_WIDTH: usize = CARD_WIDTH - 4;

/// Rows per card: top frame, name, description, image, price, bottom frame.
pub const CARD_HEIGHT: usize = 6;

/// Blank columns between neighbouring cards.
pub const CARD_GAP: usize = 2;

/// Renders cards in rows of `columns`, starting at the specified row.
///
/// # Returns
///
/// The next available row position
///
/// # Layout
///
/// ```text
/// ┌────────────────────────────────┐  ┌────────────────────────────────┐
/// │ Wireless Mouse                 │  │ Mechanical Keyboard            │
/// │ Ergonomic 2.4GHz mouse with... │  │ Tactile switches with RGB b... │
/// │ https://via.placeholder.com... │  │ https://via.placeholder.com... │
/// │ $25.99                         │  │ $89.99                         │
/// └────────────────────────────────┘  └────────────────────────────────┘
/// ```
pub fn render_card_grid(row: usize, items: &[DisplayItem], columns: usize, theme: &Theme) -> usize {
    let mut current_row = row;
    for grid_row in items.chunks(columns.max(1)) {
        for (column, item) in grid_row.iter().enumerate() {
            let col = 1 + column * (CARD_WIDTH + CARD_GAP);
            render_card(current_row, col, item, theme);
        }
        current_row += CARD_HEIGHT;
    }
    current_row
}

/// Renders one card with its top-left corner at (`row`, `col`).
///
/// A selected card gets a frame in the selection color and a filled name line.
fn render_card(row: usize, col: usize, item: &DisplayItem, theme: &Theme) {
    let frame_color = if item.is_selected {
        &theme.colors.selection_bg
    } else {
        &theme.colors.border
    };
    let inner = "─".repeat(CARD_WIDTH - 2);

    position_cursor(row, col);
    print!("{}┌{inner}┐{}", Theme::fg(frame_color), Theme::reset());

    // Name
    position_cursor(row + 1, col);
    print!("{}│{} ", Theme::fg(frame_color), Theme::reset());
    if item.is_selected {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    helpers::render_highlighted_text(
        &item.name,
        &item.name_highlights,
        theme,
        &theme.colors.text_normal,
        item.is_selected,
    );
    print!("{}", " ".repeat(CARD_TEXT_WIDTH.saturating_sub(char_len(&item.name))));
    print!("{} {}│{}", Theme::reset(), Theme::fg(frame_color), Theme::reset());

    // Description
    position_cursor(row + 2, col);
    print!("{}│{} ", Theme::fg(frame_color), Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    helpers::render_highlighted_text(
        &item.description,
        &item.description_highlights,
        theme,
        &theme.colors.text_dim,
        false,
    );
    print!("{}", " ".repeat(CARD_TEXT_WIDTH.saturating_sub(char_len(&item.description))));
    print!("{} {}│{}", Theme::reset(), Theme::fg(frame_color), Theme::reset());

    position_cursor(row + 3, col);
    print!("{}│{} ", Theme::fg(frame_color), Theme::reset());
    print!("{}{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim), item.image);
    print!("{}", " ".repeat(CARD_TEXT_WIDTH.saturating_sub(char_len(&item.image))));
    print!("{} {}│{}", Theme::reset(), Theme::fg(frame_color), Theme::reset());

    // Price
    position_cursor(row + 4, col);
    print!("{}│{} ", Theme::fg(frame_color), Theme::reset());
    print!("{}{}", Theme::fg(&theme.colors.price_fg), item.price);
    print!("{}", " ".repeat(CARD_TEXT_WIDTH.saturating_sub(char_len(&item.price))));
    print!("{} {}│{}", Theme::reset(), Theme::fg(frame_color), Theme::reset());

    position_cursor(row + 5, col);
    print!("{}└{inner}┘{}", Theme::fg(frame_color), Theme::reset());
}
