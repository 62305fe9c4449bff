//! List component renderer.
//!
//! One product per row: name, description, image URI, and a right-aligned
//! price.

use crate::ui::helpers::{self, char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of the name column.
pub const LIST_NAME_WIDTH: usize = 28;

/// Width of the image URI column.
pub const LIST_IMAGE_WIDTH: usize = 24;

/// Width of the right-aligned price column.
pub const LIST_PRICE_WIDTH: usize = 10;

/// Leading space plus two spaces after each of name, description and image.
const LIST_SPACING: usize = 7;

/// Columns left for the description once the fixed columns are placed.
#[must_use]
pub const fn list_description_width(cols: usize) -> usize {
    cols.saturating_sub(LIST_NAME_WIDTH + LIST_IMAGE_WIDTH + LIST_PRICE_WIDTH + LIST_SPACING)
}

/// Renders all list rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_list_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_list_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single product row.
///
/// # Layout
///
/// ```text
/// [space] NAME (28)  DESCRIPTION (variable)  IMAGE (24)  PRICE (10, right-aligned) [padding]
/// ```
///
/// A selected row is padded to the full terminal width so the selection
/// background covers it.
fn render_list_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let (base_fg, description_fg) = if item.is_selected {
        (&theme.colors.selection_fg, &theme.colors.selection_fg)
    } else {
        (&theme.colors.text_normal, &theme.colors.text_dim)
    };
    let description_width = list_description_width(cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(base_fg));
    if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }

    print!(" ");
    helpers::render_highlighted_text(&item.name, &item.name_highlights, theme, base_fg, item.is_selected);
    print!("{}", " ".repeat(LIST_NAME_WIDTH.saturating_sub(char_len(&item.name)) + 2));

    print!("{}", Theme::fg(description_fg));
    helpers::render_highlighted_text(
        &item.description,
        &item.description_highlights,
        theme,
        description_fg,
        item.is_selected,
    );
    print!("{}", " ".repeat(description_width.saturating_sub(char_len(&item.description)) + 2));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.image);
    print!("{}", " ".repeat(LIST_IMAGE_WIDTH.saturating_sub(char_len(&item.image)) + 2));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    print!("{:>width$}", item.price, width = LIST_PRICE_WIDTH);

    let line_len = LIST_SPACING + LIST_NAME_WIDTH + description_width + LIST_IMAGE_WIDTH + LIST_PRICE_WIDTH;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
