//! Table component renderer.
//!
//! Each event occupies one line: thumbnail, date, title and location. Titles
//! are highlighted where they match the search term.

use crate::ui::helpers::{self, position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of the thumbnail plus date columns.
const DATE_COLUMN_END: usize = 16;

/// Width of the title column.
const TITLE_COLUMN_WIDTH: usize = 32;

/// Renders the table column headers at the specified row.
///
/// Displays "DATE", "TITLE" and "LOCATION" in bold with the theme's
/// `header_fg` color, aligned with the row columns below.
///
/// # Parameters
///
/// * `row` - Row position to render the headers (1-indexed)
/// * `theme` - Active color theme
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Example
///
/// ```rust,ignore
/// let next_row = render_table_headers(4, &Theme::default());
/// // Output: "  DATE          TITLE                           LOCATION"
/// ```
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "  {:<width$}{:<title$}{}",
        "DATE",
        "TITLE",
        "LOCATION",
        width = DATE_COLUMN_END - 2,
        title = TITLE_COLUMN_WIDTH
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Parameters
///
/// * `row` - Starting row position for the table (1-indexed)
/// * `items` - Display items in the visible window
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns (for padding)
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single event row.
///
/// # Layout
///
/// ```text
/// ◆ 02-11 2026  Jazz Night                      Blue Note - NYC - USA
/// ```
///
/// The selected row is drawn in the selection colors and padded to `cols`
/// so the background spans the full width. Unselected rows color the date,
/// title and location separately and highlight search matches in the title.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base_fg = if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.date_fg
    };
    print!("{}", Theme::fg(base_fg));

    print!("{} ", item.image);
    print!("{:<width$}", item.date, width = DATE_COLUMN_END - 2);

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    let title_len = visual_len(&item.title);
    print!("{}", " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(title_len)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.location);

    let line_len = DATE_COLUMN_END + TITLE_COLUMN_WIDTH.max(title_len) + visual_len(&item.location);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
