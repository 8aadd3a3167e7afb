//! Composable UI component renderers.
//!
//! Each component prints one part of the screen at a given row and returns the
//! next free row.
//!
//! - [`header`]: Title bar with the busy indicator
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`table`]: Event rows (thumbnail, DATE, TITLE, LOCATION)
//! - [`empty`]: Message shown when there are no rows
//! - [`status`]: Store error line
//! - [`detail`]: Detail surface for a single event

mod detail;
mod empty;
mod footer;
mod header;
mod search;
mod status;
mod table;

pub use detail::render_detail;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use status::render_error_line;
use table::{render_table_headers, render_table_rows};

/// Prints a horizontal rule at `row`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the event list screen.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, while searching]
/// [Table Headers + Rows | Empty state]
/// [Error line, after a store failure]
/// [Border]
/// [Footer]
/// ```
pub fn render_list(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 2, empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, theme);
        render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let mut border_row = footer_start.saturating_sub(1);

    if let Some(error) = &vm.error {
        border_row = border_row.saturating_sub(1);
        render_error_line(border_row + 1, error, theme, cols);
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
