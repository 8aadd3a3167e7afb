//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame, the current
//! term and a block cursor.

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at the specified row.
///
/// Displays a 3-line bordered box containing the search term followed by a
/// block cursor. The box is horizontally centered with margins on both sides.
///
/// # Parameters
///
/// * `row` - Starting row position for the search box (1-indexed)
/// * `search` - Search bar information (current term)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────┐ [margin]
/// [margin] │ Search: jazz█│ [margin]
/// [margin] └──────────────┘ [margin]
/// ```
///
/// The box width is `cols - (2 * SEARCH_BOX_MARGIN)`. The inner content width
/// is `box_width - 2` to leave room for the side borders.
///
/// # Rendering Details
///
/// - Borders use theme `search_bar_border` color
/// - The term uses theme `text_normal` color
/// - Right padding fills the remaining space up to the right border
///
/// # Example
///
/// ```rust,ignore
/// let search = SearchBarInfo { query: "jazz".to_string() };
/// let next_row = render_search_bar(3, &search, &Theme::default(), 80);
/// assert_eq!(next_row, 6);
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let search_text = format!(" Search: {}█", search.query);
    let padding = inner_width.saturating_sub(visual_len(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
