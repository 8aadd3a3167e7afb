//! Header component renderer.
//!
//! This module renders the title bar: the event count title, an optional
//! loading indicator and theme-aware colors.

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Shown after the title while a load is in progress.
const BUSY_INDICATOR: &str = " ⟳ loading";

/// Renders the header title bar at the specified row.
///
/// Displays the title centered horizontally in bold. While a load is in
/// progress the busy indicator follows the title in the theme's `busy_fg`
/// color. Pads the line to the full terminal width.
///
/// # Parameters
///
/// * `row` - Row position to render the header (1-indexed)
/// * `header` - Header information (title text and busy flag)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
/// [left padding] Upcoming events (3) ⟳ loading [right padding]
/// ```
///
/// Title and indicator are centered as one block.
///
/// # Example
///
/// ```rust,ignore
/// let header = HeaderInfo { title: " Upcoming events (3) ".to_string(), busy: true };
/// let next_row = render_header(1, &header, &Theme::default(), 80);
/// assert_eq!(next_row, 2);
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let busy_len = if header.busy { visual_len(BUSY_INDICATOR) } else { 0 };
    let content_len = visual_len(&header.title) + busy_len;
    let padding = cols.saturating_sub(content_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    if header.busy {
        print!("{}", Theme::fg(&theme.colors.busy_fg));
        print!("{BUSY_INDICATOR}");
    }
    print!("{}", " ".repeat(cols.saturating_sub(padding + content_len)));

    print!("{}", Theme::reset());
    row + 1
}
