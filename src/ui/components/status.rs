//! Store error line.

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;

/// Renders `message` left-aligned in the error color, truncated to `cols`.
pub fn render_error_line(row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    let text: String = format!(" ! {message}").chars().take(cols).collect();

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(visual_len(&text))));
    print!("{}", Theme::reset());
    row + 1
}
