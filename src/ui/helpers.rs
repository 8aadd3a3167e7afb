//! Shared rendering utilities.
//!
//! Cursor positioning, match highlighting and the row thumbnail resolver used
//! across the UI components.

use crate::ui::theme::Theme;

/// Glyphs cycled through as row thumbnails.
const THUMBNAILS: [char; 4] = ['◆', '◇', '●', '○'];

/// Thumbnail for the row at `index`.
///
/// Events carry no artwork, so every row gets a static placeholder glyph.
///
/// ```rust
/// use eventdeck::ui::helpers::placeholder_image;
///
/// assert_eq!(placeholder_image(0), placeholder_image(4));
/// ```
#[must_use]
pub const fn placeholder_image(index: usize) -> char {
    THUMBNAILS[index % THUMBNAILS.len()]
}

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Splits `text` into `(segment, highlighted)` pieces along byte `ranges`.
///
/// Ranges that are out of order, out of bounds, or not on character
/// boundaries are skipped.
#[must_use]
pub fn highlight_segments<'a>(text: &'a str, ranges: &[(usize, usize)]) -> Vec<(&'a str, bool)> {
    let mut segments = vec![];
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start < current_pos || end <= start {
            continue;
        }
        let (Some(before), Some(matched)) = (text.get(current_pos..start), text.get(start..end)) else {
            continue;
        };
        if !before.is_empty() {
            segments.push((before, false));
        }
        segments.push((matched, true));
        current_pos = end;
    }

    if let Some(rest) = text.get(current_pos..) {
        if !rest.is_empty() {
            segments.push((rest, false));
        }
    }

    segments
}

/// Prints `text` with `ranges` highlighted.
///
/// Selected rows are printed plain so the selection colors win.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    for (segment, highlighted) in highlight_segments(text, ranges) {
        if highlighted {
            print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
            print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
            print!("{segment}");
            print!("{}", Theme::reset());
            print!("{}", Theme::fg(&theme.colors.text_normal));
        } else {
            print!("{segment}");
        }
    }
}

/// Display width of `text` in characters.
#[must_use]
pub fn visual_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_alternate_plain_and_highlighted() {
        assert_eq!(
            highlight_segments("Blue Blues", &[(0, 4), (5, 9)]),
            vec![("Blue", true), (" ", false), ("Blue", true), ("s", false)]
        );
    }

    #[test]
    fn bad_ranges_are_skipped() {
        assert_eq!(highlight_segments("Café", &[(3, 4)]), vec![("Café", false)]);
        assert_eq!(highlight_segments("abc", &[(1, 9)]), vec![("abc", false)]);
    }

    #[test]
    fn thumbnails_cycle() {
        assert_eq!(placeholder_image(1), '◇');
        assert_eq!(placeholder_image(5), '◇');
    }
}
