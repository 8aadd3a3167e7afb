//! Detail surface renderer.

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailViewModel;

/// Width of the label column.
const LABEL_WIDTH: usize = 10;

/// Renders the heading, one `label value` line per field, and the footer.
pub fn render_detail(vm: &DetailViewModel, theme: &Theme, cols: usize, rows: usize) {
    position_cursor(2, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    let padding = cols.saturating_sub(visual_len(&vm.heading)) / 2;
    print!("{}{}", " ".repeat(padding), vm.heading);
    print!("{}", Theme::reset());

    position_cursor(3, 1);
    print!("{}{}{}", Theme::fg(&theme.colors.border), "─".repeat(cols), Theme::reset());

    for (offset, (label, value)) in vm.fields.iter().enumerate() {
        position_cursor(5 + offset, 3);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{label:<LABEL_WIDTH$}");
        print!("{}", Theme::fg(&theme.colors.text_normal));
        let room = cols.saturating_sub(LABEL_WIDTH + 4);
        let value: String = value.chars().take(room).collect();
        print!("{value}");
        print!("{}", Theme::reset());
    }

    let footer_row = rows.saturating_sub(1);
    position_cursor(footer_row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    let hint_padding = cols.saturating_sub(visual_len(&vm.footer.keybindings)) / 2;
    print!("{}{}", " ".repeat(hint_padding), vm.footer.keybindings);
    print!("{}", Theme::reset());
}
