//! Top-level rendering entry points.
//!
//! ```text
//! EventListPresenter → compute_viewmodel → UIViewModel → components → ANSI output
//! Event + NavigationMode → compute_detail_viewmodel → DetailViewModel → detail
//! ```

use crate::app::modes::NavigationMode;
use crate::app::EventListPresenter;
use crate::domain::Event;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailViewModel, FooterInfo};

/// Renders the event list to stdout.
pub fn render(presenter: &EventListPresenter, rows: usize, cols: usize) {
    let viewmodel = presenter.compute_viewmodel(rows, cols);
    components::render_list(&viewmodel, &presenter.theme, cols, rows);
}

/// Renders the detail surface for `event` to stdout.
pub fn render_detail(event: &Event, mode: NavigationMode, theme: &Theme, rows: usize, cols: usize) {
    let viewmodel = compute_detail_viewmodel(event, mode);
    components::render_detail(&viewmodel, theme, cols, rows);
}

/// Builds the detail view model for `event`.
#[must_use]
pub fn compute_detail_viewmodel(event: &Event, mode: NavigationMode) -> DetailViewModel {
    let keybindings = match mode {
        NavigationMode::View => "ESC: back  e: edit",
        NavigationMode::Edit => "ESC: back",
    };

    DetailViewModel {
        heading: mode.title().to_string(),
        fields: vec![
            ("Title".to_string(), event.title.clone()),
            ("Date".to_string(), event.date.format("%A %d %B %Y, %H:%M").to_string()),
            ("Venue".to_string(), event.venue.clone()),
            ("City".to_string(), event.city.clone()),
            ("Country".to_string(), event.country.clone()),
            ("Id".to_string(), event.event_id.clone()),
        ],
        footer: FooterInfo {
            keybindings: keybindings.to_string(),
        },
    }
}
