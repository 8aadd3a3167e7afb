//! View model types representing renderable UI state.
//!
//! View models are computed by
//! [`EventListPresenter::compute_viewmodel`](crate::app::EventListPresenter::compute_viewmodel)
//! and consumed by the renderer. They hold display-ready data only.

/// Complete UI view model for the event list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Rows in the visible window of the effective list.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    pub footer: FooterInfo,

    /// Set when the effective list is empty.
    pub empty_state: Option<EmptyState>,

    /// Set while a search session is open.
    pub search_bar: Option<SearchBarInfo>,

    /// Last store failure, if any.
    pub error: Option<String>,
}

/// One event row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Thumbnail glyph from the image resolver.
    pub image: char,

    /// Date in `dd-MM yyyy` form.
    pub date: String,

    pub title: String,

    /// `venue - city - country`.
    pub location: String,

    pub is_selected: bool,

    /// Byte ranges of `title` matching the search term.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// Whether a load is in progress.
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Message shown in place of the table when there are no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
}

/// The detail surface opened by navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewModel {
    /// `Event` or `Edit event`.
    pub heading: String,

    /// Label/value pairs in display order.
    pub fields: Vec<(String, String)>,

    pub footer: FooterInfo,
}
