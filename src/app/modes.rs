//! Mode and state enums driving the event list.
//!
//! - [`SearchMode`] decides which list is the effective list.
//! - [`DisplayState`] drives the busy indicator only.
//! - [`NavigationMode`] is the flag handed to the detail surface.

use serde::{Deserialize, Serialize};

/// Whether a search session is open.
///
/// While `Active` with a non-empty term, row count and row content come from
/// the filtered list; otherwise from the authoritative list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Inactive,
    Active,
}

/// Cosmetic loading indicator state.
///
/// Toggled by load notifications. Never blocks input and says nothing about
/// whether the list data is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
}

/// How the detail surface should present a selected event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMode {
    /// Read-only detail view.
    View,
    /// Detail view opened for editing.
    Edit,
}

impl NavigationMode {
    /// Title of the detail surface for this mode.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::View => "Event",
            Self::Edit => "Edit event",
        }
    }
}
