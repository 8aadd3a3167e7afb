//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The presenter never performs I/O itself. Every operation returns the
//! [`Action`]s the runtime must carry out: posting store requests to the worker,
//! telling the renderer which rows changed, or opening the detail surface.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use eventdeck::app::Action;
//! use eventdeck::worker::WorkerMessage;
//! use eventdeck::DateRange;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::fetch_events_in_range(DateRange::upcoming(Utc::now(), 30))),
//!     Action::ReloadRows,
//! ];
//! ```

use super::modes::NavigationMode;
use crate::domain::Event;
use crate::worker::WorkerMessage;

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a store request to the background worker.
    PostToWorker(WorkerMessage),

    /// The whole effective list changed; redraw every row.
    ReloadRows,

    /// A single row disappeared from the effective list.
    RemoveRow {
        /// Row index in the effective list before removal.
        index: usize,
    },

    /// Presents the detail surface for an event.
    Navigate {
        /// The stored copy of the event, as re-fetched by id.
        event: Event,
        /// Whether the surface opens read-only or for editing.
        mode: NavigationMode,
    },
}
