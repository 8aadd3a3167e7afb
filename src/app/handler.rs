//! Event handling and state transition logic.
//!
//! The plugin runtime translates keys, visibility changes and worker replies
//! into [`Event`]s. [`handle_event`] applies each one to the
//! [`EventListPresenter`] and returns whether a redraw is needed along with the
//! actions to execute.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Shown`, `Hidden`, `LoadSignalsPending`
//! - **Navigation**: `KeyDown`, `KeyUp`, `OpenSelected`, `EditSelected`
//! - **Editing**: `DeleteSelected`, `Reload`, `Import`, `StoreChanged`
//! - **Search**: `SearchMode`, `ExitSearch`, `Char`, `Backspace`
//! - **Worker**: `WorkerResponse` with typed reply variants
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use eventdeck::app::notifier::LoadNotifier;
//! use eventdeck::app::{handle_event, Event, EventListPresenter};
//! use eventdeck::{DateRange, Theme};
//!
//! let mut presenter = EventListPresenter::new(
//!     DateRange::upcoming(Utc::now(), 30),
//!     LoadNotifier::new(),
//!     Theme::default(),
//! );
//! let (should_render, actions) = handle_event(&mut presenter, &Event::Shown)?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), eventdeck::EventDeckError>(())
//! ```

use super::modes::{NavigationMode, SearchMode};
use crate::app::{Action, EventListPresenter};
use crate::domain::error::Result;
use crate::worker::{StoreOperation, WorkerResponse};

/// Events triggered by user input, visibility changes, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The list became visible. Subscribes to load signals and fetches.
    Shown,
    /// The list was hidden. Drops the load subscription.
    Hidden,
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Opens the highlighted event read-only.
    OpenSelected,
    /// Opens the highlighted event for editing.
    EditSelected,
    /// Deletes the highlighted event.
    DeleteSelected,
    /// Refetches the date range.
    Reload,
    /// Imports the configured JSON file into the store.
    Import,
    /// The store file at `path` changed on disk.
    StoreChanged {
        path: String,
    },
    /// Opens a search session with an empty term.
    SearchMode,
    /// Closes the search session and clears the term.
    ExitSearch,
    /// Appends a character to the search term.
    Char(char),
    /// Removes the last character from the search term.
    Backspace,
    /// Load signals were published; drain and apply them.
    LoadSignalsPending,
    /// Wraps a response from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates the presenter, and returns actions to execute.
///
/// The boolean is `true` when the view needs to be redrawn.
///
/// # Errors
///
/// Returns [`EventDeckError::InvalidIndex`](crate::EventDeckError::InvalidIndex)
/// if a row operation addresses a row that no longer exists.
pub fn handle_event(presenter: &mut EventListPresenter, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Shown => Ok((true, presenter.on_become_visible())),
        Event::Hidden => {
            presenter.on_hidden();
            Ok((false, vec![]))
        }
        Event::KeyDown => {
            presenter.cursor_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            presenter.cursor_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::OpenSelected => select(presenter, NavigationMode::View),
        Event::EditSelected => select(presenter, NavigationMode::Edit),
        Event::DeleteSelected => {
            if presenter.row_count() == 0 {
                tracing::debug!("no event selected to delete");
                return Ok((false, vec![]));
            }
            let actions = presenter.delete_row(presenter.selected_index())?;
            Ok((true, actions))
        }
        Event::Reload => Ok((false, vec![presenter.reload()])),
        Event::Import => {
            let actions = presenter.begin_import();
            if actions.is_empty() {
                return Ok((false, vec![]));
            }
            Ok((true, with_load_signals(presenter, actions)))
        }
        Event::StoreChanged { path } => {
            let actions = presenter.on_store_changed(path);
            Ok((true, with_load_signals(presenter, actions)))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            Ok((true, presenter.begin_search()))
        }
        Event::ExitSearch => {
            tracing::debug!(term = %presenter.search_term(), "exiting search mode");
            Ok((true, presenter.end_search()))
        }
        Event::Char(c) => {
            if presenter.search_mode() != SearchMode::Active {
                return Ok((false, vec![]));
            }
            let mut term = presenter.search_term().to_string();
            term.push(*c);
            Ok((true, presenter.on_search_text_changed(&term)))
        }
        Event::Backspace => {
            if presenter.search_mode() != SearchMode::Active {
                return Ok((false, vec![]));
            }
            let mut term = presenter.search_term().to_string();
            term.pop();
            Ok((true, presenter.on_search_text_changed(&term)))
        }
        Event::LoadSignalsPending => Ok((true, presenter.pump_load_signals())),
        Event::WorkerResponse(response) => match response {
            WorkerResponse::StoreOpened { path } => {
                tracing::debug!(store_path = %path, "store opened");
                presenter.finish_store_open();
                Ok((true, presenter.pump_load_signals()))
            }
            WorkerResponse::EventsFetched { events } => {
                if events.as_slice() == presenter.events() && presenter.store_error().is_none() {
                    tracing::debug!("events unchanged, skipping render");
                    Ok((false, vec![]))
                } else {
                    Ok((true, presenter.apply_fetched(events.clone())))
                }
            }
            WorkerResponse::EventFetched { event, mode } => {
                Ok((false, presenter.apply_fetched_event(event.clone(), *mode)))
            }
            WorkerResponse::EventNotFound { event_id } => {
                tracing::debug!(event_id = %event_id, "selected event vanished from store");
                Ok((true, presenter.apply_missing_event(event_id)))
            }
            WorkerResponse::EventDeleted { event_id, removed } => {
                tracing::debug!(event_id = %event_id, removed = removed, "event delete confirmed");
                Ok((false, vec![]))
            }
            WorkerResponse::EventsImported { count } => {
                tracing::debug!(count = count, "events imported");
                presenter.finish_import();
                Ok((true, presenter.pump_load_signals()))
            }
            WorkerResponse::Error { operation, message } => {
                let actions = presenter.apply_store_failure(*operation, message);
                match operation {
                    StoreOperation::Import => presenter.finish_import(),
                    StoreOperation::Open => presenter.finish_store_open(),
                    StoreOperation::FetchRange | StoreOperation::FetchById | StoreOperation::Delete => {}
                }
                Ok((true, with_load_signals(presenter, actions)))
            }
        },
    }
}

/// Appends whatever the queued load signals ask for.
fn with_load_signals(presenter: &mut EventListPresenter, mut actions: Vec<Action>) -> Vec<Action> {
    actions.extend(presenter.pump_load_signals());
    actions
}

fn select(presenter: &mut EventListPresenter, mode: NavigationMode) -> Result<(bool, Vec<Action>)> {
    if presenter.row_count() == 0 {
        tracing::debug!("no event selected");
        if presenter.search_mode() == SearchMode::Active {
            return Ok((true, presenter.end_search()));
        }
        return Ok((false, vec![]));
    }

    let actions = presenter.select_row(presenter.selected_index(), mode)?;
    Ok((true, actions))
}
