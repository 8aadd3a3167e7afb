//! Event store abstraction.
//!
//! This module defines the [`EventStore`] trait the worker runs store requests
//! against. The trait is deliberately narrow: each method maps to one request the
//! presenter can issue, plus the batch upsert used by imports.

use crate::domain::error::Result;
use crate::domain::DateRange;
use crate::storage::models::EventRecord;

/// Abstraction over persistent event storage.
///
/// Calls are synchronous from the worker's point of view; the presenter only ever
/// sees their results as worker responses.
///
/// # Implementations
///
/// - [`JsonEventStore`](crate::storage::JsonEventStore): JSON file with atomic writes
///
/// # Examples
///
/// ```no_run
/// use chrono::Utc;
/// use eventdeck::storage::{EventStore, JsonEventStore};
/// use eventdeck::DateRange;
/// use std::path::PathBuf;
///
/// let store = JsonEventStore::new(PathBuf::from("/tmp/events.json"))?;
/// let upcoming = store.fetch_events_in_range(&DateRange::upcoming(Utc::now(), 30))?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait EventStore: Send {
    /// Returns every event whose date falls inside `range`, in chronological order.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn fetch_events_in_range(&self, range: &DateRange) -> Result<Vec<EventRecord>>;

    /// Looks up a single event by identifier. Returns `Ok(None)` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn fetch_by_id(&self, event_id: &str) -> Result<Option<EventRecord>>;

    /// Deletes an event. Returns `true` if a record was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete(&mut self, event_id: &str) -> Result<bool>;

    /// Inserts or replaces the given events in one write. Returns how many were stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn upsert_batch(&mut self, events: &[EventRecord]) -> Result<usize>;
}
