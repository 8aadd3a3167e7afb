//! Storage record models for the persistence layer.
//!
//! Records are kept separate from the domain [`Event`] so the on-disk format can
//! carry bookkeeping fields without leaking them into the presenter.

use crate::domain::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event as persisted by an [`EventStore`](crate::storage::EventStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique identifier; the key of the record in storage.
    pub event_id: String,

    pub title: String,

    pub venue: String,

    pub city: String,

    pub country: String,

    /// When the event takes place.
    pub date: DateTime<Utc>,

    /// Unix timestamp when the record was first written to storage.
    #[serde(default)]
    pub created_at: i64,
}

impl EventRecord {
    /// Builds a record from a domain event, stamping `created_at` with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use eventdeck::storage::EventRecord;
    /// use eventdeck::Event;
    ///
    /// let event = Event::new("e1", "Jazz Night", "Blue Note", "NYC", "USA", Utc::now());
    /// let record = EventRecord::from_event(&event);
    /// assert_eq!(record.event_id, "e1");
    /// assert!(record.created_at > 0);
    /// ```
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self {
            event_id: event.event_id.clone(),
            title: event.title.clone(),
            venue: event.venue.clone(),
            city: event.city.clone(),
            country: event.country.clone(),
            date: event.date,
            created_at: Utc::now().timestamp(),
        }
    }
}

impl From<EventRecord> for Event {
    fn from(record: EventRecord) -> Self {
        Self {
            event_id: record.event_id,
            title: record.title,
            venue: record.venue,
            city: record.city,
            country: record.country,
            date: record.date,
        }
    }
}
