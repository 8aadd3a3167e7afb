//! Event domain model.
//!
//! An [`Event`] is the record shown in each row of the list. Identity is the
//! `event_id`; every other field is descriptive and may change between fetches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Date format used for the row date column.
const ROW_DATE_FORMAT: &str = "%d-%m %Y";

/// An upcoming event as displayed by the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub title: String,
    pub venue: String,
    pub city: String,
    pub country: String,
    pub date: DateTime<Utc>,
}

impl Event {
    /// Creates an event from its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use eventdeck::Event;
    ///
    /// let date = Utc.with_ymd_and_hms(2026, 11, 2, 20, 0, 0).unwrap();
    /// let event = Event::new("e1", "Jazz Night", "Blue Note", "NYC", "USA", date);
    /// assert_eq!(event.location(), "Blue Note - NYC - USA");
    /// ```
    #[must_use]
    pub fn new(
        event_id: impl Into<String>,
        title: impl Into<String>,
        venue: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            title: title.into(),
            venue: venue.into(),
            city: city.into(),
            country: country.into(),
            date,
        }
    }

    /// Returns the location line shown under the title: `venue - city - country`.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{} - {} - {}", self.venue, self.city, self.country)
    }

    /// Returns the compact date label used in the row date column (`dd-MM yyyy`).
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date.format(ROW_DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_label_is_day_month_year() {
        let date = Utc.with_ymd_and_hms(2026, 3, 7, 18, 30, 0).unwrap();
        let event = Event::new("e1", "Rock Fest", "Arena", "LA", "USA", date);
        assert_eq!(event.date_label(), "07-03 2026");
    }
}
