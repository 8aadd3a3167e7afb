//! Date range selecting which events the list shows.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Half-open interval `[start, end)` of event dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a range; `end` before `start` yields an empty range.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The "upcoming events" window: from `now` to `now + days`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use eventdeck::DateRange;
    ///
    /// let now = Utc::now();
    /// let range = DateRange::upcoming(now, 30);
    /// assert!(range.contains(now));
    /// ```
    #[must_use]
    pub fn upcoming(now: DateTime<Utc>, days: u32) -> Self {
        Self {
            start: now,
            end: now + Duration::days(i64::from(days)),
        }
    }

    /// The same-length window starting at `now`, if `now` is past `start`.
    ///
    /// Keeps an "upcoming" window moving forward in a long-lived session.
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use eventdeck::DateRange;
    ///
    /// let loaded = Utc::now() - Duration::days(3);
    /// let now = Utc::now();
    /// let range = DateRange::upcoming(loaded, 30).advanced_to(now);
    /// assert_eq!(range.start, now);
    /// assert_eq!(range.end - range.start, Duration::days(30));
    /// ```
    #[must_use]
    pub fn advanced_to(self, now: DateTime<Utc>) -> Self {
        if now <= self.start {
            return self;
        }
        Self {
            start: now,
            end: now + (self.end - self.start),
        }
    }

    /// Returns `true` if `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        date >= self.start && date < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn end_is_exclusive() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let range = DateRange::upcoming(start, 1);
        assert!(range.contains(start));
        assert!(!range.contains(range.end));
    }

    #[test]
    fn advancing_keeps_length_and_never_moves_back() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let range = DateRange::upcoming(start, 7);

        let later = start + Duration::days(2);
        let advanced = range.advanced_to(later);
        assert_eq!(advanced.start, later);
        assert_eq!(advanced.end, later + Duration::days(7));

        assert_eq!(range.advanced_to(start - Duration::days(1)), range);
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let start = Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert!(!DateRange::new(start, end).contains(start));
    }
}
