//! Ordering and range selection for stored events.
//!
//! The list always shows events soonest first. Ties on date fall back to the
//! title and then the identifier so repeated fetches return a stable order.

use super::models::EventRecord;
use crate::domain::DateRange;

/// Sorts records by date ascending, then title, then `event_id`.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use eventdeck::storage::{sort_chronologically, EventRecord};
///
/// let now = Utc::now();
/// let mut records = vec![
///     EventRecord { event_id: "b".into(), title: "Later".into(), venue: String::new(),
///         city: String::new(), country: String::new(), date: now + Duration::days(2), created_at: 0 },
///     EventRecord { event_id: "a".into(), title: "Sooner".into(), venue: String::new(),
///         city: String::new(), country: String::new(), date: now, created_at: 0 },
/// ];
/// sort_chronologically(&mut records);
/// assert_eq!(records[0].event_id, "a");
/// ```
pub fn sort_chronologically(records: &mut [EventRecord]) {
    records.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.event_id.cmp(&b.event_id))
    });
}

/// Returns the records that fall inside `range`, sorted chronologically.
#[must_use]
pub fn within_range<'a, I>(records: I, range: &DateRange) -> Vec<EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let mut selected: Vec<EventRecord> = records
        .into_iter()
        .filter(|record| range.contains(record.date))
        .cloned()
        .collect();
    sort_chronologically(&mut selected);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: &str, title: &str, day: u32) -> EventRecord {
        EventRecord {
            event_id: id.to_string(),
            title: title.to_string(),
            venue: String::new(),
            city: String::new(),
            country: String::new(),
            date: Utc.with_ymd_and_hms(2026, 5, day, 12, 0, 0).unwrap(),
            created_at: 0,
        }
    }

    #[test]
    fn same_day_orders_by_title_then_id() {
        let mut records = vec![record("2", "Beta", 3), record("1", "Beta", 3), record("3", "Alpha", 3)];
        sort_chronologically(&mut records);
        let ids: Vec<_> = records.iter().map(|r| r.event_id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn within_range_drops_events_outside_window() {
        let records = vec![record("a", "A", 1), record("b", "B", 10), record("c", "C", 5)];
        let range = DateRange::new(
            Utc.with_ymd_and_hms(2026, 5, 2, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 5, 10, 0, 0, 0).unwrap(),
        );
        let selected = within_range(&records, &range);
        let ids: Vec<_> = selected.iter().map(|r| r.event_id.as_str()).collect();
        assert_eq!(ids, ["c"]);
    }
}
