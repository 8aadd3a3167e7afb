//! Free-text filtering of the event list.
//!
//! A term matches an event when the lowercased term is a substring of the
//! lowercased title, venue or city. Country and date are not searched. Matching
//! keeps the input order; there is no ranking.

use crate::domain::Event;

/// Returns `true` if `needle` (already lowercased) occurs in the title, venue or city.
#[must_use]
pub fn matches(event: &Event, needle: &str) -> bool {
    [&event.title, &event.venue, &event.city]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Filters `events` down to those matching `term`, case-insensitively.
///
/// An empty term returns every event; callers treat that as "no search".
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use eventdeck::app::filter::filter_events;
/// use eventdeck::Event;
///
/// let events = vec![
///     Event::new("1", "Jazz Night", "Blue Note", "NYC", "USA", Utc::now()),
///     Event::new("2", "Rock Fest", "Arena", "LA", "USA", Utc::now()),
/// ];
/// let hits = filter_events(&events, "BLUE");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].title, "Jazz Night");
/// ```
#[must_use]
pub fn filter_events(events: &[Event], term: &str) -> Vec<Event> {
    let needle = term.to_lowercase();
    events
        .iter()
        .filter(|event| matches(event, &needle))
        .cloned()
        .collect()
}

/// Byte ranges of every case-insensitive occurrence of `term` in `text`.
///
/// Used by the view model to highlight matches in a row title. Returns nothing
/// when lowercasing changes the byte length of `text`, since the offsets would
/// no longer line up.
#[must_use]
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return vec![];
    }

    let haystack = text.to_lowercase();
    let needle = term.to_lowercase();
    if haystack.len() != text.len() {
        return vec![];
    }

    haystack
        .match_indices(&needle)
        .map(|(start, found)| (start, start + found.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> Vec<Event> {
        vec![
            Event::new("1", "Jazz Night", "Blue Note", "NYC", "USA", Utc::now()),
            Event::new("2", "Rock Fest", "Arena", "LA", "USA", Utc::now()),
            Event::new("3", "Blues Brunch", "Cafe", "Chicago", "USA", Utc::now()),
        ]
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.event_id.as_str()).collect()
    }

    #[test]
    fn matches_title_venue_or_city() {
        let events = sample();
        assert_eq!(ids(&filter_events(&events, "fest")), ["2"]);
        assert_eq!(ids(&filter_events(&events, "note")), ["1"]);
        assert_eq!(ids(&filter_events(&events, "chicago")), ["3"]);
    }

    #[test]
    fn keeps_relative_order_of_matches() {
        let events = sample();
        assert_eq!(ids(&filter_events(&events, "blue")), ["1", "3"]);
    }

    #[test]
    fn country_is_not_searched() {
        assert!(filter_events(&sample(), "usa").is_empty());
    }

    #[test]
    fn empty_term_keeps_everything() {
        assert_eq!(filter_events(&sample(), "").len(), 3);
    }

    #[test]
    fn match_ranges_finds_every_occurrence() {
        assert_eq!(match_ranges("Blue Blues", "BLUE"), vec![(0, 4), (5, 9)]);
        assert!(match_ranges("Blue", "").is_empty());
    }
}
