//! JSON file-based event store.
//!
//! Keeps the whole event set in memory and writes it back with an atomic
//! write-to-temp-then-rename on every mutation.
//!
//! # Performance Characteristics
//!
//! - **Read**: in-memory scan, O(n) per range query
//! - **Write**: O(n), serializes the whole document
//! - **Best for**: personal event lists of a few thousand entries

use crate::domain::error::{EventDeckError, Result};
use crate::domain::DateRange;
use crate::storage::backend::EventStore;
use crate::storage::models::EventRecord;
use crate::storage::ordering::within_range;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const STORAGE_VERSION: u32 = 1;

/// Top-level document serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// All stored events keyed by `event_id`.
    #[serde(default)]
    events: BTreeMap<String, EventRecord>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            events: BTreeMap::new(),
        }
    }
}

/// JSON file event store.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "events": {
///     "e1": {
///       "event_id": "e1",
///       "title": "Jazz Night",
///       "venue": "Blue Note",
///       "city": "NYC",
///       "country": "USA",
///       "date": "2026-11-02T20:00:00Z",
///       "created_at": 1790000000
///     }
///   }
/// }
/// ```
pub struct JsonEventStore {
    file_path: PathBuf,
    data: StorageData,
    dirty: bool,
}

impl JsonEventStore {
    /// Creates or opens a JSON event store.
    ///
    /// Loads the file if it exists, otherwise starts empty. Parent directories are
    /// created on demand.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the existing
    /// file cannot be read or parsed.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON event store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StorageData::default()
        };

        tracing::debug!(event_count = data.events.len(), "event store initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| EventDeckError::Store(format!("failed to parse JSON: {e}")))?;

        if data.version > STORAGE_VERSION {
            return Err(EventDeckError::Store(format!(
                "unsupported storage version {} (expected <= {STORAGE_VERSION})",
                data.version
            )));
        }

        tracing::debug!(version = data.version, events = data.events.len(), "loaded store data");
        Ok(data)
    }

    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| EventDeckError::Store(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "event store saved");
        Ok(())
    }
}

impl EventStore for JsonEventStore {
    fn fetch_events_in_range(&self, range: &DateRange) -> Result<Vec<EventRecord>> {
        let _span = tracing::debug_span!("json_fetch_events_in_range",
            start = %range.start,
            end = %range.end
        ).entered();

        let events = within_range(self.data.events.values(), range);

        tracing::debug!(count = events.len(), "retrieved events");
        Ok(events)
    }

    fn fetch_by_id(&self, event_id: &str) -> Result<Option<EventRecord>> {
        let _span = tracing::debug_span!("json_fetch_by_id", event_id = %event_id).entered();

        let event = self.data.events.get(event_id).cloned();

        tracing::debug!(found = event.is_some(), "event lookup complete");
        Ok(event)
    }

    fn delete(&mut self, event_id: &str) -> Result<bool> {
        let _span = tracing::debug_span!("json_delete", event_id = %event_id).entered();

        let removed = self.data.events.remove(event_id).is_some();
        if removed {
            self.dirty = true;
            self.save_to_file()?;
        }

        tracing::debug!(removed, "delete complete");
        Ok(removed)
    }

    fn upsert_batch(&mut self, events: &[EventRecord]) -> Result<usize> {
        let _span = tracing::debug_span!("json_upsert_batch", count = events.len()).entered();

        for event in events {
            match self.data.events.get_mut(&event.event_id) {
                Some(existing) => {
                    let created_at = existing.created_at;
                    *existing = event.clone();
                    existing.created_at = created_at;
                }
                None => {
                    self.data.events.insert(event.event_id.clone(), event.clone());
                }
            }
        }

        self.dirty = true;
        self.save_to_file()?;

        Ok(events.len())
    }
}

impl Drop for JsonEventStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn record(id: &str, title: &str, days_ahead: i64) -> EventRecord {
        EventRecord {
            event_id: id.to_string(),
            title: title.to_string(),
            venue: "Hall".to_string(),
            city: "Oslo".to_string(),
            country: "Norway".to_string(),
            date: Utc::now() + Duration::days(days_ahead),
            created_at: 1,
        }
    }

    #[test]
    fn upserted_events_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");

        {
            let mut store = JsonEventStore::new(path.clone()).unwrap();
            store.upsert_batch(&[record("a", "First", 1), record("b", "Second", 2)]).unwrap();
        }

        let store = JsonEventStore::new(path).unwrap();
        assert!(store.fetch_by_id("a").unwrap().is_some());
        assert!(store.fetch_by_id("b").unwrap().is_some());
    }

    #[test]
    fn upsert_keeps_original_creation_time() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonEventStore::new(dir.path().join("events.json")).unwrap();

        store.upsert_batch(&[record("a", "First", 1)]).unwrap();
        let mut renamed = record("a", "Renamed", 1);
        renamed.created_at = 99;
        store.upsert_batch(&[renamed]).unwrap();

        let stored = store.fetch_by_id("a").unwrap().unwrap();
        assert_eq!(stored.title, "Renamed");
        assert_eq!(stored.created_at, 1);
    }

    #[test]
    fn delete_reports_whether_anything_was_removed() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonEventStore::new(dir.path().join("events.json")).unwrap();
        store.upsert_batch(&[record("a", "First", 1)]).unwrap();

        assert!(store.delete("a").unwrap());
        assert!(!store.delete("a").unwrap());
        assert!(store.fetch_by_id("a").unwrap().is_none());
    }

    #[test]
    fn range_fetch_excludes_past_events() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonEventStore::new(dir.path().join("events.json")).unwrap();
        store
            .upsert_batch(&[record("past", "Past", -3), record("soon", "Soon", 3), record("far", "Far", 90)])
            .unwrap();

        let upcoming = store.fetch_events_in_range(&DateRange::upcoming(Utc::now(), 30)).unwrap();
        let ids: Vec<_> = upcoming.iter().map(|r| r.event_id.as_str()).collect();
        assert_eq!(ids, ["soon"]);
    }

    #[test]
    fn corrupt_file_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonEventStore::new(path).err().unwrap();
        assert!(matches!(err, EventDeckError::Store(_)));
    }
}
