//! Worker thread implementation for store operations.
//!
//! Every store call runs here, off the plugin's render loop. Requests arrive as
//! [`WorkerMessage`]s and each produces exactly one [`WorkerResponse`]. Parent
//! trace contexts carried by the messages are attached so worker spans nest
//! under the plugin span that issued the request.

use crate::app::modes::NavigationMode;
use crate::domain::error::{EventDeckError, Result};
use crate::domain::{DateRange, Event};
use crate::infrastructure::paths;
use crate::storage::models::EventRecord;
use crate::storage::{EventStore, JsonEventStore};
use crate::worker::{StoreOperation, WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker state for handling store operations.
///
/// Runs on a separate thread spawned by Zellij. The store is opened lazily on
/// the first message, at the default location unless an `OpenStore` message
/// names another file.
#[derive(Serialize, Deserialize, Default)]
pub struct StoreWorker {
    #[serde(skip)]
    store: Option<Box<dyn EventStore>>,
}

impl StoreWorker {
    /// Creates a worker backed by the JSON store at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file exists but cannot be read or parsed.
    pub fn new(path: PathBuf) -> Result<Self> {
        let store: Box<dyn EventStore> = Box::new(JsonEventStore::new(path)?);
        Ok(Self::with_store(store))
    }

    /// Creates a worker around an already opened store.
    #[must_use]
    pub fn with_store(store: Box<dyn EventStore>) -> Self {
        Self { store: Some(store) }
    }

    fn store(&mut self) -> Result<&mut Box<dyn EventStore>> {
        self.store
            .as_mut()
            .ok_or_else(|| EventDeckError::Worker("store not initialized".to_string()))
    }

    /// Turns a store result into a response, logging the outcome.
    fn respond<T, F>(operation: StoreOperation, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = %operation, "store operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = %operation, error = %e, "store operation failed");
                WorkerResponse::Error {
                    operation,
                    message: e.to_string(),
                }
            }
        }
    }

    fn handle_open_store(&mut self, path: String) -> WorkerResponse {
        Self::respond(
            StoreOperation::Open,
            JsonEventStore::new(PathBuf::from(&path)),
            |store| {
                // Dropping the previous store flushes any pending writes.
                self.store = Some(Box::new(store));
                tracing::debug!(store_path = %path, "store opened");
                WorkerResponse::StoreOpened { path }
            },
        )
    }

    fn handle_fetch_range(&mut self, range: &DateRange) -> WorkerResponse {
        Self::respond(
            StoreOperation::FetchRange,
            self.store().and_then(|store| store.fetch_events_in_range(range)),
            |records| {
                tracing::debug!(event_count = records.len(), "events fetched for range");
                WorkerResponse::EventsFetched {
                    events: records.into_iter().map(Event::from).collect(),
                }
            },
        )
    }

    fn handle_fetch_by_id(&mut self, event_id: String, mode: NavigationMode) -> WorkerResponse {
        Self::respond(
            StoreOperation::FetchById,
            self.store().and_then(|store| store.fetch_by_id(&event_id)),
            |record| match record {
                Some(record) => WorkerResponse::EventFetched {
                    event: record.into(),
                    mode,
                },
                None => WorkerResponse::EventNotFound { event_id },
            },
        )
    }

    fn handle_delete(&mut self, event_id: String) -> WorkerResponse {
        Self::respond(
            StoreOperation::Delete,
            self.store().and_then(|store| store.delete(&event_id)),
            |removed| WorkerResponse::EventDeleted { event_id, removed },
        )
    }

    fn handle_import(&mut self, path: &str) -> WorkerResponse {
        let result = read_import_file(Path::new(path)).and_then(|records| {
            let store = self.store()?;
            store.upsert_batch(&records)
        });

        Self::respond(StoreOperation::Import, result, |count| {
            tracing::debug!(import_path = %path, count, "events imported");
            WorkerResponse::EventsImported { count }
        })
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Returns a context guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the response for it.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", operation = %message.operation());
        let _guard = span.entered();

        match message {
            WorkerMessage::OpenStore { path, .. } => self.handle_open_store(path),
            WorkerMessage::FetchEventsInRange { range, .. } => self.handle_fetch_range(&range),
            WorkerMessage::FetchEventById { event_id, mode, .. } => {
                self.handle_fetch_by_id(event_id, mode)
            }
            WorkerMessage::DeleteEvent { event_id, .. } => self.handle_delete(event_id),
            WorkerMessage::ImportEvents { path, .. } => self.handle_import(&path),
        }
    }
}

/// Reads a JSON array of events and turns it into store records.
fn read_import_file(path: &Path) -> Result<Vec<EventRecord>> {
    let content = std::fs::read_to_string(path)?;
    let events: Vec<Event> = serde_json::from_str(&content)
        .map_err(|e| EventDeckError::Store(format!("invalid import file {}: {e}", path.display())))?;

    Ok(events.iter().map(EventRecord::from_event).collect())
}

/// Sets up the same tracing configuration as the plugin thread, so worker logs
/// land in the same file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for StoreWorker {
    /// Handles a message from the plugin thread and posts the response back
    /// under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let needs_default_store = self.store.is_none()
            && !matches!(worker_message, WorkerMessage::OpenStore { .. });
        let response = if needs_default_store {
            match Self::new(paths::default_store_path()) {
                Ok(worker) => {
                    self.store = worker.store;
                    self.handle_message(worker_message)
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to initialize store");
                    WorkerResponse::Error {
                        operation: worker_message.operation(),
                        message: format!("failed to open store: {e}"),
                    }
                }
            }
        } else {
            self.handle_message(worker_message)
        };

        match serde_json::to_string(&response) {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}
