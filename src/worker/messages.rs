//! Worker thread message types for cross-thread communication.
//!
//! Every store call the presenter makes is a [`WorkerMessage`] posted to the
//! worker, answered later by a [`WorkerResponse`]. Messages carry the caller's
//! trace context so worker spans link to the span that issued the request.

use crate::app::modes::NavigationMode;
use crate::domain::{DateRange, Event};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry trace and span IDs of the current span.
    ///
    /// Returns `None` when no valid span context is active, for example when
    /// tracing was never initialised.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates constructors that attach the current trace context to a message.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    open_store(OpenStore { path: String }),
    fetch_events_in_range(FetchEventsInRange { range: DateRange }),
    fetch_event_by_id(FetchEventById { event_id: String, mode: NavigationMode }),
    delete_event(DeleteEvent { event_id: String }),
    import_events(ImportEvents { path: String }),
}

/// Store requests sent from the plugin thread to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Open (or switch to) the store file at `path`. Sent once at load time.
    OpenStore {
        path: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Fetch every event inside `range`, soonest first.
    FetchEventsInRange {
        range: DateRange,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Re-read a single event so navigation gets the stored copy.
    FetchEventById {
        event_id: String,

        /// Echoed back so the reply knows which surface to open.
        mode: NavigationMode,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Delete an event. Fire-and-forget from the presenter's point of view.
    DeleteEvent {
        event_id: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Upsert every event found in a JSON array file.
    ImportEvents {
        /// Path of the file to import, already expanded for the sandbox.
        path: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// The operation this message performs, used to tag failures.
    #[must_use]
    pub const fn operation(&self) -> StoreOperation {
        match self {
            Self::OpenStore { .. } => StoreOperation::Open,
            Self::FetchEventsInRange { .. } => StoreOperation::FetchRange,
            Self::FetchEventById { .. } => StoreOperation::FetchById,
            Self::DeleteEvent { .. } => StoreOperation::Delete,
            Self::ImportEvents { .. } => StoreOperation::Import,
        }
    }

    /// Trace context attached when the message was built.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::OpenStore { trace_context, .. }
            | Self::FetchEventsInRange { trace_context, .. }
            | Self::FetchEventById { trace_context, .. }
            | Self::DeleteEvent { trace_context, .. }
            | Self::ImportEvents { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Store operation kinds, carried by error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreOperation {
    Open,
    FetchRange,
    FetchById,
    Delete,
    Import,
}

impl std::fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Open => "open store",
            Self::FetchRange => "fetch events",
            Self::FetchById => "fetch event",
            Self::Delete => "delete event",
            Self::Import => "import events",
        };
        f.write_str(name)
    }
}

/// Replies sent from the worker back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Result of `OpenStore`.
    StoreOpened { path: String },

    /// Result of `FetchEventsInRange`, soonest first.
    EventsFetched { events: Vec<Event> },

    /// Result of `FetchEventById` when the event exists.
    EventFetched { event: Event, mode: NavigationMode },

    /// Result of `FetchEventById` when the event is gone from the store.
    EventNotFound { event_id: String },

    /// Result of `DeleteEvent`. `removed` is false if the event was already gone.
    EventDeleted { event_id: String, removed: bool },

    /// Result of `ImportEvents`.
    EventsImported { count: usize },

    /// A store operation failed.
    Error {
        operation: StoreOperation,
        message: String,
    },
}
