//! Background worker for store operations.
//!
//! All store I/O runs on a Zellij worker thread so the plugin's render loop
//! never blocks on the filesystem. The plugin posts requests and receives the
//! replies as custom messages.
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::StoreWorker;
pub use messages::{StoreOperation, TraceContext, WorkerMessage, WorkerResponse};
