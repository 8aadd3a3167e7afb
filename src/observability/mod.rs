//! Logging and trace-context propagation.
//!
//! Events and spans go through a `tracing-subscriber` registry:
//!
//! ```text
//! tracing macros → EnvFilter → OpenTelemetryLayer (span ids for the worker)
//!                            → fmt layer → FileWriter → eventdeck.log (rotated)
//! ```
//!
//! The log level comes from the `trace_level` plugin option and defaults to
//! `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer used as the `fmt` sink

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
