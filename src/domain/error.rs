//! Error types for the EventDeck plugin.
//!
//! This module defines the centralized error type [`EventDeckError`] and a type alias
//! [`Result`] used throughout the crate. All variants are implemented with the
//! `thiserror` crate.

use thiserror::Error;

/// The main error type for EventDeck operations.
///
/// Two variants carry the contract of the event list itself:
/// [`EventDeckError::InvalidIndex`] for row access outside the effective list and
/// [`EventDeckError::Store`] for any failure reported by the event store. The
/// remaining variants cover I/O, theming and worker plumbing.
///
/// # Examples
///
/// ```
/// use eventdeck::EventDeckError;
///
/// let err = EventDeckError::InvalidIndex { index: 4, len: 2 };
/// assert_eq!(err.to_string(), "row index 4 out of range (2 rows)");
/// ```
#[derive(Debug, Error)]
pub enum EventDeckError {
    /// A row index was outside `0..len` of the effective list.
    ///
    /// This is a caller contract violation: the rendering layer asked for a row
    /// it was never told exists.
    #[error("row index {index} out of range ({len} rows)")]
    InvalidIndex {
        /// Requested row.
        index: usize,
        /// Row count of the effective list at the time of the request.
        len: usize,
    },

    /// Event store operation failed.
    ///
    /// Recoverable: the presenter keeps its lists and surfaces the message.
    #[error("Store error: {0}")]
    Store(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for EventDeck operations.
pub type Result<T> = std::result::Result<T, EventDeckError>;
