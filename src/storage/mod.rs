//! Storage layer for persistent event data.
//!
//! # Modules
//!
//! - `backend`: [`EventStore`] trait implemented by every backend
//! - `json`: JSON file-based implementation
//! - `ordering`: chronological sorting and date-range selection
//! - `models`: storage record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;
pub mod ordering;

pub use backend::EventStore;
pub use json::JsonEventStore;
pub use models::EventRecord;
pub use ordering::{sort_chronologically, within_range};
