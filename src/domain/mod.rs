//! Domain layer for the EventDeck plugin.
//!
//! Core types independent of Zellij APIs and storage details.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`event`]: The `Event` record shown in each row
//! - [`range`]: The date window the list is fetched for

pub mod error;
pub mod event;
pub mod range;

pub use error::{EventDeckError, Result};
pub use event::Event;
pub use range::DateRange;
