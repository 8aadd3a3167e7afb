//! Application layer coordinating the presenter, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain/storage/worker
//! layers.
//!
//! ```text
//! Keys / visibility → Events → handle_event → Presenter → Actions → Side Effects
//!                                   ↑                                  ↓
//!                                   └─── Worker Responses / Load Signals ┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the presenter
//! - [`filter`]: Case-insensitive substring filtering and match highlighting
//! - [`handler`]: Event processing and state transition coordinator
//! - [`modes`]: Search, display and navigation mode types
//! - [`notifier`]: Load-state publish/subscribe channel
//! - [`presenter`]: The event list presenter and view model computation

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod notifier;
pub mod presenter;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{DisplayState, NavigationMode, SearchMode};
pub use presenter::EventListPresenter;
