//! Terminal user interface.
//!
//! ```text
//! EventListPresenter → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering entry points
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor, highlighting and thumbnail helpers
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{compute_detail_viewmodel, render, render_detail};
pub use theme::Theme;
pub use viewmodel::{
    DetailViewModel, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
};
