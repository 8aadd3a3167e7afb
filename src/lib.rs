//! EventDeck: a Zellij plugin listing upcoming events from a local store.
//!
//! EventDeck shows the events of the next N days, soonest first, and lets the
//! user:
//! - filter them by title, venue or city as they type
//! - delete an event straight from the list
//! - open an event read-only or for editing
//! - import events from a JSON file, with a loading indicator while it runs
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event list presenter                             │
//! │  - Event handling and actions                       │
//! │  - Load notifier                                    │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON I/O    │   │ - Store calls │
//! │ - Theming     │   │ - Ordering    │   │ - Import      │
//! │ - Components  │   │ - Backend API │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Event and date range (domain/)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/eventdeck.wasm" {
//!         store_path "~/.local/share/zellij/eventdeck/events.json"
//!         import_path "~/Downloads/events.json"
//!         range_days "30"
//!         theme "midnight"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use eventdeck::app::notifier::LoadNotifier;
//! use eventdeck::app::Event;
//! use eventdeck::{handle_event, initialize, Config};
//!
//! let mut presenter = initialize(&Config::default(), LoadNotifier::new());
//! let (_render, actions) = handle_event(&mut presenter, &Event::Shown)?;
//! // Post `actions` to the worker...
//! # Ok::<(), eventdeck::EventDeckError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, EventListPresenter, NavigationMode, SearchMode};
pub use domain::{DateRange, Event, EventDeckError, Result};
pub use ui::Theme;

use app::notifier::LoadNotifier;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default number of days covered by the list.
pub const DEFAULT_RANGE_DAYS: u32 = 30;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Event store file. Default: `events.json` in the data directory.
    pub store_path: Option<String>,

    /// JSON file imported with the `i` key. Import is disabled when unset.
    pub import_path: Option<String>,

    /// Length of the upcoming window in days. Default: 30
    pub range_days: u32,

    /// Built-in theme name (`midnight`, `daylight`). Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Log level filter, e.g. `debug` or `eventdeck=trace`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            import_path: None,
            range_days: DEFAULT_RANGE_DAYS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. Empty values count as unset, and an unparsable
    /// or zero `range_days` falls back to 30.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use eventdeck::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("range_days".to_string(), "7".to_string());
    /// map.insert("import_path".to_string(), "~/events.json".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.range_days, 7);
    /// assert_eq!(config.import_path.as_deref(), Some("~/events.json"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let range_days = get("range_days")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|days| *days > 0)
            .unwrap_or(DEFAULT_RANGE_DAYS);

        Self {
            store_path: get("store_path"),
            import_path: get("import_path"),
            range_days,
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Store file location inside the sandbox.
    #[must_use]
    pub fn resolved_store_path(&self) -> PathBuf {
        self.store_path.as_deref().map_or_else(infrastructure::default_store_path, |path| {
            PathBuf::from(infrastructure::expand_tilde(path))
        })
    }

    /// Import file location inside the sandbox, if import is configured.
    #[must_use]
    pub fn resolved_import_path(&self) -> Option<String> {
        self.import_path.as_deref().map(infrastructure::expand_tilde)
    }

    /// Loads the configured theme, falling back to the default one.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates the event list presenter for `config`.
///
/// The presenter covers the next `range_days` days, counted again each time
/// the list becomes visible, and listens to `notifier` while visible.
#[must_use]
pub fn initialize(config: &Config, notifier: LoadNotifier) -> EventListPresenter {
    tracing::debug!(range_days = config.range_days, "initializing eventdeck plugin");

    let range = DateRange::upcoming(chrono::Utc::now(), config.range_days);
    EventListPresenter::new(range, notifier, config.load_theme())
        .with_import_path(config.resolved_import_path())
}
