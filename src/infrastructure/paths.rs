//! Path manipulation utilities for the Zellij sandbox environment.
//!
//! The host filesystem is mounted under `/host` inside the plugin sandbox. These
//! helpers handle tilde expansion and the default storage locations.

use std::path::PathBuf;

/// Returns the data directory for EventDeck storage and logs.
///
/// The directory is `/host/.local/share/zellij/eventdeck` in the Zellij sandbox.
/// `/host` points to the cwd of the last focused terminal, or the folder where
/// Zellij was started, so this usually resolves to
/// `~/.local/share/zellij/eventdeck`.
///
/// # Examples
///
/// ```
/// use eventdeck::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/eventdeck");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("eventdeck")
}

/// Returns the event store file used when no `store_path` is configured.
#[must_use]
pub fn default_store_path() -> PathBuf {
    get_data_dir().join("events.json")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// # Examples
///
/// ```
/// use eventdeck::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/events.json"), "/host/events.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix from sandbox paths for display.
///
/// # Examples
///
/// ```
/// use eventdeck::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/events/import.json"), "/events/import.json");
/// assert_eq!(strip_host_prefix("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix("/host").unwrap_or(path).to_string()
}
