//! Theme management and ANSI escape sequence generation.
//!
//! Two themes are built in:
//!
//! - `midnight`: dark theme (default)
//! - `daylight`: light theme
//!
//! Custom themes are TOML files:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e0def4"
//! selection_fg = "#191724"
//! selection_bg = "#ebbcba"
//! text_normal = "#e0def4"
//! text_dim = "#6e6a86"
//! date_fg = "#9ccfd8"
//! border = "#403d52"
//! search_bar_border = "#ebbcba"
//! match_highlight_fg = "#191724"
//! match_highlight_bg = "#f6c177"
//! empty_state_fg = "#31748f"
//! busy_fg = "#f6c177"
//! error_fg = "#eb6f92"
//! ```

use crate::domain::error::{EventDeckError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "midnight";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (e.g. `"#e0def4"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer and secondary text.
    pub text_dim: String,
    /// Date column.
    pub date_fg: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Loading indicator in the header.
    pub busy_fg: String,
    /// Store error line.
    pub error_fg: String,
}

impl Theme {
    /// Looks up a built-in theme by name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eventdeck::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::from_name("daylight").unwrap().name, "daylight");
    /// assert!(Theme::from_name("neon").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "midnight" => Some(Self::midnight()),
            "daylight" => Some(Self::daylight()),
            _ => None,
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`EventDeckError::Theme`] if the file cannot be read or is not a
    /// valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| EventDeckError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| EventDeckError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    fn midnight() -> Self {
        Self {
            name: "midnight".to_string(),
            colors: ThemeColors {
                header_fg: "#e0def4".to_string(),
                header_bg: None,
                selection_fg: "#191724".to_string(),
                selection_bg: "#ebbcba".to_string(),
                text_normal: "#e0def4".to_string(),
                text_dim: "#6e6a86".to_string(),
                date_fg: "#9ccfd8".to_string(),
                border: "#403d52".to_string(),
                search_bar_border: "#ebbcba".to_string(),
                match_highlight_fg: "#191724".to_string(),
                match_highlight_bg: "#f6c177".to_string(),
                empty_state_fg: "#31748f".to_string(),
                busy_fg: "#f6c177".to_string(),
                error_fg: "#eb6f92".to_string(),
            },
        }
    }

    fn daylight() -> Self {
        Self {
            name: "daylight".to_string(),
            colors: ThemeColors {
                header_fg: "#575279".to_string(),
                header_bg: Some("#f2e9e1".to_string()),
                selection_fg: "#faf4ed".to_string(),
                selection_bg: "#907aa9".to_string(),
                text_normal: "#575279".to_string(),
                text_dim: "#9893a5".to_string(),
                date_fg: "#56949f".to_string(),
                border: "#dfdad9".to_string(),
                search_bar_border: "#907aa9".to_string(),
                match_highlight_fg: "#faf4ed".to_string(),
                match_highlight_bg: "#ea9d34".to_string(),
                empty_state_fg: "#286983".to_string(),
                busy_fg: "#ea9d34".to_string(),
                error_fg: "#b4637a".to_string(),
            },
        }
    }

    /// Parses `#rrggbb`; anything malformed renders as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .unwrap_or(255)
        };

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    ///
    /// ```rust
    /// use eventdeck::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_is_midnight() {
        assert_eq!(Theme::default().name, DEFAULT_THEME);
        assert_eq!(Theme::from_name(DEFAULT_THEME), Some(Theme::default()));
    }

    #[test]
    fn theme_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        let mut theme = Theme::from_name("daylight").unwrap();
        theme.name = "custom".to_string();
        fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        assert_eq!(Theme::from_file(&path).unwrap(), theme);
    }

    #[test]
    fn broken_theme_file_is_a_theme_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "name = \"half\"\n").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(EventDeckError::Theme(_))));
        assert!(matches!(
            Theme::from_file(dir.path().join("missing.toml")),
            Err(EventDeckError::Theme(_))
        ));
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#12"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#000000"), "\u{1b}[48;2;0;0;0m");
    }
}
