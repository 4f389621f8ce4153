//! Global configuration management
//!
//! Persistent user preferences: the verification service origin and the
//! output theme. Stored at `~/.truthforge/config.toml`. The theme has a
//! defined initial value (derived once from the environment's color
//! scheme when no config file exists yet) and an explicit toggle
//! operation; there is no ambient global state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::client::DEFAULT_API_URL;
use crate::paths;

/// Color theme for human output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark terminal background
    #[default]
    Dark,
    /// Light terminal background
    Light,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Derive the initial theme from the environment's color scheme.
    ///
    /// Follows the `COLORFGBG` convention; defaults to dark when the
    /// variable is absent or unparseable.
    #[must_use]
    pub fn detect() -> Self {
        std::env::var("COLORFGBG").map_or(Self::Dark, |value| Self::from_colorfgbg(&value))
    }

    /// Parse a `COLORFGBG` value (`fg;bg` or `fg;default;bg`).
    ///
    /// The last field is the background color; 7 and 15 mean a light
    /// background.
    #[must_use]
    pub fn from_colorfgbg(value: &str) -> Self {
        value
            .rsplit(';')
            .next()
            .and_then(|bg| bg.trim().parse::<u8>().ok())
            .map_or(Self::Dark, |bg| if bg == 7 || bg == 15 { Self::Light } else { Self::Dark })
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(format!("Invalid theme: {s}. Use: dark, light")),
        }
    }
}

/// Global truthforge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Origin of the verification service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI preferences
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme preference
    #[serde(default)]
    pub theme: Theme,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            ui: UiConfig::default(),
        }
    }
}

impl GlobalConfig {
    /// Load config from disk.
    ///
    /// When no config file exists yet, the theme is derived once from
    /// the environment's color scheme.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&paths::global_config())
    }

    /// Load config from a specific path
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self {
                ui: UiConfig { theme: Theme::detect() },
                ..Self::default()
            }
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&paths::global_config())
    }

    /// Save config to a specific path, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Flip the theme and return the new value
    pub const fn toggle_theme(&mut self) -> Theme {
        self.ui.theme = self.ui.theme.toggled();
        self.ui.theme
    }
}
