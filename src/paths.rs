//! Centralized path definitions for truthforge
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.truthforge/
//! └── config.toml               # service origin, theme preference
//! ```
//!
//! Session state (results, fixed solutions) is never persisted; only
//! user preferences live on disk.

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".truthforge";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global truthforge directory.
///
/// Returns `~/.truthforge/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.truthforge/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
