//! Command implementations

mod config;
mod fix;
mod verify;

pub use config::config_cmd;
pub use fix::fix;
pub use verify::{VerifyArgs, verify};

use anyhow::Context;

/// Resolve a CLI text argument: values starting with `@` name a file
/// whose contents become the value.
pub(crate) fn read_input(value: &str) -> anyhow::Result<String> {
    if let Some(path) = value.strip_prefix('@') {
        std::fs::read_to_string(path).with_context(|| format!("failed to read input file: {path}"))
    } else {
        Ok(value.to_string())
    }
}
