//! Common test utilities

pub mod server;

use assert_cmd::cargo;

/// Helper function to create a truthforge command
pub fn truthforge() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("truthforge"))
}
