//! Test support utilities for vaultkv integration tests.
//!
//! Provides an isolated environment for running the binary and helpers
//! for building in-memory secret trees.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod mock_vault;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use commands::UNREACHABLE_ADDR;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_vault::*;

use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// Child processes get a temporary HOME and config dir and none of the
/// caller's VAULT_* variables, so tests can run in parallel on any machine.
pub struct Test {
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        Self { home }
    }

    /// Write a config file into the temp home and return its path.
    pub fn write_config(&self, contents: &str) -> std::path::PathBuf {
        let path = self.home.path().join("vaultkv.toml");
        std::fs::write(&path, contents).expect("failed to write config");
        path
    }
}
