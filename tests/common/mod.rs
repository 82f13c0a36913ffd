//! Common test utilities for integration tests
//!
//! Provides fixture directories holding an env file and a config file.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

use litellm_preflight::PreflightOptions;

/// A temporary project directory with optional `.env` and `config.yml`
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn env_path(&self) -> PathBuf {
        self.dir.path().join(".env")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.yml")
    }

    #[must_use]
    pub fn with_env(self, contents: &str) -> Self {
        std::fs::write(self.env_path(), contents).expect("Failed to write .env");
        self
    }

    #[must_use]
    pub fn with_config(self, contents: &str) -> Self {
        std::fs::write(self.config_path(), contents).expect("Failed to write config.yml");
        self
    }

    /// Options pointing at this fixture, ignoring the process environment
    pub fn options(&self) -> PreflightOptions {
        PreflightOptions {
            env_path: self.env_path(),
            config_path: self.config_path(),
            test_api: false,
            isolated: true,
        }
    }
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
