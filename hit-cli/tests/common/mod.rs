//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - Test environment setup with a temporary directory
//! - Command builder for the `hit` binary
//! - Input-file fixtures

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temporary directory for input files.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the hit binary.
    pub fn command(&self) -> Command {
        Command::cargo_bin("hit").expect("Failed to find hit binary")
    }

    /// Write an input file into the test environment and return its path
    /// as a string for passing on the command line.
    pub fn write_file(&self, name: &str, content: &str) -> String {
        let path = self.temp_path.join(name);
        std::fs::write(&path, content).expect("Failed to write test input");
        path.to_string_lossy().into_owned()
    }

    /// Read a file from the test environment.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.temp_path.join(name)).expect("Failed to read test file")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
