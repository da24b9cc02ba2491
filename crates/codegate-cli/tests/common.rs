//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".codegate");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// A command wired to this fixture's isolated data dir.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("codegate").expect("Failed to find codegate binary");
        cmd.env("CODEGATE_PATH", &self.data_dir);
        cmd.env_remove("CODEGATE_PASSWORD");
        cmd
    }

    /// Write a config pointing at the given backend URL.
    pub fn write_config(&self, server_url: &str) {
        fs::write(
            self.data_dir.join("config.toml"),
            format!("server_url = \"{}\"\n", server_url),
        )
        .expect("Failed to write config");
    }

    /// Persist a session token the way a successful login would.
    pub fn write_token(&self, token: &str) {
        fs::write(self.data_dir.join("token"), token).expect("Failed to write token");
    }

    pub fn token_exists(&self) -> bool {
        self.data_dir.join("token").exists()
    }
}
