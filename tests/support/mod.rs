//! Test support utilities for strongpass integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use strongpass::{KeyStore, PasswordStore};
use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// The key and store files live at their default relative paths inside
/// `dir`. Child processes use `.current_dir()`, so the test process never
/// changes its own working directory and tests can run in parallel.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with passwords already saved.
    pub fn with_passwords(passwords: &[&str]) -> Self {
        let t = Self::new();
        let store = t.store();
        for password in passwords {
            store.save(password).expect("failed to save password");
        }
        t
    }

    /// Path to the key file.
    pub fn key_path(&self) -> PathBuf {
        self.dir.path().join("key.key")
    }

    /// Path to the store file.
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("passwords.txt")
    }

    /// Library handle on the same files the binary uses.
    pub fn store(&self) -> PasswordStore {
        PasswordStore::new(self.store_path(), KeyStore::new(self.key_path()))
    }

    /// Write `strongpass.toml` into the working directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join("strongpass.toml"), contents)
            .expect("failed to write config");
    }
}
