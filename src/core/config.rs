//! Configuration file management.
//!
//! Handles reading and validating the optional `strongpass.toml`. Every
//! field has a built-in default, so a missing file or a partial file is
//! always fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::keystore::KeyStore;
use crate::core::policy::GenerationPolicy;
use crate::core::store::PasswordStore;
use crate::error::{ConfigError, Result};

/// Settings loaded from `strongpass.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Policy offered as the default in prompts and used by `generate`
    pub defaults: GenerationPolicy,
    /// Key and store file locations
    pub files: Files,
}

/// Key and store file locations, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Files {
    pub key: PathBuf,
    pub store: PathBuf,
}

impl Default for Files {
    fn default() -> Self {
        Self {
            key: PathBuf::from(constants::KEY_FILE),
            store: PathBuf::from(constants::STORE_FILE),
        }
    }
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load `strongpass.toml` from the current directory, or defaults if absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load a configuration file that must exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read,
    /// `ConfigError::Parse` for malformed TOML and `ConfigError::Invalid`
    /// if validation fails.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        debug!(
            length = config.defaults.length,
            key = %config.files.key.display(),
            store = %config.files.store.display(),
            "config loaded"
        );

        Ok(config)
    }

    /// Check the configuration for values that can never work.
    pub fn validate(&self) -> Result<()> {
        if self.defaults.length == 0 {
            return Err(ConfigError::Invalid("defaults.length must be at least 1".to_string()).into());
        }
        if self.defaults.length > constants::MAX_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "defaults.length must be at most {}",
                constants::MAX_LENGTH
            ))
            .into());
        }
        if self.files.key == self.files.store {
            return Err(ConfigError::Invalid(format!(
                "key and store must be different files (both are {})",
                self.files.key.display()
            ))
            .into());
        }
        Ok(())
    }

    /// Password store described by this configuration.
    pub fn password_store(&self) -> PasswordStore {
        PasswordStore::new(&self.files.store, KeyStore::new(&self.files.key))
    }
}
