//! Encrypted password store.
//!
//! An append-only text file with one encrypted record per line, in
//! insertion order. Records are never rewritten; the only way to remove
//! them is to erase the whole file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::cipher::{self, Cipher, XChaCha};
use crate::core::constants;
use crate::core::eraser;
use crate::core::keystore::KeyStore;
use crate::error::{CipherError, Error, Result, StoreError};

/// Password store file bound to the key store that encrypts it.
#[derive(Debug, Clone)]
pub struct PasswordStore {
    path: PathBuf,
    keys: KeyStore,
}

impl Default for PasswordStore {
    fn default() -> Self {
        Self::new(constants::STORE_FILE, KeyStore::default())
    }
}

impl PasswordStore {
    pub fn new(path: impl Into<PathBuf>, keys: KeyStore) -> Self {
        Self {
            path: path.into(),
            keys,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn keys(&self) -> &KeyStore {
        &self.keys
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Encrypt `password` and append it as a new line.
    ///
    /// Creates the key file and the store file if either is missing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on key or file I/O failures and `CipherError`
    /// if encryption fails.
    pub fn save(&self, password: &str) -> Result<()> {
        let key = self.keys.load_or_create()?;
        let record = cipher::encrypt(password, &key)?;

        let failed = |source| StoreError::WriteFailed {
            path: self.path.display().to_string(),
            source,
        };

        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path).map_err(failed)?;
        file.write_all(format!("{}\n", record).as_bytes())
            .map_err(failed)?;

        debug!(path = %self.path.display(), cipher = XChaCha.name(), "password saved");
        Ok(())
    }

    /// Decrypt every record, in file order.
    ///
    /// A missing store file yields an empty list and leaves the key file
    /// untouched. Every line is a record, so a blank line is corrupt too.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::CorruptRecord` naming the first record that
    /// fails to decrypt; nothing is returned for the other records.
    pub fn load_all(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no store file");
            return Ok(Vec::new());
        }

        let key = self.keys.load_or_create()?;
        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::ReadFailed {
            path: self.path.display().to_string(),
            source,
        })?;

        let passwords = contents
            .lines()
            .enumerate()
            .map(|(index, line)| {
                cipher::decrypt(line, &key).map_err(|e| match e {
                    Error::Cipher(CipherError::DecryptionFailed(reason)) => {
                        CipherError::CorruptRecord {
                            line: index + 1,
                            reason,
                        }
                        .into()
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(path = %self.path.display(), records = passwords.len(), "store loaded");
        Ok(passwords)
    }

    /// Securely erase the store file. The key file is kept.
    pub fn erase(&self) -> Result<()> {
        eraser::secure_delete(&self.path)
    }
}
