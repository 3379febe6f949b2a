//! Symmetric key storage.
//!
//! A single key file holds the base64-encoded 32-byte key used for every
//! password record. The file is created on first access and reused after
//! that; the key is never rotated.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{Result, StoreError};

/// A symmetric encryption key. Wiped from memory on drop.
pub struct EncryptionKey {
    bytes: Zeroizing<[u8; constants::KEY_LEN]>,
}

impl EncryptionKey {
    /// Generate a fresh random key from the OS CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = Zeroizing::new([0u8; constants::KEY_LEN]);
        OsRng.fill_bytes(&mut bytes[..]);
        Self { bytes }
    }

    pub fn from_bytes(bytes: [u8; constants::KEY_LEN]) -> Self {
        Self {
            bytes: Zeroizing::new(bytes),
        }
    }

    pub fn as_bytes(&self) -> &[u8; constants::KEY_LEN] {
        &self.bytes
    }

    /// Short identifier for logs: first 8 hex digits of SHA-256(key).
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.bytes.as_slice());
        digest[..4].iter().map(|b| format!("{:02x}", b)).collect()
    }

    fn encode(&self) -> Zeroizing<String> {
        Zeroizing::new(STANDARD.encode(self.bytes.as_slice()))
    }

    fn decode(encoded: &str) -> std::result::Result<Self, String> {
        let raw = Zeroizing::new(
            STANDARD
                .decode(encoded.trim())
                .map_err(|e| format!("not base64: {}", e))?,
        );
        let bytes: [u8; constants::KEY_LEN] = raw.as_slice().try_into().map_err(|_| {
            format!(
                "expected {} key bytes, found {}",
                constants::KEY_LEN,
                raw.len()
            )
        })?;
        Ok(Self::from_bytes(bytes))
    }
}

impl std::fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionKey")
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

/// Key file location with load-or-create semantics.
#[derive(Debug, Clone)]
pub struct KeyStore {
    path: PathBuf,
}

impl Default for KeyStore {
    fn default() -> Self {
        Self::new(constants::KEY_FILE)
    }
}

impl KeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the key file exists yet.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Return the stored key, creating the key file first if it is absent.
    ///
    /// The key is always read back from disk, so a freshly created key and
    /// a pre-existing one follow the same path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed`/`ReadFailed` on I/O failures and
    /// `StoreError::InvalidKey` if the file does not hold a valid key.
    pub fn load_or_create(&self) -> Result<EncryptionKey> {
        if !self.path.exists() {
            self.create()?;
        }
        self.load()
    }

    fn create(&self) -> Result<()> {
        debug!(path = %self.path.display(), "generating new key");

        let key = EncryptionKey::generate();
        let write_failed = |source| StoreError::WriteFailed {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path).map_err(write_failed)?;
        file.write_all(key.encode().as_bytes())
            .and_then(|_| file.write_all(b"\n"))
            .and_then(|_| file.sync_all())
            .map_err(write_failed)?;

        debug!(path = %self.path.display(), fingerprint = %key.fingerprint(), "key saved");
        Ok(())
    }

    fn load(&self) -> Result<EncryptionKey> {
        debug!(path = %self.path.display(), "loading key");

        #[cfg(unix)]
        self.check_permissions();

        let contents = Zeroizing::new(fs::read_to_string(&self.path).map_err(|source| {
            StoreError::ReadFailed {
                path: self.path.display().to_string(),
                source,
            }
        })?);

        let key = EncryptionKey::decode(&contents).map_err(|reason| StoreError::InvalidKey {
            path: self.path.display().to_string(),
            reason,
        })?;

        debug!(fingerprint = %key.fingerprint(), "key loaded");
        Ok(key)
    }

    #[cfg(unix)]
    fn check_permissions(&self) {
        use std::os::unix::fs::PermissionsExt;

        if let Ok(metadata) = fs::metadata(&self.path) {
            let mode = metadata.permissions().mode() & 0o777;
            if mode & 0o077 != 0 {
                warn!(
                    path = %self.path.display(),
                    mode = %format!("{:o}", mode),
                    "insecure key file permissions"
                );
            }
        }
    }
}
