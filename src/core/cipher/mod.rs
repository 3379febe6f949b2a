//! Record encryption.
//!
//! Provides the encryption/decryption abstraction used by the password
//! store. Every backend must emit a single line of text per record that can
//! be decrypted with nothing but the key.
//!
//! ## Backends
//!
//! - **xchacha**: XChaCha20-Poly1305 with a random 192-bit nonce per record.

use crate::core::keystore::EncryptionKey;
use crate::error::Result;

mod xchacha;

pub use xchacha::XChaCha;

/// Authenticated symmetric cipher for password records.
pub trait Cipher {
    /// Encrypt plaintext under `key`.
    ///
    /// # Returns
    ///
    /// A single-line, self-describing ciphertext string.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EncryptionFailed` if encryption fails.
    fn encrypt(&self, plaintext: &str, key: &EncryptionKey) -> Result<String>;

    /// Decrypt a string produced by [`Cipher::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` if the ciphertext is malformed,
    /// was tampered with, or was encrypted under a different key.
    fn decrypt(&self, encrypted: &str, key: &EncryptionKey) -> Result<String>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Encrypt with the default backend.
pub fn encrypt(plaintext: &str, key: &EncryptionKey) -> Result<String> {
    XChaCha.encrypt(plaintext, key)
}

/// Decrypt with the default backend.
pub fn decrypt(encrypted: &str, key: &EncryptionKey) -> Result<String> {
    XChaCha.decrypt(encrypted, key)
}
