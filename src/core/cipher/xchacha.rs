//! XChaCha20-Poly1305 backend.
//!
//! Record layout before base64 encoding:
//!
//! ```text
//! +---------+-------------------+---------------------------+
//! | version | nonce (24 bytes)  | ciphertext + tag (16 B)   |
//! +---------+-------------------+---------------------------+
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, OsRng};
use chacha20poly1305::{Key, XChaCha20Poly1305, XNonce};
use tracing::trace;

use super::Cipher;
use crate::core::keystore::EncryptionKey;
use crate::error::{CipherError, Result};

const VERSION: u8 = 0x01;
const NONCE_LEN: usize = 24;
const TAG_LEN: usize = 16;
const HEADER_LEN: usize = 1 + NONCE_LEN;

/// XChaCha20-Poly1305 cipher with base64 framing.
pub struct XChaCha;

impl XChaCha {
    fn aead(key: &EncryptionKey) -> XChaCha20Poly1305 {
        XChaCha20Poly1305::new(Key::from_slice(key.as_bytes()))
    }
}

impl Cipher for XChaCha {
    fn name(&self) -> &'static str {
        "xchacha20poly1305"
    }

    fn encrypt(&self, plaintext: &str, key: &EncryptionKey) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext = Self::aead(key)
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        let mut framed = Vec::with_capacity(HEADER_LEN + ciphertext.len());
        framed.push(VERSION);
        framed.extend_from_slice(&nonce);
        framed.extend_from_slice(&ciphertext);

        trace!(ciphertext_len = framed.len(), "encrypted");

        Ok(STANDARD.encode(framed))
    }

    fn decrypt(&self, encrypted: &str, key: &EncryptionKey) -> Result<String> {
        trace!(ciphertext_len = encrypted.len(), "decrypting");

        let framed = STANDARD
            .decode(encrypted.trim())
            .map_err(|e| CipherError::DecryptionFailed(format!("invalid base64: {}", e)))?;

        if framed.len() < HEADER_LEN + TAG_LEN {
            return Err(CipherError::DecryptionFailed(format!(
                "record too short ({} bytes)",
                framed.len()
            ))
            .into());
        }
        if framed[0] != VERSION {
            return Err(CipherError::DecryptionFailed(format!(
                "unsupported record version {}",
                framed[0]
            ))
            .into());
        }

        let nonce = XNonce::from_slice(&framed[1..HEADER_LEN]);
        let plaintext = Self::aead(key)
            .decrypt(nonce, &framed[HEADER_LEN..])
            .map_err(|_| {
                CipherError::DecryptionFailed("wrong key or corrupted record".to_string())
            })?;

        trace!(plaintext_len = plaintext.len(), "decrypted");

        String::from_utf8(plaintext)
            .map_err(|e| CipherError::DecryptionFailed(format!("UTF-8 error: {}", e)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn key(byte: u8) -> EncryptionKey {
        EncryptionKey::from_bytes([byte; 32])
    }

    #[test]
    fn test_roundtrip() {
        let k = key(1);
        for plaintext in ["", "Tr0ub4dor&3", "with spaces and \"quotes\"", "ünïcødé 🔑"] {
            let encrypted = XChaCha.encrypt(plaintext, &k).unwrap();
            assert_eq!(XChaCha.decrypt(&encrypted, &k).unwrap(), plaintext);
        }
    }

    #[test]
    fn test_ciphertext_is_single_line() {
        let encrypted = XChaCha.encrypt(&"x".repeat(4096), &key(1)).unwrap();
        assert!(!encrypted.contains('\n'));
        assert!(!encrypted.contains('\r'));
    }

    #[test]
    fn test_fresh_nonce_per_encryption() {
        let k = key(1);
        let a = XChaCha.encrypt("same", &k).unwrap();
        let b = XChaCha.encrypt("same", &k).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_wrong_key_fails() {
        let encrypted = XChaCha.encrypt("secret", &key(1)).unwrap();
        let err = XChaCha.decrypt(&encrypted, &key(2)).unwrap_err();
        assert!(err.is_decryption());
    }

    #[test]
    fn test_tampered_record_fails() {
        let k = key(1);
        let mut framed = STANDARD
            .decode(XChaCha.encrypt("secret", &k).unwrap())
            .unwrap();
        let last = framed.len() - 1;
        framed[last] ^= 0x01;
        let err = XChaCha.decrypt(&STANDARD.encode(framed), &k).unwrap_err();
        assert!(err.is_decryption());
    }

    #[test]
    fn test_malformed_input_fails() {
        let k = key(1);
        for bad in ["", "!!!not-base64!!!", "AQID"] {
            let err = XChaCha.decrypt(bad, &k).unwrap_err();
            assert!(matches!(
                err,
                Error::Cipher(CipherError::DecryptionFailed(_))
            ));
        }
    }

    #[test]
    fn test_unknown_version_fails() {
        let k = key(1);
        let mut framed = STANDARD
            .decode(XChaCha.encrypt("secret", &k).unwrap())
            .unwrap();
        framed[0] = 0x02;
        let err = XChaCha.decrypt(&STANDARD.encode(framed), &k).unwrap_err();
        assert!(err.to_string().contains("unsupported record version"));
    }
}
