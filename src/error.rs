//! Error types.
//!
//! Each core component has its own error enum; they all convert into the
//! top-level [`Error`] so callers can use a single `Result` alias.

use thiserror::Error;

/// Top-level error for all strongpass operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("confirmation required in non-interactive mode")]
    ConfirmationRequired,
}

/// Password generation errors.
///
/// All variants describe a policy that cannot produce a password; no
/// partial password is ever returned alongside them.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("invalid configuration: no character sets selected")]
    EmptyAlphabet,

    #[error("invalid configuration: password length must be at least 1")]
    InvalidLength,

    #[error("invalid configuration: length {length} exceeds the maximum of {max}")]
    TooLong { length: usize, max: usize },

    #[error("invalid configuration: length {length} cannot hold {required} required character classes")]
    Unsatisfiable { length: usize, required: usize },

    #[error("invalid configuration: no valid password after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Key file and password store I/O errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid key file {path}: {reason}")]
    InvalidKey { path: String, reason: String },
}

/// Record encryption and decryption errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("decryption failed for record on line {line}: {reason}")]
    CorruptRecord { line: usize, reason: String },
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error means the requested policy cannot be satisfied.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Error::Generate(_))
    }

    /// Whether this error came from a stored record failing to decrypt.
    pub fn is_decryption(&self) -> bool {
        matches!(
            self,
            Error::Cipher(CipherError::DecryptionFailed(_))
                | Error::Cipher(CipherError::CorruptRecord { .. })
        )
    }
}
