//! Strongpass - a strong password generator with an encrypted local store.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── shell         # Interactive menu
//! │   ├── prompt        # Terminal and piped input
//! │   ├── generate      # Non-interactive generation
//! │   ├── list          # Print saved passwords
//! │   ├── wipe          # Securely delete the store
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── policy        # Generation policy and categories
//!     ├── charset       # Alphabet building
//!     ├── validation    # Category presence checks
//!     ├── generator     # Bounded generate-and-validate loop
//!     ├── cipher/       # Record encryption (XChaCha20-Poly1305)
//!     ├── keystore      # Load-or-create symmetric key file
//!     ├── store         # Append-only encrypted password file
//!     ├── eraser        # Zero-then-unlink file deletion
//!     └── config        # strongpass.toml
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::charset::Alphabet;
pub use crate::core::eraser::secure_delete;
pub use crate::core::generator::{generate, generate_with};
pub use crate::core::keystore::{EncryptionKey, KeyStore};
pub use crate::core::policy::{Category, GenerationPolicy};
pub use crate::core::store::PasswordStore;
pub use crate::core::validation::validate;
pub use crate::error::{Error, Result};
