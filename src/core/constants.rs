//! Constants used throughout strongpass.
//!
//! Centralizes file names, policy defaults and character classes.

/// Key file name, relative to the working directory.
pub const KEY_FILE: &str = "key.key";

/// Password store file name, relative to the working directory.
pub const STORE_FILE: &str = "passwords.txt";

/// Optional configuration file name.
pub const CONFIG_FILE: &str = "strongpass.toml";

/// Default password length.
pub const DEFAULT_LENGTH: usize = 12;

/// Default for every optional character class.
pub const DEFAULT_INCLUDE: bool = true;

/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 4096;

/// Upper bound on generate-and-validate rounds before giving up.
pub const MAX_ATTEMPTS: usize = 1000;

/// Size of the symmetric key in bytes.
pub const KEY_LEN: usize = 32;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";

/// ASCII punctuation, in code point order.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
