//! Password generation policy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::constants;

/// A character class whose presence can be required in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Uppercase,
    Digit,
    Special,
}

impl Category {
    /// Whether `c` belongs to this class. ASCII only.
    pub fn matches(self, c: char) -> bool {
        match self {
            Category::Uppercase => c.is_ascii_uppercase(),
            Category::Digit => c.is_ascii_digit(),
            Category::Special => c.is_ascii_punctuation(),
        }
    }

    /// Characters of this class, in alphabet order.
    pub fn chars(self) -> &'static str {
        match self {
            Category::Uppercase => constants::UPPERCASE,
            Category::Digit => constants::DIGITS,
            Category::Special => constants::PUNCTUATION,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Uppercase => "uppercase",
            Category::Digit => "digit",
            Category::Special => "special",
        };
        f.write_str(name)
    }
}

/// What a generated password must look like.
///
/// Lowercase letters are always part of the alphabet; the three flags add
/// further classes and make each one mandatory in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationPolicy {
    pub length: usize,
    #[serde(rename = "uppercase")]
    pub include_uppercase: bool,
    #[serde(rename = "digits")]
    pub include_digits: bool,
    #[serde(rename = "special")]
    pub include_special: bool,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: constants::DEFAULT_LENGTH,
            include_uppercase: constants::DEFAULT_INCLUDE,
            include_digits: constants::DEFAULT_INCLUDE,
            include_special: constants::DEFAULT_INCLUDE,
        }
    }
}

impl GenerationPolicy {
    pub fn new(
        length: usize,
        include_uppercase: bool,
        include_digits: bool,
        include_special: bool,
    ) -> Self {
        Self {
            length,
            include_uppercase,
            include_digits,
            include_special,
        }
    }

    /// Enabled categories in alphabet order (uppercase, digit, special).
    pub fn required(&self) -> Vec<Category> {
        [
            (self.include_uppercase, Category::Uppercase),
            (self.include_digits, Category::Digit),
            (self.include_special, Category::Special),
        ]
        .into_iter()
        .filter_map(|(on, category)| on.then_some(category))
        .collect()
    }

    /// Same policy with a different length.
    pub fn with_length(self, length: usize) -> Self {
        Self { length, ..self }
    }
}
