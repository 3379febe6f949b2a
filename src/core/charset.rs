//! Character set building for password generation.

use crate::core::constants;
use crate::core::policy::GenerationPolicy;

/// The ordered set of characters a password is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Build the alphabet for a policy.
    ///
    /// Lowercase letters always come first, followed by uppercase letters,
    /// digits and punctuation for each enabled flag, in that order.
    pub fn build(policy: &GenerationPolicy) -> Self {
        let mut chars: Vec<char> = constants::LOWERCASE.chars().collect();

        for category in policy.required() {
            chars.extend(category.chars().chars());
        }

        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Alphabet size in bits of entropy per character.
    pub fn bits_per_char(&self) -> f64 {
        (self.chars.len() as f64).log2()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
