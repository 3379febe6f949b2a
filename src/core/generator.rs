//! Password generation.
//!
//! Draws characters uniformly (with replacement) from the policy's alphabet
//! and keeps drawing fresh candidates until one passes validation, up to
//! [`constants::MAX_ATTEMPTS`] rounds.

use rand::rngs::OsRng;
use rand::Rng;
use tracing::{debug, trace};

use crate::core::charset::Alphabet;
use crate::core::constants;
use crate::core::policy::GenerationPolicy;
use crate::core::validation;
use crate::error::{GenerateError, Result};

/// Generate a password using the operating system's CSPRNG.
///
/// # Errors
///
/// Returns `GenerateError` if the policy cannot produce a valid password.
pub fn generate(policy: &GenerationPolicy) -> Result<String> {
    generate_with(policy, &mut OsRng)
}

/// Generate a password drawing randomness from `rng`.
///
/// # Errors
///
/// - `GenerateError::InvalidLength` for a zero length
/// - `GenerateError::TooLong` above [`constants::MAX_LENGTH`]
/// - `GenerateError::EmptyAlphabet` if no characters are available
/// - `GenerateError::Unsatisfiable` if the length is shorter than the number
///   of required categories
/// - `GenerateError::Exhausted` if no candidate passed validation in time
pub fn generate_with<R: Rng + ?Sized>(policy: &GenerationPolicy, rng: &mut R) -> Result<String> {
    let alphabet = Alphabet::build(policy);
    if alphabet.is_empty() {
        return Err(GenerateError::EmptyAlphabet.into());
    }
    if policy.length == 0 {
        return Err(GenerateError::InvalidLength.into());
    }
    if policy.length > constants::MAX_LENGTH {
        return Err(GenerateError::TooLong {
            length: policy.length,
            max: constants::MAX_LENGTH,
        }
        .into());
    }

    let required = policy.required().len();
    if policy.length < required {
        return Err(GenerateError::Unsatisfiable {
            length: policy.length,
            required,
        }
        .into());
    }

    debug!(
        length = policy.length,
        alphabet = alphabet.len(),
        entropy_bits = alphabet.bits_per_char() * policy.length as f64,
        required,
        "generating password"
    );

    for attempt in 1..=constants::MAX_ATTEMPTS {
        let candidate = draw(&alphabet, policy.length, rng);
        if validation::validate(&candidate, policy) {
            debug!(attempt, "password accepted");
            return Ok(candidate);
        }
        trace!(
            attempt,
            missing = ?validation::missing_categories(&candidate, policy),
            "candidate rejected"
        );
    }

    Err(GenerateError::Exhausted {
        attempts: constants::MAX_ATTEMPTS,
    }
    .into())
}

fn draw<R: Rng + ?Sized>(alphabet: &Alphabet, length: usize, rng: &mut R) -> String {
    let chars = alphabet.as_slice();
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}
