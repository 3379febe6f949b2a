//! Password validation.
//!
//! A candidate is acceptable when every category enabled in the policy is
//! represented by at least one character. Lowercase is never checked.

use crate::core::policy::{Category, GenerationPolicy};

/// Check that `candidate` satisfies every enabled category of `policy`.
///
/// Categories are ASCII-only, matching the generator's alphabet: `'É'` is
/// not uppercase and `'٣'` is not a digit for this check.
pub fn validate(candidate: &str, policy: &GenerationPolicy) -> bool {
    policy
        .required()
        .into_iter()
        .all(|category| contains(candidate, category))
}

/// Categories required by `policy` that `candidate` lacks.
pub fn missing_categories(candidate: &str, policy: &GenerationPolicy) -> Vec<Category> {
    policy
        .required()
        .into_iter()
        .filter(|&category| !contains(candidate, category))
        .collect()
}

fn contains(candidate: &str, category: Category) -> bool {
    candidate.chars().any(|c| category.matches(c))
}
