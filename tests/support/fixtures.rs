//! Test fixtures and constants.

/// Password with every character class.
pub const SAMPLE_PASSWORD: &str = "Tr0ub4dor&3";

/// Passwords used where several records are needed.
pub const SAMPLE_PASSWORDS: &[&str] = &[
    "correct horse battery staple",
    "Tr0ub4dor&3",
    "p@ssw0rd!#$%",
    "ünïcødé-🔑",
    "",
];

/// Menu script: generate with all defaults and save, then exit.
pub const GENERATE_AND_SAVE: &str = "1\n\n\n\n\ny\n4\n";
