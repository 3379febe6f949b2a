//! Test assertion helpers.

use std::process::Output;

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stdout contains a string.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        out.contains(expected),
        "stdout missing '{}', got: {}",
        expected,
        out
    );
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Assert a password has the length and character classes asked for.
pub fn assert_password(password: &str, length: usize, upper: bool, digits: bool, special: bool) {
    assert_eq!(
        password.chars().count(),
        length,
        "wrong length: {}",
        password
    );
    if upper {
        assert!(
            password.chars().any(|c| c.is_ascii_uppercase()),
            "no uppercase: {}",
            password
        );
    }
    if digits {
        assert!(
            password.chars().any(|c| c.is_ascii_digit()),
            "no digit: {}",
            password
        );
    }
    if special {
        assert!(
            password.chars().any(|c| c.is_ascii_punctuation()),
            "no special: {}",
            password
        );
    }
}
