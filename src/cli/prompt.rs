//! Line-oriented user input.
//!
//! On a terminal prompts go through `dialoguer`; when stdin is piped they
//! fall back to plain line reads so the menu can be scripted.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Input;

use crate::cli::output;
use crate::error::Result;

/// Source of answers for the interactive shell.
pub trait Prompt {
    /// Ask for one line of text. `None` means input is exhausted.
    fn ask(&mut self, label: &str) -> Result<Option<String>>;
}

/// Pick the prompt implementation for the current stdin.
pub fn stdin() -> Box<dyn Prompt> {
    if io::stdin().is_terminal() {
        Box::new(Terminal)
    } else {
        Box::new(Lines::new(io::stdin().lock()))
    }
}

/// Interactive terminal prompts.
pub struct Terminal;

impl Prompt for Terminal {
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        let answer = Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(text) => Ok(Some(text)),
            Err(dialoguer::Error::IO(e))
                if matches!(
                    e.kind(),
                    io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Prompts answered from any buffered reader, one line per answer.
pub struct Lines<R> {
    reader: R,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompt for Lines<R> {
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        output::prompt(label);

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            output::blank();
            return Ok(None);
        }
        output::blank();
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// A y/n answer where anything but `n` means yes.
pub fn unless_no(answer: &str) -> bool {
    !answer.trim().eq_ignore_ascii_case("n")
}

/// A y/n answer where only `y` means yes.
pub fn only_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_lines_reads_in_order() {
        let mut prompt = Lines::new(Cursor::new("1\r\n\nabc\n"));
        assert_eq!(prompt.ask("a").unwrap().as_deref(), Some("1"));
        assert_eq!(prompt.ask("b").unwrap().as_deref(), Some(""));
        assert_eq!(prompt.ask("c").unwrap().as_deref(), Some("abc"));
        assert_eq!(prompt.ask("d").unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut prompt = Lines::new(Cursor::new("4"));
        assert_eq!(prompt.ask("a").unwrap().as_deref(), Some("4"));
        assert_eq!(prompt.ask("b").unwrap(), None);
    }

    #[test]
    fn test_unless_no() {
        assert!(unless_no(""));
        assert!(unless_no("y"));
        assert!(unless_no("yes"));
        assert!(unless_no("no"));
        assert!(!unless_no("n"));
        assert!(!unless_no(" N "));
    }

    #[test]
    fn test_only_yes() {
        assert!(only_yes("y"));
        assert!(only_yes("Y"));
        assert!(!only_yes(""));
        assert!(!only_yes("yes"));
        assert!(!only_yes("n"));
    }
}
