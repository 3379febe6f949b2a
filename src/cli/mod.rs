//! Command-line interface.

pub mod completions;
pub mod generate;
pub mod list;
pub mod output;
pub mod prompt;
pub mod shell;
pub mod wipe;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::core::config::Config;

/// Strongpass - generate strong passwords and keep them encrypted.
#[derive(Parser)]
#[command(
    name = "strongpass",
    about = "Generate strong passwords and keep them in an encrypted local store",
    version,
    after_help = "Run without a command for the interactive menu."
)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./strongpass.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a password and print it
    Generate {
        /// Password length
        #[arg(short, long)]
        length: Option<usize>,
        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,
        /// Leave out digits
        #[arg(long)]
        no_digits: bool,
        /// Leave out special characters
        #[arg(long)]
        no_special: bool,
        /// Append the password to the encrypted store
        #[arg(short, long)]
        save: bool,
    },

    /// Print all saved passwords
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Securely delete all saved passwords
    Wipe {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command, or the interactive menu when none is given.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    debug!(store = %config.files.store.display(), "configuration ready");

    match cli.command {
        None => shell::execute(&config),
        Some(Command::Generate {
            length,
            no_uppercase,
            no_digits,
            no_special,
            save,
        }) => {
            let mut policy = match length {
                Some(length) => config.defaults.with_length(length),
                None => config.defaults,
            };
            policy.include_uppercase &= !no_uppercase;
            policy.include_digits &= !no_digits;
            policy.include_special &= !no_special;
            generate::execute(&config, &policy, save)
        }
        Some(Command::List { json }) => list::execute(&config, json),
        Some(Command::Wipe { yes }) => wipe::execute(&config, yes),
        Some(Command::Completions { shell }) => completions::execute(shell),
    }
}
