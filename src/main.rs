//! Strongpass - strong password generator with an encrypted local store.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use strongpass::cli::output;
use strongpass::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("strongpass=debug")
    } else {
        EnvFilter::new("strongpass=warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            e if e.is_decryption() => {
                Some("the store was written with a different key; run: strongpass wipe")
            }
            e if e.is_invalid_configuration() => {
                Some("adjust --length or enable fewer character classes")
            }
            strongpass::Error::ConfirmationRequired => Some("run: strongpass wipe --yes"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
