//! Generate command.
//!
//! Prints a single password on stdout, optionally saving it.

use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::generator;
use crate::core::policy::GenerationPolicy;
use crate::error::Result;

/// Generate one password and print it.
pub fn execute(config: &Config, policy: &GenerationPolicy, save: bool) -> Result<()> {
    info!(length = policy.length, "generating password");

    let password = generator::generate(policy)?;
    output::data(&password);

    if save {
        let store = config.password_store();
        store.save(&password)?;
        eprintln!("saved to {}", output::path(store.path().display()));
    }

    Ok(())
}
