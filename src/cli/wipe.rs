//! Wipe command.
//!
//! Securely deletes the password store. The key file is left in place.

use std::io::{self, IsTerminal};

use dialoguer::Confirm;
use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::error::{Error, Result};

/// Erase the password store after confirmation.
pub fn execute(config: &Config, yes: bool) -> Result<()> {
    let store = config.password_store();

    if !store.exists() {
        output::dimmed("no saved passwords");
        return Ok(());
    }

    if !yes {
        if !io::stdin().is_terminal() {
            return Err(Error::ConfirmationRequired);
        }
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to delete all saved passwords?")
            .default(false)
            .interact()?;
        if !confirmed {
            output::dimmed("nothing deleted");
            return Ok(());
        }
    }

    info!(path = %store.path().display(), "erasing store");
    store.erase()?;
    output::success("All saved passwords have been securely deleted.");

    Ok(())
}
