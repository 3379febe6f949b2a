//! List command.

use crate::cli::output;
use crate::core::config::Config;
use crate::error::Result;

/// Print every saved password in the order it was saved.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let passwords = config.password_store().load_all()?;

    if json {
        let result = serde_json::json!({
            "passwords": passwords,
            "count": passwords.len(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if passwords.is_empty() {
        output::dimmed("no saved passwords");
    } else {
        output::header(&format!("{} saved passwords", passwords.len()));
        output::rule();
        for password in &passwords {
            output::list_item(password);
        }
    }

    Ok(())
}
