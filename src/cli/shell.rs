//! Interactive menu.
//!
//! The default mode when strongpass is run without a subcommand: generate,
//! view saved passwords, securely delete them, or exit.

use tracing::debug;

use crate::cli::output;
use crate::cli::prompt::{self, Prompt};
use crate::core::config::Config;
use crate::core::generator;
use crate::core::policy::GenerationPolicy;
use crate::core::store::PasswordStore;
use crate::error::{Error, Result};

/// Whether the menu loop should keep going after an action.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Run the menu on stdin until the user exits or input ends.
pub fn execute(config: &Config) -> Result<()> {
    let mut input = prompt::stdin();
    run(config, input.as_mut())
}

/// Run the menu with answers taken from `input`.
pub fn run(config: &Config, input: &mut dyn Prompt) -> Result<()> {
    let store = config.password_store();
    output::header("Welcome to the Strong Password Generator!");

    loop {
        output::section("Strong Password Generator");
        output::data("1. Generate a new password");
        output::data("2. View saved passwords");
        output::data("3. Securely delete saved passwords");
        output::data("4. Exit");

        let Some(choice) = input.ask("Choose an option")? else {
            break;
        };
        debug!(choice = %choice.trim(), "menu choice");

        let result = match choice.trim() {
            "1" => generate(input, &store, &config.defaults),
            "2" => view(&store),
            "3" => erase(input, &store),
            "4" => {
                output::data("Exiting. Stay secure!");
                return Ok(());
            }
            _ => {
                output::warn("Invalid choice. Please try again.");
                Ok(Flow::Continue)
            }
        };

        match result {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e @ Error::Prompt(_)) => return Err(e),
            Err(e) => output::error(&e.to_string()),
        }
    }

    Ok(())
}

/// Ask for generation preferences, falling back to `defaults`.
///
/// A length that is not a number abandons the remaining questions and
/// returns `defaults` unchanged.
fn preferences(
    input: &mut dyn Prompt,
    defaults: &GenerationPolicy,
) -> Result<Option<GenerationPolicy>> {
    let Some(length) = input.ask(&format!(
        "Enter the desired password length (default {})",
        defaults.length
    ))?
    else {
        return Ok(None);
    };

    let length = match length.trim() {
        "" => defaults.length,
        text => match text.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                output::warn("Invalid input. Using default settings.");
                return Ok(Some(*defaults));
            }
        },
    };

    let mut flags = [
        ("uppercase letters", defaults.include_uppercase),
        ("digits", defaults.include_digits),
        ("special characters", defaults.include_special),
    ];
    for (name, flag) in flags.iter_mut() {
        let label = format!(
            "Include {}? (y/n, default {})",
            name,
            if *flag { "y" } else { "n" }
        );
        let Some(answer) = input.ask(&label)? else {
            return Ok(None);
        };
        if !answer.trim().is_empty() {
            *flag = prompt::unless_no(&answer);
        }
    }

    let [(_, uppercase), (_, digits), (_, special)] = flags;
    Ok(Some(GenerationPolicy::new(length, uppercase, digits, special)))
}

fn generate(
    input: &mut dyn Prompt,
    store: &PasswordStore,
    defaults: &GenerationPolicy,
) -> Result<Flow> {
    let Some(policy) = preferences(input, defaults)? else {
        return Ok(Flow::Exit);
    };

    let password = generator::generate(&policy)?;
    output::blank();
    output::kv("Your generated password is:", &password);

    let Some(answer) = input.ask("Do you want to save this password? (y/n)")? else {
        return Ok(Flow::Exit);
    };
    if prompt::only_yes(&answer) {
        store.save(&password)?;
        output::success("Password saved securely!");
    }

    Ok(Flow::Continue)
}

fn view(store: &PasswordStore) -> Result<Flow> {
    let passwords = store.load_all()?;

    output::section("Saved Passwords");
    if passwords.is_empty() {
        output::dimmed("no saved passwords");
    }
    for password in &passwords {
        output::list_item(password);
    }

    Ok(Flow::Continue)
}

fn erase(input: &mut dyn Prompt, store: &PasswordStore) -> Result<Flow> {
    let Some(answer) =
        input.ask("Are you sure you want to delete all saved passwords? (y/n)")?
    else {
        return Ok(Flow::Exit);
    };

    if prompt::only_yes(&answer) {
        store.erase()?;
        output::success("All saved passwords have been securely deleted.");
    }

    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::Lines;
    use crate::core::config::Files;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> Config {
        Config {
            defaults: GenerationPolicy::default(),
            files: Files {
                key: dir.path().join("key.key"),
                store: dir.path().join("passwords.txt"),
            },
        }
    }

    fn run_script(config: &Config, script: &str) {
        let mut input = Lines::new(Cursor::new(script.to_string()));
        run(config, &mut input).unwrap();
    }

    #[test]
    fn test_generate_and_save() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        run_script(&config, "1\n16\ny\ny\ny\ny\n4\n");

        let saved = config.password_store().load_all().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].len(), 16);
        assert!(crate::core::validation::validate(
            &saved[0],
            &GenerationPolicy::new(16, true, true, true)
        ));
    }

    #[test]
    fn test_generate_without_saving() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        run_script(&config, "1\n\n\n\n\nn\n4\n");

        assert!(!config.files.store.exists());
    }

    #[test]
    fn test_flags_from_answers() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        run_script(&config, "1\n30\nn\nn\nn\ny\n4\n");

        let saved = config.password_store().load_all().unwrap();
        assert!(saved[0].chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_bad_length_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        // the three flag questions are skipped, so "y" answers the save prompt
        run_script(&config, "1\ntwelve\ny\n4\n");

        let saved = config.password_store().load_all().unwrap();
        assert_eq!(saved[0].len(), 12);
    }

    #[test]
    fn test_generation_error_keeps_menu_running() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        run_script(&config, "1\n0\n\n\n\n1\n8\n\n\n\ny\n4\n");

        assert_eq!(config.password_store().load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_erase_requires_confirmation() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        config.password_store().save("keep-me").unwrap();

        run_script(&config, "3\nn\n2\n");
        assert!(config.files.store.exists());

        run_script(&config, "3\ny\n4\n");
        assert!(!config.files.store.exists());
    }

    #[test]
    fn test_end_of_input_exits() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        run_script(&config, "");
        run_script(&config, "9\n");
        run_script(&config, "1\n12\n");
        assert!(!config.files.store.exists());
    }

    #[test]
    fn test_corrupt_store_reported_not_fatal() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        std::fs::write(&config.files.store, "garbage\n").unwrap();

        run_script(&config, "2\n4\n");
    }
}
