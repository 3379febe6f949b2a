//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a strongpass command running in the test directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("strongpass").expect("failed to find strongpass binary");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `strongpass generate` with extra arguments.
    pub fn generate(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("generate")
            .args(args)
            .output()
            .expect("failed to run strongpass generate")
    }

    /// Shortcut for `strongpass list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run strongpass list")
    }

    /// Shortcut for `strongpass list --json`.
    pub fn list_json(&self) -> Output {
        self.cmd()
            .args(["list", "--json"])
            .output()
            .expect("failed to run strongpass list --json")
    }

    /// Shortcut for `strongpass wipe --yes`.
    pub fn wipe(&self) -> Output {
        self.cmd()
            .args(["wipe", "--yes"])
            .output()
            .expect("failed to run strongpass wipe")
    }

    /// Run the interactive menu with `script` piped to stdin.
    pub fn menu(&self, script: &str) -> Output {
        self.cmd()
            .write_stdin(script)
            .output()
            .expect("failed to run strongpass menu")
    }
}
