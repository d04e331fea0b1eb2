//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `jot` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct JotCommand {
    args: Vec<String>,
    stdin: Option<String>,
}

impl JotCommand {
    /// Creates a new command for the `jot` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Sets the `--store` option to specify the store file.
    pub fn store(mut self, path: &Path) -> Self {
        self.args.push("--store".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Provides a line of stdin (for confirmation prompts).
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
        cmd.args(&self.args);
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `add` command with content.
    pub fn add(self, content: &str) -> Self {
        self.args(["add", content])
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `show` command with an id.
    pub fn show(self, id: &str) -> Self {
        self.args(["show", id])
    }

    /// Configures for the `edit` command with an id and new content.
    pub fn edit(self, id: &str, content: &str) -> Self {
        self.args(["edit", id, content])
    }

    /// Configures for the `rm` command with an id.
    pub fn rm(self, id: &str) -> Self {
        self.args(["rm", id])
    }

    /// Configures for the `clear` command.
    pub fn clear(self) -> Self {
        self.args(["clear"])
    }

    /// Configures for the `categories` command.
    pub fn categories(self) -> Self {
        self.args(["categories"])
    }

    // ===========================================
    // Option Shortcuts
    // ===========================================

    /// Adds `--tags <input>` to the command.
    pub fn tags(self, input: &str) -> Self {
        self.args(["--tags", input])
    }

    /// Adds `--search <term>` to the command.
    pub fn search(self, term: &str) -> Self {
        self.args(["--search", term])
    }

    /// Adds `--category <name>` to the command.
    pub fn category(self, name: &str) -> Self {
        self.args(["--category", name])
    }

    /// Adds `--counts` to the command.
    pub fn counts(self) -> Self {
        self.args(["--counts"])
    }

    /// Adds `--yes` to the command.
    pub fn yes(self) -> Self {
        self.args(["--yes"])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for JotCommand {
    fn default() -> Self {
        Self::new()
    }
}
