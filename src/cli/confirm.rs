//! Confirmation prompts for destructive commands.
//!
//! Handlers receive the prompt as a collaborator, so the store logic
//! stays synchronous and decision-free, and tests can script answers.

use std::io::{self, BufRead, Write};

/// Asks the user to confirm a destructive action.
pub trait Confirmation {
    /// Returns true if the action should proceed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Interactive confirmation reading a `y`/`yes` line from stdin.
pub struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Confirmation that always proceeds (used for `--yes`).
pub struct Preconfirmed;

impl Confirmation for Preconfirmed {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preconfirmed_always_proceeds() {
        assert!(Preconfirmed.confirm("Delete everything?"));
    }

    #[test]
    fn scripted_confirmation_for_handler_tests() {
        struct Scripted(bool);
        impl Confirmation for Scripted {
            fn confirm(&mut self, _prompt: &str) -> bool {
                self.0
            }
        }

        assert!(Scripted(true).confirm("?"));
        assert!(!Scripted(false).confirm("?"));
    }
}
