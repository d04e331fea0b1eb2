//! Command handlers for the CLI.

mod add;
mod categories;
mod delete;
mod edit;
mod list;
mod show;

use anyhow::{Result, bail};
use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::domain::{Note, NoteId};
use crate::store::{NoteStore, Resolve};

// Re-export public items
pub use add::handle_add;
pub use categories::handle_categories;
pub use delete::{handle_clear, handle_rm};
pub use edit::handle_edit;
pub use list::handle_list;
pub use show::handle_show;

/// Resolves a user-supplied id or prefix to a concrete note id.
///
/// Ambiguous prefixes list the candidates on stderr so the user can pick
/// a longer prefix.
pub(crate) fn resolve_id(store: &NoteStore, identifier: &str) -> Result<NoteId> {
    match store.resolve(identifier) {
        Resolve::Unique(note) => Ok(note.id().clone()),
        Resolve::Ambiguous(notes) => {
            print_ambiguous_notes(identifier, &notes);
            bail!("ambiguous note id: '{}'", identifier);
        }
        Resolve::NotFound => bail!("note not found: '{}'", identifier),
    }
}

/// Prints the candidates for an ambiguous id prefix.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[&Note]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!("  {} - {}", note.id().prefix(), note.summary());
        if !note.tags().is_empty() {
            eprintln!("      tags: {}", join_tags(note));
        }
    }
    eprintln!();
    eprintln!("Use a longer id prefix to specify which note you mean.");
}

/// Joins a note's tags for display.
pub(crate) fn join_tags(note: &Note) -> String {
    note.tags()
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "jot", &mut std::io::stdout());
    Ok(())
}
