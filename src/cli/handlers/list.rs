//! List command handler.

use anyhow::Result;
use std::path::Path;

use super::join_tags;
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::store::{ALL_CATEGORY, StoreFile, filter};

pub fn handle_list(args: &ListArgs, store_path: &Path) -> Result<()> {
    let store = StoreFile::new(store_path).load();

    let search = args.search.as_deref().unwrap_or("");
    let category = args.category.as_deref().unwrap_or(ALL_CATEGORY);
    let notes = filter(store.notes(), search, category);

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
            } else {
                for note in &notes {
                    let tags = join_tags(note);
                    if tags.is_empty() {
                        println!("{}  {}", note.id().prefix(), note.summary());
                    } else {
                        println!("{}  {}  [{}]", note.id().prefix(), note.summary(), tags);
                    }
                }
                println!();
                println!("{} note(s)", notes.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes
                .iter()
                .map(|n| NoteListing {
                    id: n.id().to_string(),
                    summary: n.summary().to_string(),
                    tags: n.tags().iter().map(|t| t.as_str().to_string()).collect(),
                })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
