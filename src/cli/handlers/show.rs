//! Show command handler.

use anyhow::Result;
use std::path::Path;

use super::{join_tags, resolve_id};
use crate::cli::ShowArgs;
use crate::store::StoreFile;

pub fn handle_show(args: &ShowArgs, store_path: &Path) -> Result<()> {
    let store = StoreFile::new(store_path).load();
    let id = resolve_id(&store, &args.id)?;
    let note = store.get(&id).expect("resolved id is present");

    println!("{}", note.content());
    println!();
    println!(
        "ID: {}  Created: {}  Modified: {}",
        note.id().prefix(),
        note.created().format("%Y-%m-%d"),
        note.modified().format("%Y-%m-%d")
    );
    if !note.tags().is_empty() {
        println!("Tags: {}", join_tags(note));
    }

    Ok(())
}
