//! Edit command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::resolve_id;
use crate::cli::EditArgs;
use crate::store::StoreFile;

pub fn handle_edit(args: &EditArgs, store_path: &Path) -> Result<()> {
    let file = StoreFile::new(store_path);
    let mut store = file.load();

    let id = resolve_id(&store, &args.id)?;
    let tag_input = args.tags.as_deref().unwrap_or("");
    let note = store.update(&id, &args.content, tag_input)?;
    let line = format!("Updated: {}", note);

    file.save(&store)
        .with_context(|| format!("failed to save store to {}", store_path.display()))?;

    println!("{line}");
    Ok(())
}
