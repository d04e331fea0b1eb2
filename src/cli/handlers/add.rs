//! Add command handler.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::AddArgs;
use crate::store::StoreFile;

pub fn handle_add(args: &AddArgs, store_path: &Path) -> Result<()> {
    let file = StoreFile::new(store_path);
    let mut store = file.load();

    let tag_input = args.tags.as_deref().unwrap_or("");
    let note = store.create(&args.content, tag_input)?;
    let line = format!("Saved: {}", note);

    file.save(&store)
        .with_context(|| format!("failed to save store to {}", store_path.display()))?;

    println!("{line}");
    Ok(())
}
