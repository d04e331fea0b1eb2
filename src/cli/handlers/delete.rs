//! Delete command handlers: `rm` (single note) and `clear` (all notes).

use anyhow::{Context, Result};
use std::path::Path;

use super::resolve_id;
use crate::cli::confirm::{Confirmation, Preconfirmed, StdinConfirmation};
use crate::cli::{ClearArgs, RmArgs};
use crate::store::StoreFile;

pub(crate) fn handle_rm_impl<C: Confirmation>(
    args: &RmArgs,
    store_path: &Path,
    confirmation: &mut C,
) -> Result<()> {
    let file = StoreFile::new(store_path);
    let mut store = file.load();

    let id = resolve_id(&store, &args.id)?;
    let summary = store
        .get(&id)
        .expect("resolved id is present")
        .summary()
        .to_string();
    let prompt = format!("Delete note '{}'?", summary);
    if !confirmation.confirm(&prompt) {
        println!("Aborted.");
        return Ok(());
    }

    let removed = store.delete(&id)?;
    file.save(&store)
        .with_context(|| format!("failed to save store to {}", store_path.display()))?;

    println!("Deleted: {}", removed);
    Ok(())
}

pub fn handle_rm(args: &RmArgs, store_path: &Path) -> Result<()> {
    if args.yes {
        handle_rm_impl(args, store_path, &mut Preconfirmed)
    } else {
        handle_rm_impl(args, store_path, &mut StdinConfirmation)
    }
}

pub(crate) fn handle_clear_impl<C: Confirmation>(
    store_path: &Path,
    confirmation: &mut C,
) -> Result<()> {
    let file = StoreFile::new(store_path);
    let mut store = file.load();

    if store.is_empty() {
        println!("No notes to delete.");
        return Ok(());
    }

    let prompt = format!("Delete all {} saved note(s)?", store.len());
    if !confirmation.confirm(&prompt) {
        println!("Aborted.");
        return Ok(());
    }

    let count = store.len();
    store.clear();
    file.clear()
        .with_context(|| format!("failed to remove store file {}", store_path.display()))?;

    println!("Deleted {} note(s).", count);
    Ok(())
}

pub fn handle_clear(args: &ClearArgs, store_path: &Path) -> Result<()> {
    if args.yes {
        handle_clear_impl(store_path, &mut Preconfirmed)
    } else {
        handle_clear_impl(store_path, &mut StdinConfirmation)
    }
}
