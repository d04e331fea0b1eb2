//! Categories command handler.

use anyhow::Result;
use std::path::Path;

use crate::cli::CategoriesArgs;
use crate::cli::output::{CategoryListing, Output, OutputFormat};
use crate::store::{ALL_CATEGORY, StoreFile, categories, filter};

pub fn handle_categories(args: &CategoriesArgs, store_path: &Path) -> Result<()> {
    let store = StoreFile::new(store_path).load();
    let names = categories(store.notes());

    let listings: Vec<CategoryListing> = names
        .into_iter()
        .map(|name| {
            let count = args.counts.then(|| {
                if name == ALL_CATEGORY {
                    store.len()
                } else {
                    filter(store.notes(), "", &name).len()
                }
            });
            CategoryListing { name, count }
        })
        .collect();

    match args.format {
        OutputFormat::Human => {
            for listing in &listings {
                match listing.count {
                    Some(count) => println!("{}  ({})", listing.name, count),
                    None => println!("{}", listing.name),
                }
            }
        }
        OutputFormat::Json => {
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
