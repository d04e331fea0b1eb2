//! Derived views over the note list: search filtering and categories.
//!
//! Both functions are pure and recomputed on every read; nothing here is
//! stored or mutated.

use crate::domain::Note;

/// Sentinel category matching every note regardless of its tags.
pub const ALL_CATEGORY: &str = "All";

/// Returns, in original order, every note whose content case-insensitively
/// contains `search_term` and whose tags contain `category` verbatim.
///
/// The [`ALL_CATEGORY`] sentinel disables the category test. An empty
/// search term matches every note, so
/// `filter(notes, "", ALL_CATEGORY)` returns the list unchanged.
pub fn filter<'a>(notes: &'a [Note], search_term: &str, category: &str) -> Vec<&'a Note> {
    let needle = search_term.to_lowercase();
    notes
        .iter()
        .filter(|note| {
            note.content().to_lowercase().contains(&needle)
                && (category == ALL_CATEGORY
                    || note.tags().iter().any(|tag| tag.as_str() == category))
        })
        .collect()
}

/// Returns the category options: [`ALL_CATEGORY`] followed by every
/// distinct tag across the notes, in first-seen order.
pub fn categories(notes: &[Note]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORY.to_string()];
    for note in notes {
        for tag in note.tags() {
            if !out.iter().any(|existing| existing == tag.as_str()) {
                out.push(tag.as_str().to_string());
            }
        }
    }
    out
}
