//! Stored word listing

use crate::core::CategoryFilter;
use crate::output::print_word_entries;
use crate::store::SqliteWordStore;
use anyhow::{Context, Result};

/// Print the stored words matching `filter`
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_words(store: &SqliteWordStore, filter: CategoryFilter) -> Result<()> {
    let entries = store
        .list_entries(filter)
        .with_context(|| format!("Cannot read words from {}", store.path().display()))?;
    print_word_entries(&entries);
    Ok(())
}
