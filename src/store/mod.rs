//! Word storage
//!
//! A `WordSource` hands out one random `(word, category)` entry per round. Storage
//! failures never abort a round: `pick_or_fallback` masks them with a fallback word
//! and a notice for the player.

mod sqlite;

pub use sqlite::SqliteWordStore;

use crate::core::{CategoryFilter, Round, SecretWord, WordError};
use thiserror::Error;

/// Category reported for fallback words
pub const FALLBACK_CATEGORY: &str = "General";


#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Stored word '{word}' is invalid: {source}")]
    InvalidWord { word: String, source: WordError },
}

/// A stored word with its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub category: String,
}

impl WordEntry {
    #[must_use]
    pub fn new(word: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            category: category.into(),
        }
    }
}

/// Source of secret words
pub trait WordSource {
    /// Pick one entry uniformly at random among those matching `filter`
    ///
    /// Returns `Ok(None)` when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the underlying storage cannot be read.
    fn pick_word(&self, filter: CategoryFilter) -> Result<Option<WordEntry>, StoreError>;
}

/// Word selected for a new round, with a notice if it is a fallback
#[derive(Debug, Clone)]
pub struct Pick {
    pub word: SecretWord,
    pub category: String,
    pub notice: Option<String>,
}

/// Pick a word, falling back to a placeholder word on failure
///
/// No match yields `SecretWord::fallback(false)` silently. A storage failure or an
/// invalid stored word yields `SecretWord::fallback(true)` and a notice describing
/// the failure.
pub fn pick_or_fallback<S: WordSource + ?Sized>(source: &S, filter: CategoryFilter) -> Pick {
    let picked = source.pick_word(filter).and_then(|entry| {
        entry
            .map(|entry| {
                SecretWord::new(entry.word.as_str())
                    .map(|word| (word, entry.category))
                    .map_err(|source| StoreError::InvalidWord {
                        word: entry.word,
                        source,
                    })
            })
            .transpose()
    });

    match picked {
        Ok(Some((word, category))) => Pick {
            word,
            category,
            notice: None,
        },
        Ok(None) => {
            log::warn!("No stored word matches category {filter}");
            fallback(None)
        }
        Err(err) => {
            log::warn!("Word selection failed: {err}");
            fallback(Some(err.to_string()))
        }
    }
}

fn fallback(notice: Option<String>) -> Pick {
    Pick {
        word: SecretWord::fallback(notice.is_some()),
        category: FALLBACK_CATEGORY.to_string(),
        notice,
    }
}

/// Start a fresh round from the given source
///
/// The returned notice, if any, should be shown to the player; the round is
/// playable either way.
pub fn start_round<S: WordSource + ?Sized>(
    source: &S,
    filter: CategoryFilter,
) -> (Round, Option<String>) {
    let pick = pick_or_fallback(source, filter);
    log::debug!(
        "Starting round: {} letters, category {}",
        pick.word.len(),
        pick.category
    );
    (Round::new(pick.word, pick.category), pick.notice)
}
