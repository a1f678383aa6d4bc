//! Seed words for the word store
//!
//! Provides the embedded `(word, category)` list written to an empty store on first run.

mod embedded;

pub use embedded::{SEED_WORDS, SEED_WORDS_COUNT};
