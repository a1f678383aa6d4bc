//! Core domain types for hangman
//!
//! This module contains the game rules with no storage, audio or display dependencies.
//! All types here are pure and testable.

mod category;
pub mod gallows;
mod round;
mod word;

pub use category::{Category, CategoryFilter};
pub use gallows::{BodyPart, Stroke};
pub use round::{GuessOutcome, HINT_AFTER_MISSES, MAX_ATTEMPTS, Round};
pub use word::{SecretWord, WordError};
