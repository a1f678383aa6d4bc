//! Hangman
//!
//! A terminal hangman game with SQLite word storage, category selection, a virtual
//! keyboard, a progressively drawn gallows and sound.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GuessOutcome, Round, SecretWord};
//!
//! let mut round = Round::new(SecretWord::new("cat").unwrap(), "Animals");
//! assert_eq!(round.guess("c"), GuessOutcome::Hit);
//! assert_eq!(round.guess("z"), GuessOutcome::Miss);
//! assert_eq!(round.attempts_remaining(), 5);
//! ```

// Core domain types
pub mod core;

// Word storage
pub mod store;

// Seed word list
pub mod wordlists;

// Sound
pub mod audio;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
