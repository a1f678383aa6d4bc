//! Terminal output formatting
//!
//! Display utilities shared by the TUI and line mode.

pub mod display;
pub mod formatters;

pub use display::{print_round, print_word_entries};
