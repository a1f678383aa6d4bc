//! Colored terminal output for line mode and the word listing

use super::formatters::{attempts_label, gallows_ascii, guessed_list, masked_word};
use crate::core::Round;
use crate::store::WordEntry;
use colored::Colorize;
use std::io::{self, Write};

/// Print the current round state
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_round<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    writeln!(out)?;
    for line in gallows_ascii(round.attempts_remaining()) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Category: {}",
        round.category().bright_magenta().bold()
    )?;
    writeln!(out, "Word:     {}", masked_word(round).bright_white().bold())?;

    let attempts = attempts_label(round.attempts_remaining());
    let attempts = if round.attempts_remaining() <= 2 {
        attempts.red()
    } else {
        attempts.normal()
    };
    writeln!(out, "{attempts}")?;
    writeln!(
        out,
        "Guessed letters: {}",
        guessed_list(round.guessed()).blue()
    )?;
    if round.hint_available() {
        writeln!(out, "{}", "A hint is available, type 'hint'".yellow())?;
    }
    Ok(())
}

/// Print stored words grouped in insertion order
pub fn print_word_entries(entries: &[WordEntry]) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("{:<20} {}", "Word".bold(), "Category".bold());
    println!("{}", "─".repeat(40).cyan());
    for entry in entries {
        println!("{:<20} {}", entry.word, entry.category.bright_magenta());
    }
    println!("{}", "─".repeat(40).cyan());
    println!("{} words\n", entries.len());
}
