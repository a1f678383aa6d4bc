//! Formatting utilities shared by the TUI and line mode

use crate::core::gallows::{BodyPart, visible_parts};
use crate::core::{MAX_ATTEMPTS, Round};

/// Placeholder shown for an unrevealed letter
pub const BLANK: char = '_';

/// Secret word with unrevealed letters blanked, space separated (`"c _ t"`)
#[must_use]
pub fn masked_word(round: &Round) -> String {
    let word = round.word();
    let mut letters = vec![BLANK; word.len()];
    for &letter in round.guessed() {
        for &position in word.positions_of(letter) {
            letters[position] = letter;
        }
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Guessed letters in guess order, comma separated, or `"None"`
#[must_use]
pub fn guessed_list(guessed: &[char]) -> String {
    if guessed.is_empty() {
        return "None".to_string();
    }
    guessed
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub fn attempts_label(attempts_remaining: u8) -> String {
    format!("Attempts left: {attempts_remaining}")
}

/// Notice text for a finished round
#[must_use]
pub fn win_message() -> &'static str {
    "Congrats! You won!"
}

#[must_use]
pub fn loss_message(word: &str) -> String {
    format!("You lose! The word was: {word}")
}

#[must_use]
pub fn hint_message(letter: char) -> String {
    format!("A hint was given! The letter '{letter}' is revealed.")
}

/// Text rendition of the gallows for line mode
#[must_use]
pub fn gallows_ascii(attempts_remaining: u8) -> Vec<String> {
    let parts = visible_parts(attempts_remaining.min(MAX_ATTEMPTS));
    let show = |part: BodyPart, glyph: char| if parts.contains(&part) { glyph } else { ' ' };

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", show(BodyPart::Head, 'O')),
        format!(
            " {}{}{}  |",
            show(BodyPart::LeftArm, '/'),
            show(BodyPart::Body, '|'),
            show(BodyPart::RightArm, '\\')
        ),
        format!(
            " {} {}  |",
            show(BodyPart::LeftLeg, '/'),
            show(BodyPart::RightLeg, '\\')
        ),
        "      |".to_string(),
        "=======".to_string(),
    ]
}
