//! A single round of hangman
//!
//! Pure game logic: the secret word, guessed letters, remaining attempts and the
//! hint affordance. No display or storage concerns live here.

use super::word::SecretWord;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Wrong guesses allowed per round
pub const MAX_ATTEMPTS: u8 = 6;

/// Misses after which the hint becomes available
pub const HINT_AFTER_MISSES: u8 = 3;

/// Words must be longer than this to be eligible for a hint
pub const HINT_MIN_WORD_LEN: usize = 3;

/// Result of processing one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not a single letter, already guessed, or the round is over. No state change.
    Rejected,
    Hit,
    Miss,
    /// A hit that revealed the last hidden letter
    Win,
    /// A miss that used the last attempt
    Lose,
}

impl GuessOutcome {
    /// True for outcomes that end the round
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

/// In-memory state of one round
#[derive(Debug, Clone)]
pub struct Round {
    word: SecretWord,
    category: String,
    guessed: Vec<char>,
    attempts_remaining: u8,
    hint_available: bool,
}

impl Round {
    #[must_use]
    pub fn new(word: SecretWord, category: impl Into<String>) -> Self {
        Self {
            word,
            category: category.into(),
            guessed: Vec::new(),
            attempts_remaining: MAX_ATTEMPTS,
            hint_available: false,
        }
    }

    #[must_use]
    pub const fn word(&self) -> &SecretWord {
        &self.word
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Guessed letters in the order they were guessed
    #[must_use]
    pub fn guessed(&self) -> &[char] {
        &self.guessed
    }

    #[must_use]
    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    #[must_use]
    pub const fn misses(&self) -> u8 {
        MAX_ATTEMPTS - self.attempts_remaining
    }

    /// Whether the hint affordance is currently enabled
    #[must_use]
    pub const fn hint_available(&self) -> bool {
        self.hint_available
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.word.is_revealed_by(&self.guessed)
    }

    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.attempts_remaining == 0
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Process raw guess input
    ///
    /// The input is trimmed and lowercased. Anything other than exactly one ASCII
    /// letter is rejected, as is a letter that was already guessed.
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        let normalized = input.trim().to_lowercase();
        let mut chars = normalized.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => self.guess_letter(letter),
            _ => GuessOutcome::Rejected,
        }
    }

    /// Process a single letter guess
    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() || self.is_guessed(letter) || self.is_over() {
            return GuessOutcome::Rejected;
        }

        self.guessed.push(letter);

        if self.word.has_letter(letter) {
            if self.is_won() {
                GuessOutcome::Win
            } else {
                GuessOutcome::Hit
            }
        } else {
            self.attempts_remaining -= 1;

            // The hint unlocks on exactly the third miss, never earlier
            if self.misses() == HINT_AFTER_MISSES && self.word.len() > HINT_MIN_WORD_LEN {
                self.hint_available = true;
            }

            if self.is_lost() {
                GuessOutcome::Lose
            } else {
                GuessOutcome::Miss
            }
        }
    }

    /// Reveal one hidden letter without spending an attempt
    ///
    /// Returns `None` if the word is too short or fully revealed. Letters that occur
    /// more than once are proportionally more likely to be picked. Using a hint
    /// disables the affordance for the rest of the round.
    pub fn give_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<char> {
        if self.word.len() <= HINT_MIN_WORD_LEN || self.is_lost() {
            return None;
        }

        let hidden = self.word.hidden_letters(&self.guessed);
        let letter = *hidden.choose(rng)?;

        self.guessed.push(letter);
        self.hint_available = false;
        Some(letter)
    }
}
