//! Secret word representation
//!
//! A `SecretWord` stores a validated lowercase word along with letter position indices
//! used for revealing letters and picking hints.

use rustc_hash::FxHashMap;
use std::fmt;

/// A lowercase alphabetic word to be guessed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letter_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new `SecretWord`, lowercasing the input
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Python").unwrap();
    /// assert_eq!(word.text(), "python");
    ///
    /// assert!(SecretWord::new("two words").is_err());
    /// assert!(SecretWord::new("c3po").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self::index(text))
    }

    /// Word shown when no stored word can be played
    ///
    /// `"default"` when nothing matched the category, `"error"` when storage failed.
    #[must_use]
    pub fn fallback(storage_failed: bool) -> Self {
        Self::index(if storage_failed { "error" } else { "default" }.to_string())
    }

    fn index(text: String) -> Self {
        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.chars().enumerate() {
            letter_positions.entry(ch).or_default().push(i);
        }

        Self {
            text,
            letter_positions,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Never true for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// True when every letter of the word is in `guessed`
    #[must_use]
    pub fn is_revealed_by(&self, guessed: &[char]) -> bool {
        self.letter_positions
            .keys()
            .all(|letter| guessed.contains(letter))
    }

    /// Letters not yet revealed, one entry per occurrence, in word order
    #[must_use]
    pub fn hidden_letters(&self, guessed: &[char]) -> Vec<char> {
        self.text
            .chars()
            .filter(|letter| !guessed.contains(letter))
            .collect()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
