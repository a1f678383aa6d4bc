//! Word categories and the category filter used when picking a word

use std::fmt;
use std::str::FromStr;

/// A category stored alongside each word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Programming,
    Animals,
    Countries,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Programming, Self::Animals, Self::Countries];

    /// Name as stored in the word table
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Programming => "Programming",
            Self::Animals => "Animals",
            Self::Countries => "Countries",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selection constraint applied when picking a word
///
/// `All` is a wildcard for selection only and is never stored as a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Selector order, as shown to the player
    pub const CHOICES: [Self; 4] = [
        Self::All,
        Self::Only(Category::Programming),
        Self::Only(Category::Animals),
        Self::Only(Category::Countries),
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.name(),
        }
    }

    /// The stored category to match, `None` for any row
    #[must_use]
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::Only(category) => Some(category),
        }
    }

    fn index(self) -> usize {
        Self::CHOICES
            .iter()
            .position(|&choice| choice == self)
            .unwrap_or(0)
    }

    /// Next choice in selector order, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        Self::CHOICES[(self.index() + 1) % Self::CHOICES.len()]
    }

    /// Previous choice in selector order, wrapping around
    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::CHOICES.len();
        Self::CHOICES[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    /// Parses a selector value; an empty string selects `All`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::All);
        }

        Self::CHOICES
            .into_iter()
            .find(|choice| choice.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                format!("Unknown category '{trimmed}' (expected All, Programming, Animals or Countries)")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "animals".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Animals))
        );
        assert_eq!("ALL".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
    }

    #[test]
    fn parse_empty_means_all() {
        assert_eq!("".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("  ".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
    }

    #[test]
    fn parse_unknown_category_fails() {
        assert!("General".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn all_has_no_stored_category() {
        assert_eq!(CategoryFilter::All.category(), None);
        assert_eq!(
            CategoryFilter::Only(Category::Countries).category(),
            Some(Category::Countries)
        );
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let last = CategoryFilter::Only(Category::Countries);
        assert_eq!(last.next(), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.prev(), last);

        let mut filter = CategoryFilter::All;
        for _ in 0..CategoryFilter::CHOICES.len() {
            filter = filter.next();
        }
        assert_eq!(filter, CategoryFilter::All);
    }
}
