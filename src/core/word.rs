//! Word entry representation
//!
//! A `WordEntry` is the atomic unit every generator consumes: a lowercase
//! alphabetic string of 1 to 20 letters.

use std::fmt;

/// Longest word any generator accepts
pub const MAX_WORD_LEN: usize = 20;

/// A validated, lowercase word drawn from the corpus
///
/// Stores the word as text; letters are always ASCII so byte access is safe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordEntry {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    TooLong(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::TooLong(len) => {
                write!(f, "Word must be at most {MAX_WORD_LEN} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only letters a-z"),
        }
    }
}

impl std::error::Error for WordError {}

impl WordEntry {
    /// Create a new entry, trimming whitespace and folding to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - It is longer than 20 letters
    /// - It contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use word_games::core::WordEntry;
    ///
    /// let word = WordEntry::new("  Cat ").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(WordEntry::new("don't").is_err());
    /// assert!(WordEntry::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        if text.len() > MAX_WORD_LEN {
            return Err(WordError::TooLong(text.len()));
        }

        Ok(Self { text })
    }

    /// Parse a batch of words, skipping any that fail validation
    #[must_use]
    pub fn parse_all<S: AsRef<str>>(words: &[S]) -> Vec<Self> {
        words
            .iter()
            .filter_map(|w| match Self::new(w) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::debug!(word = w.as_ref(), error = %e, "skipping invalid word");
                    None
                }
            })
            .collect()
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes (always ASCII lowercase)
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed entry; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at `position` as a char
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        char::from(self.chars()[position])
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for WordEntry {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_creation_valid() {
        let word = WordEntry::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.chars(), b"cat");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn entry_creation_normalizes() {
        assert_eq!(WordEntry::new("BIRD").unwrap().text(), "bird");
        assert_eq!(WordEntry::new("  Dog\n").unwrap().text(), "dog");
    }

    #[test]
    fn entry_creation_length_limits() {
        assert!(matches!(WordEntry::new(""), Err(WordError::Empty)));
        assert!(matches!(WordEntry::new("   "), Err(WordError::Empty)));
        assert!(WordEntry::new("a").is_ok());
        assert!(WordEntry::new("a".repeat(20)).is_ok());
        assert!(matches!(
            WordEntry::new("a".repeat(21)),
            Err(WordError::TooLong(21))
        ));
    }

    #[test]
    fn entry_creation_invalid_characters() {
        assert!(WordEntry::new("c4t").is_err()); // Number
        assert!(WordEntry::new("ice cream").is_err()); // Space
        assert!(WordEntry::new("don't").is_err()); // Punctuation
        assert!(WordEntry::new("café").is_err()); // Non-ASCII
    }

    #[test]
    fn parse_all_skips_invalid() {
        let words = WordEntry::parse_all(&["cat", "d0g", "", "Bird"]);
        let texts: Vec<&str> = words.iter().map(WordEntry::text).collect();
        assert_eq!(texts, vec!["cat", "bird"]);
    }

    #[test]
    fn entry_char_at() {
        let word = WordEntry::new("frog").unwrap();
        assert_eq!(word.char_at(0), 'f');
        assert_eq!(word.char_at(3), 'g');
    }

    #[test]
    fn entry_display() {
        let word = WordEntry::new("moon").unwrap();
        assert_eq!(format!("{word}"), "moon");
    }
}
