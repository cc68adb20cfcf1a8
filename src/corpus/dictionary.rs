//! The curated common-word dictionary
//!
//! Membership here decides whether a ladder step is a real word and whether a
//! generated misspelling accidentally spelled one.

use crate::core::WordEntry;
use crate::wordlists::{COMMON_WORDS, Category, Grade};
use rustc_hash::FxHashSet;
use std::ops::RangeInclusive;

/// A set of known-good words with a stable, alphabetical iteration order
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from arbitrary words
    ///
    /// Words are trimmed and lowercased; anything that is not a valid
    /// `WordEntry` is skipped. Duplicates collapse.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list: Vec<String> = words
            .into_iter()
            .filter_map(|w| WordEntry::new(w).ok())
            .map(WordEntry::into_string)
            .collect();
        list.sort_unstable();
        list.dedup();

        let index = list.iter().cloned().collect();
        Self { words: list, index }
    }

    /// The embedded dictionary: common words, every sight-word grade and
    /// every category list
    ///
    /// # Examples
    /// ```
    /// use word_games::corpus::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// assert!(dictionary.contains("cat"));
    /// assert!(!dictionary.contains("cta"));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        let sight = Grade::ALL.into_iter().flat_map(Grade::sight_words);
        let categories = Category::ALL.into_iter().flat_map(|c| c.words().iter());
        Self::from_words(COMMON_WORDS.iter().chain(sight).chain(categories))
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.index.contains(word.to_ascii_lowercase().as_str())
        } else {
            self.index.contains(word)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate words in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words whose length falls in `lengths`, alphabetical
    pub fn with_lengths(&self, lengths: RangeInclusive<usize>) -> impl Iterator<Item = &str> {
        self.iter().filter(move |w| lengths.contains(&w.len()))
    }
}
