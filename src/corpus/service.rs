//! The word corpus service
//!
//! Owns the curated lists plus user-added custom words and hands out words to
//! every generator.

use super::dictionary::Dictionary;
use super::repository::{CorpusRepository, StorageError};
use crate::core::{WordEntry, WordError};
use crate::wordlists::{BLOCKLIST, Category, Grade};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Namespace under which custom sight words are persisted
pub const CUSTOM_WORDS_NAMESPACE: &str = "customSightWords";

/// Errors surfaced by the corpus
#[derive(Debug)]
pub enum CorpusError {
    /// Fewer unique words exist than were requested
    InsufficientWords { requested: usize, available: usize },
    InvalidWord(WordError),
    Storage(StorageError),
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientWords {
                requested,
                available,
            } => write!(
                f,
                "Not enough words: needed {requested}, only {available} available"
            ),
            Self::InvalidWord(e) => write!(f, "Invalid word: {e}"),
            Self::Storage(e) => write!(f, "Could not save words: {e}"),
        }
    }
}

impl std::error::Error for CorpusError {}

impl From<StorageError> for CorpusError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

impl From<WordError> for CorpusError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

/// Result of adding a custom word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(String),
    /// The word is already a sight word; nothing was stored
    AlreadyPresent(String),
}

/// Curated word lists plus persisted custom words
pub struct WordCorpus<R: CorpusRepository> {
    dictionary: Dictionary,
    custom: Vec<String>,
    repository: R,
}

impl<R: CorpusRepository> WordCorpus<R> {
    /// Open the corpus over the embedded dictionary, loading custom words
    /// from `repository`
    ///
    /// A repository that cannot be read is logged and treated as empty.
    pub fn open(repository: R) -> Self {
        Self::with_dictionary(Dictionary::embedded(), repository)
    }

    pub fn with_dictionary(dictionary: Dictionary, repository: R) -> Self {
        let custom = match repository.load(CUSTOM_WORDS_NAMESPACE) {
            Ok(words) => words
                .iter()
                .filter_map(|w| WordEntry::new(w).ok())
                .map(WordEntry::into_string)
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "could not load custom words, starting empty");
                Vec::new()
            }
        };

        Self {
            dictionary,
            custom,
            repository,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn custom_words(&self) -> &[String] {
        &self.custom
    }

    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Sight words for `grade` (or every grade), plus custom words
    ///
    /// Order follows the lists; duplicates are removed.
    #[must_use]
    pub fn sight_words(&self, grade: Option<Grade>) -> Vec<String> {
        let grades: &[Grade] = match grade {
            Some(ref g) => std::slice::from_ref(g),
            None => &Grade::ALL,
        };

        let mut seen = FxHashSet::default();
        grades
            .iter()
            .flat_map(|g| g.sight_words().iter().copied())
            .chain(self.custom.iter().map(String::as_str))
            .filter(|w| seen.insert(*w))
            .map(str::to_string)
            .collect()
    }

    /// Up to `count` distinct sight words in random order
    ///
    /// Returns `min(count, available)` words.
    pub fn random_words<Rn: Rng + ?Sized>(
        &self,
        count: usize,
        grade: Option<Grade>,
        rng: &mut Rn,
    ) -> Vec<String> {
        let mut words = self.sight_words(grade);
        words.shuffle(rng);
        words.truncate(count);
        words
    }

    /// Exactly `count` distinct sight words in random order
    ///
    /// # Errors
    /// Returns `CorpusError::InsufficientWords` when fewer than `count`
    /// distinct words are available.
    pub fn require_random_words<Rn: Rng + ?Sized>(
        &self,
        count: usize,
        grade: Option<Grade>,
        rng: &mut Rn,
    ) -> Result<Vec<String>, CorpusError> {
        let words = self.random_words(count, grade, rng);
        if words.len() < count {
            return Err(CorpusError::InsufficientWords {
                requested: count,
                available: words.len(),
            });
        }
        Ok(words)
    }

    /// Add a custom sight word and persist the custom list
    ///
    /// # Errors
    /// Returns `CorpusError::InvalidWord` for text that is not a word and
    /// `CorpusError::Storage` when persisting fails; on storage failure the
    /// in-memory list is left unchanged.
    pub fn add_custom_word(&mut self, word: &str) -> Result<AddOutcome, CorpusError> {
        let entry = WordEntry::new(word)?;
        let text = entry.into_string();

        if self.sight_words(None).contains(&text) {
            return Ok(AddOutcome::AlreadyPresent(text));
        }

        self.custom.push(text.clone());
        if let Err(e) = self.repository.save(CUSTOM_WORDS_NAMESPACE, &self.custom) {
            self.custom.pop();
            tracing::warn!(error = %e, word = %text, "failed to persist custom word");
            return Err(e.into());
        }

        tracing::debug!(word = %text, "added custom sight word");
        Ok(AddOutcome::Added(text))
    }

    /// The ten words of a category
    #[must_use]
    pub fn category_words(&self, category: Category) -> Vec<String> {
        category.words().iter().map(|w| (*w).to_string()).collect()
    }

    /// Words from every category, used as maze decoys
    #[must_use]
    pub fn filler_words(&self) -> Vec<String> {
        Category::ALL
            .into_iter()
            .flat_map(|c| c.words().iter())
            .map(|w| (*w).to_string())
            .collect()
    }
}

/// Whether `text` is free of blocklisted substrings (case-insensitive)
///
/// # Examples
/// ```
/// use word_games::corpus::is_appropriate;
///
/// assert!(is_appropriate("A small furry animal"));
/// assert!(!is_appropriate("a WEAPON used in war"));
/// ```
#[must_use]
pub fn is_appropriate(text: &str) -> bool {
    let lowered = text.to_lowercase();
    !BLOCKLIST.iter().any(|blocked| lowered.contains(blocked))
}
