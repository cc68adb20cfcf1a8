//! Word list commands

use crate::corpus::{AddOutcome, CorpusRepository, WordCorpus};
use crate::wordlists::{Category, Grade};
use rand::Rng;

/// A titled list of words ready for display
pub struct WordListing {
    pub title: String,
    pub words: Vec<String>,
}

/// Sight words for one grade, or every grade plus custom words
#[must_use]
pub fn list_sight_words<Repo: CorpusRepository>(
    corpus: &WordCorpus<Repo>,
    grade: Option<Grade>,
) -> WordListing {
    let title = grade.map_or_else(
        || "All sight words".to_string(),
        |g| format!("Grade {} sight words", g.label()),
    );
    WordListing {
        title,
        words: corpus.sight_words(grade),
    }
}

#[must_use]
pub fn list_category<Repo: CorpusRepository>(
    corpus: &WordCorpus<Repo>,
    category: Category,
) -> WordListing {
    WordListing {
        title: format!("{category} words"),
        words: corpus.category_words(category),
    }
}

/// Up to `count` distinct random sight words
pub fn random_sight_words<Repo, R>(
    corpus: &WordCorpus<Repo>,
    count: usize,
    grade: Option<Grade>,
    rng: &mut R,
) -> WordListing
where
    Repo: CorpusRepository,
    R: Rng + ?Sized,
{
    WordListing {
        title: format!("{count} random sight words"),
        words: corpus.random_words(count, grade, rng),
    }
}

/// Add a custom sight word and describe what happened
///
/// # Errors
///
/// Returns an error if the word is invalid or could not be saved.
pub fn add_sight_word<Repo: CorpusRepository>(
    corpus: &mut WordCorpus<Repo>,
    word: &str,
) -> Result<String, String> {
    match corpus.add_custom_word(word).map_err(|e| e.to_string())? {
        AddOutcome::Added(word) => Ok(format!("Added '{word}' to your sight words")),
        AddOutcome::AlreadyPresent(word) => Ok(format!("'{word}' is already a sight word")),
    }
}
