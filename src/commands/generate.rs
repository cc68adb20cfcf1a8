//! Puzzle generation commands
//!
//! Resolves where a puzzle's words come from and builds the puzzle.

use crate::corpus::{CorpusRepository, DefinitionSource, WordCorpus, lookup_for_child};
use crate::puzzles::bingo::{BingoCard, generate_bingo};
use crate::puzzles::crossword::{Crossword, CrosswordConfig, generate_crossword};
use crate::puzzles::maze::{Maze, generate_maze};
use crate::puzzles::misspelling::{Difficulty, MisspellingConfig, SpellingChoice, generate_misspelled_words};
use crate::puzzles::word_search::{WordSearch, WordSearchConfig, generate_word_search};
use crate::wordlists::seeds::SENTENCES;
use crate::wordlists::{Category, Grade};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::HashMap;

/// Where a puzzle's words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Category(Category),
    /// Random sight words, optionally from one grade
    SightWords(Option<Grade>),
    List(Vec<String>),
}

/// Pick up to `count` words from `source`
///
/// Explicit lists are used as given.
///
/// # Errors
///
/// Returns an error if the source yields no words.
pub fn resolve_words<Repo, R>(
    corpus: &WordCorpus<Repo>,
    source: &WordSource,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, String>
where
    Repo: CorpusRepository,
    R: Rng + ?Sized,
{
    let words = match source {
        WordSource::Category(category) => {
            let mut words = corpus.category_words(*category);
            words.shuffle(rng);
            words.truncate(count);
            words
        }
        WordSource::SightWords(grade) => corpus.random_words(count, *grade, rng),
        WordSource::List(words) => words.clone(),
    };

    if words.is_empty() {
        return Err("No words to build a puzzle from".to_string());
    }
    Ok(words)
}

/// Configuration for a word search
pub struct SearchConfig {
    pub source: WordSource,
    pub count: usize,
    pub size: usize,
    pub placement: WordSearchConfig,
}

impl SearchConfig {
    #[must_use]
    pub const fn new(source: WordSource) -> Self {
        Self {
            source,
            count: 8,
            size: 10,
            placement: WordSearchConfig::new(),
        }
    }
}

/// Build a word search
///
/// # Errors
///
/// Returns an error if no words are available or the grid has no cells.
pub fn build_word_search<Repo, R>(
    corpus: &WordCorpus<Repo>,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<WordSearch, String>
where
    Repo: CorpusRepository,
    R: Rng + ?Sized,
{
    if config.size == 0 {
        return Err("Grid size must be at least 1".to_string());
    }
    let words = resolve_words(corpus, &config.source, config.count, rng)?;
    Ok(generate_word_search(&words, config.size, &config.placement, rng))
}

/// Build a crossword, taking clues from `definitions` where available
///
/// The first child-appropriate sense of each word becomes its clue.
///
/// # Errors
///
/// Returns an error if no words are available.
pub fn build_crossword<Repo, R>(
    corpus: &WordCorpus<Repo>,
    source: &WordSource,
    count: usize,
    definitions: Option<&dyn DefinitionSource>,
    config: &CrosswordConfig,
    rng: &mut R,
) -> Result<Crossword, String>
where
    Repo: CorpusRepository,
    R: Rng + ?Sized,
{
    let words = resolve_words(corpus, source, count, rng)?;

    let clues: HashMap<String, String> = definitions
        .map(|source| {
            words
                .iter()
                .filter_map(|word| {
                    let entry = lookup_for_child(source, word)?;
                    let sense = entry.meanings.first()?.definitions.first()?;
                    Some((word.to_lowercase(), sense.definition.clone()))
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(generate_crossword(&words, &clues, config))
}

/// Build a maze around `sentence`, or a random built-in sentence
///
/// # Errors
///
/// Returns an error naming the first token that is not a word, or if the
/// sentence does not fit the maze.
pub fn build_maze<Repo, R>(
    corpus: &WordCorpus<Repo>,
    size: usize,
    sentence: Option<&str>,
    rng: &mut R,
) -> Result<Maze, String>
where
    Repo: CorpusRepository,
    R: Rng + ?Sized,
{
    let words: Vec<String> = match sentence {
        Some(text) => text
            .split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|w| !w.is_empty())
            .collect(),
        None => SENTENCES
            .choose(rng)
            .map(|s| s.words.iter().map(|w| (*w).to_string()).collect())
            .unwrap_or_default(),
    };

    generate_maze(size, &words, &corpus.filler_words(), rng).map_err(|e| e.to_string())
}

/// Draw a bingo card
///
/// # Errors
///
/// Returns an error if the grade has fewer than 25 words.
pub fn build_bingo<Repo, R>(
    corpus: &WordCorpus<Repo>,
    grade: Option<Grade>,
    rng: &mut R,
) -> Result<BingoCard, String>
where
    Repo: CorpusRepository,
    R: Rng + ?Sized,
{
    generate_bingo(corpus, grade, rng).map_err(|e| e.to_string())
}

/// Generate `rounds` spelling pairs at one difficulty
///
/// # Errors
///
/// Returns an error if the difficulty's length band has no words.
pub fn build_spelling_rounds<Repo, R>(
    corpus: &WordCorpus<Repo>,
    difficulty: Difficulty,
    rounds: usize,
    rng: &mut R,
) -> Result<Vec<[SpellingChoice; 2]>, String>
where
    Repo: CorpusRepository,
    R: Rng + ?Sized,
{
    (0..rounds)
        .map(|_| {
            generate_misspelled_words(corpus, difficulty, MisspellingConfig::default(), rng)
                .map_err(|e| e.to_string())
        })
        .collect()
}
