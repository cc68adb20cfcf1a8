//! Sight-word bingo cards

use crate::core::{Grid, Pos};
use crate::corpus::{CorpusError, CorpusRepository, WordCorpus};
use crate::wordlists::Grade;
use rand::Rng;

pub const BINGO_SIZE: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BingoSquare {
    pub word: String,
    pub marked: bool,
}

/// A 5x5 card of distinct words
#[derive(Debug, Clone)]
pub struct BingoCard {
    grid: Grid<BingoSquare>,
}

impl BingoCard {
    /// Lay out the first 25 words row by row
    ///
    /// # Errors
    /// Returns `CorpusError::InsufficientWords` when given fewer than 25.
    pub fn from_words(words: &[String]) -> Result<Self, CorpusError> {
        let needed = BINGO_SIZE * BINGO_SIZE;
        if words.len() < needed {
            return Err(CorpusError::InsufficientWords {
                requested: needed,
                available: words.len(),
            });
        }

        let mut grid: Grid<BingoSquare> = Grid::square(BINGO_SIZE);
        for ((_, square), word) in grid.iter_mut().zip(words) {
            square.word.clone_from(word);
        }
        Ok(Self { grid })
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid<BingoSquare> {
        &self.grid
    }

    /// Mark every square showing `word`; returns whether any matched
    pub fn mark(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        let mut hit = false;
        for (_, square) in self.grid.iter_mut() {
            if square.word == word {
                square.marked = true;
                hit = true;
            }
        }
        hit
    }

    fn is_marked(&self, row: usize, col: usize) -> bool {
        self.grid.get(Pos::new(row, col)).is_some_and(|s| s.marked)
    }

    /// A full row, column or diagonal is marked
    #[must_use]
    pub fn has_bingo(&self) -> bool {
        let n = BINGO_SIZE;
        let row = (0..n).any(|r| (0..n).all(|c| self.is_marked(r, c)));
        let col = (0..n).any(|c| (0..n).all(|r| self.is_marked(r, c)));
        let diagonal = (0..n).all(|i| self.is_marked(i, i));
        let anti = (0..n).all(|i| self.is_marked(i, n - 1 - i));
        row || col || diagonal || anti
    }
}

/// Draw a card of 25 random sight words
///
/// # Errors
/// Returns `CorpusError::InsufficientWords` when the grade has fewer than
/// 25 distinct words.
pub fn generate_bingo<Repo, R>(
    corpus: &WordCorpus<Repo>,
    grade: Option<Grade>,
    rng: &mut R,
) -> Result<BingoCard, CorpusError>
where
    Repo: CorpusRepository,
    R: Rng + ?Sized,
{
    let words = corpus.require_random_words(BINGO_SIZE * BINGO_SIZE, grade, rng)?;
    BingoCard::from_words(&words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::MemoryRepository;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    fn card() -> BingoCard {
        let corpus = WordCorpus::open(MemoryRepository::new());
        let mut rng = StdRng::seed_from_u64(4);
        generate_bingo(&corpus, Some(Grade::Kindergarten), &mut rng).unwrap()
    }

    #[test]
    fn card_has_twenty_five_distinct_words() {
        let card = card();
        let words: FxHashSet<&str> = card.grid().iter().map(|(_, s)| s.word.as_str()).collect();
        assert_eq!(words.len(), 25);
        assert!(card.grid().iter().all(|(_, s)| !s.marked));
    }

    #[test]
    fn row_column_and_diagonal_bingo() {
        let card = card();
        let word_at = |r, c| card.grid().get(Pos::new(r, c)).unwrap().word.clone();

        let mut by_row = card.clone();
        for c in 0..BINGO_SIZE {
            assert!(!by_row.has_bingo());
            assert!(by_row.mark(&word_at(2, c)));
        }
        assert!(by_row.has_bingo());

        let mut by_col = card.clone();
        for r in 0..BINGO_SIZE {
            by_col.mark(&word_at(r, 4));
        }
        assert!(by_col.has_bingo());

        let mut by_diag = card.clone();
        for i in 0..BINGO_SIZE {
            by_diag.mark(&word_at(i, BINGO_SIZE - 1 - i));
        }
        assert!(by_diag.has_bingo());
    }

    #[test]
    fn marking_unknown_word_does_nothing() {
        let mut card = card();
        assert!(!card.mark("zebra-crossing"));
        assert!(!card.has_bingo());
    }

    #[test]
    fn short_word_list_is_reported() {
        let corpus = WordCorpus::open(MemoryRepository::new());
        let words: Vec<String> = corpus.sight_words(Some(Grade::PreK))[..10].to_vec();
        assert!(matches!(
            BingoCard::from_words(&words),
            Err(CorpusError::InsufficientWords {
                requested: 25,
                available: 10
            })
        ));
    }
}
