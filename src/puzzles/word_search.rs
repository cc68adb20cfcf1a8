//! Word search generation
//!
//! Words are dropped into a square grid across or down, sharing letters where
//! they agree, and every leftover cell gets a random letter.

use crate::core::{Cell, Direction, Grid, PlacedWord, Pos, WordEntry};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Default number of random placements tried per word
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 50;

/// Configuration for word search generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSearchConfig {
    /// Random placements tried before a word is dropped
    pub max_attempts: usize,
}

impl WordSearchConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}

impl Default for WordSearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A finished word search
#[derive(Debug, Clone)]
pub struct WordSearch {
    /// Fully populated letter grid
    pub grid: Grid<Cell>,
    /// Words that made it into the grid, in input order
    pub placed: Vec<PlacedWord>,
    /// Words that could not be placed
    pub dropped: Vec<String>,
}

impl WordSearch {
    /// Find the placed word spanning `start` to `end` (either end first)
    #[must_use]
    pub fn check_selection(&self, start: Pos, end: Pos) -> Option<&PlacedWord> {
        self.placed.iter().find(|p| {
            let first = p.origin();
            let last = p.direction.step(first, p.word.len() - 1);
            (first == start && last == end) || (first == end && last == start)
        })
    }

    /// Whether `word` reads left-to-right in some row or top-to-bottom in
    /// some column
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.grid
            .row_strings()
            .iter()
            .chain(self.grid.column_strings().iter())
            .any(|line| line.contains(&word))
    }
}

/// Check that every cell the word would cover is empty or already agrees
fn fits(grid: &Grid<Cell>, word: &WordEntry, origin: Pos, direction: Direction) -> bool {
    word.chars().iter().enumerate().all(|(i, &letter)| {
        match grid.get(direction.step(origin, i)) {
            Some(Cell::Blank) => true,
            Some(Cell::Letter(existing)) => *existing == char::from(letter),
            None => false,
        }
    })
}

fn write_word(grid: &mut Grid<Cell>, word: &WordEntry, origin: Pos, direction: Direction) {
    for (i, &letter) in word.chars().iter().enumerate() {
        grid.set(direction.step(origin, i), Cell::Letter(char::from(letter)));
    }
}

/// Try up to `max_attempts` random origins for one word
fn try_place<R: Rng + ?Sized>(
    grid: &mut Grid<Cell>,
    word: &WordEntry,
    size: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Option<PlacedWord> {
    let span = size - word.len() + 1;

    for _ in 0..max_attempts {
        let direction = *Direction::ALL.choose(rng)?;
        let origin = match direction {
            Direction::Horizontal => {
                Pos::new(rng.random_range(0..size), rng.random_range(0..span))
            }
            Direction::Vertical => Pos::new(rng.random_range(0..span), rng.random_range(0..size)),
        };

        if fits(grid, word, origin, direction) {
            write_word(grid, word, origin, direction);
            return Some(PlacedWord {
                word: word.text().to_string(),
                row: origin.row,
                col: origin.col,
                direction,
            });
        }
    }

    None
}

/// Generate a `size x size` word search
///
/// Words keep their input order. A word longer than `size`, or one that finds
/// no fitting spot within `config.max_attempts` tries, is left out and listed
/// in `dropped`. Invalid words are skipped outright.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_games::puzzles::word_search::{generate_word_search, WordSearchConfig};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let puzzle = generate_word_search(&["cat", "dog", "bird"], 8, &WordSearchConfig::default(), &mut rng);
/// assert_eq!(puzzle.grid.rows(), 8);
/// for placed in &puzzle.placed {
///     assert!(puzzle.contains_word(&placed.word));
/// }
/// ```
pub fn generate_word_search<S: AsRef<str>, R: Rng + ?Sized>(
    words: &[S],
    size: usize,
    config: &WordSearchConfig,
    rng: &mut R,
) -> WordSearch {
    let mut grid: Grid<Cell> = Grid::square(size);
    let mut placed = Vec::new();
    let mut dropped = Vec::new();

    for word in WordEntry::parse_all(words) {
        if word.len() > size {
            dropped.push(word.into_string());
            continue;
        }

        match try_place(&mut grid, &word, size, config.max_attempts, rng) {
            Some(placement) => placed.push(placement),
            None => dropped.push(word.into_string()),
        }
    }

    if !dropped.is_empty() {
        tracing::warn!(
            count = dropped.len(),
            words = ?dropped,
            size,
            "word search dropped unplaceable words"
        );
    }

    for (_, cell) in grid.iter_mut() {
        if cell.is_blank() {
            *cell = Cell::Letter(char::from(b'a' + rng.random_range(0..26u8)));
        }
    }

    WordSearch {
        grid,
        placed,
        dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generate(words: &[&str], size: usize, seed: u64) -> WordSearch {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_word_search(words, size, &WordSearchConfig::default(), &mut rng)
    }

    #[test]
    fn grid_is_fully_populated() {
        let puzzle = generate(&["cat", "dog"], 6, 1);
        assert!(
            puzzle
                .grid
                .iter()
                .all(|(_, c)| matches!(c, Cell::Letter(l) if l.is_ascii_lowercase()))
        );
    }

    #[test]
    fn placements_read_back_exactly() {
        for seed in 0..20 {
            let puzzle = generate(&["apple", "bread", "milk", "egg", "cake", "corn"], 10, seed);
            for placed in &puzzle.placed {
                let read = puzzle
                    .grid
                    .read(placed.origin(), placed.direction, placed.word.len());
                assert_eq!(read.as_deref(), Some(placed.word.as_str()), "seed {seed}");
            }
        }
    }

    #[test]
    fn small_word_list_is_discoverable() {
        for seed in 0..20 {
            let puzzle = generate(&["cat", "dog", "bird"], 8, seed);
            assert_eq!(puzzle.grid.rows(), 8);
            assert_eq!(puzzle.grid.cols(), 8);
            assert_eq!(puzzle.placed.len(), 3, "seed {seed}");
            for word in ["cat", "dog", "bird"] {
                assert!(puzzle.contains_word(word), "{word} missing for seed {seed}");
            }
        }
    }

    #[test]
    fn placement_preserves_input_order() {
        let puzzle = generate(&["cat", "dog", "bird"], 8, 4);
        let words: Vec<&str> = puzzle.placed.iter().map(|p| p.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn words_longer_than_grid_are_dropped() {
        let puzzle = generate(&["elephant", "cat"], 5, 2);
        assert_eq!(puzzle.dropped, vec!["elephant".to_string()]);
        assert_eq!(puzzle.placed.len(), 1);
    }

    #[test]
    fn zero_attempts_drops_everything() {
        let mut rng = StdRng::seed_from_u64(9);
        let config = WordSearchConfig { max_attempts: 0 };
        let puzzle = generate_word_search(&["cat", "dog"], 6, &config, &mut rng);
        assert!(puzzle.placed.is_empty());
        assert_eq!(puzzle.dropped.len(), 2);
    }

    #[test]
    fn conflicting_words_share_only_matching_letters() {
        // A 3x3 grid cannot hold nine distinct three-letter words without
        // conflicts, so some are dropped; whatever is placed must agree.
        let words = ["abc", "def", "ghi", "adg", "beh", "cfi", "xyz", "qrs", "tuv"];
        for seed in 0..10 {
            let puzzle = generate(&words, 3, seed);
            assert_eq!(puzzle.placed.len() + puzzle.dropped.len(), words.len());
            for placed in &puzzle.placed {
                let read = puzzle
                    .grid
                    .read(placed.origin(), placed.direction, placed.word.len());
                assert_eq!(read.as_deref(), Some(placed.word.as_str()));
            }
        }
    }

    #[test]
    fn check_selection_matches_either_end() {
        let puzzle = generate(&["bird"], 6, 5);
        let placed = &puzzle.placed[0];
        let start = placed.origin();
        let end = placed.direction.step(start, 3);

        assert_eq!(puzzle.check_selection(start, end), Some(placed));
        assert_eq!(puzzle.check_selection(end, start), Some(placed));
        assert!(puzzle.check_selection(start, start).is_none());
    }

    #[test]
    fn zero_size_grid_drops_all_words() {
        let puzzle = generate(&["cat"], 0, 1);
        assert!(puzzle.placed.is_empty());
        assert_eq!(puzzle.dropped, vec!["cat".to_string()]);
    }
}
