//! Crossword generation
//!
//! Longest words go in first. Each later word must cross something already
//! on the board; a word that cannot cross anything is forced onto the center
//! row or column so that every clue has an answer in the grid.

use crate::core::{Cell, Direction, Grid, PlacedWord, Pos, WordEntry};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Default board width and height
pub const DEFAULT_CROSSWORD_SIZE: usize = 15;

const ACROSS: u8 = 0b01;
const DOWN: u8 = 0b10;

/// Configuration for crossword generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosswordConfig {
    pub size: usize,
}

impl CrosswordConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            size: DEFAULT_CROSSWORD_SIZE,
        }
    }
}

impl Default for CrosswordConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A numbered answer with its clue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordEntry {
    pub number: usize,
    pub placement: PlacedWord,
    pub clue: String,
}

/// A finished crossword
#[derive(Debug, Clone)]
pub struct Crossword {
    /// Answer grid; cells outside every answer stay blank
    pub grid: Grid<Cell>,
    /// Entries ordered by number, across before down
    pub entries: Vec<CrosswordEntry>,
    /// Words that could not be placed anywhere
    pub unplaced: Vec<String>,
}

impl Crossword {
    /// Entries in one direction, ordered by number
    pub fn clues(&self, direction: Direction) -> impl Iterator<Item = &CrosswordEntry> {
        self.entries
            .iter()
            .filter(move |e| e.placement.direction == direction)
    }

    /// Whether `answer` solves clue `number` in `direction`
    #[must_use]
    pub fn check_answer(&self, number: usize, direction: Direction, answer: &str) -> bool {
        self.entries
            .iter()
            .find(|e| e.number == number && e.placement.direction == direction)
            .is_some_and(|e| e.placement.word.eq_ignore_ascii_case(answer.trim()))
    }
}

/// Fallback clue when none was supplied
fn default_clue(word: &WordEntry) -> String {
    format!(
        "A {}-letter word starting with '{}'",
        word.len(),
        word.char_at(0)
    )
}

struct Board {
    size: usize,
    grid: Grid<Cell>,
    /// Which directions already run through each cell
    usage: Grid<u8>,
    placed: Vec<PlacedWord>,
}

impl Board {
    fn new(size: usize) -> Self {
        Self {
            size,
            grid: Grid::square(size),
            usage: Grid::square(size),
            placed: Vec::new(),
        }
    }

    const fn mask(direction: Direction) -> u8 {
        match direction {
            Direction::Horizontal => ACROSS,
            Direction::Vertical => DOWN,
        }
    }

    fn is_blank(&self, pos: Pos) -> bool {
        self.grid.get(pos).is_none_or(|c| c.is_blank())
    }

    /// Blank cells beside `pos`, perpendicular to `direction`
    fn sides_clear(&self, pos: Pos, direction: Direction) -> bool {
        let (before, after) = match direction {
            Direction::Horizontal => (
                pos.row.checked_sub(1).map(|r| Pos::new(r, pos.col)),
                Pos::new(pos.row + 1, pos.col),
            ),
            Direction::Vertical => (
                pos.col.checked_sub(1).map(|c| Pos::new(pos.row, c)),
                Pos::new(pos.row, pos.col + 1),
            ),
        };
        before.is_none_or(|p| self.is_blank(p)) && self.is_blank(after)
    }

    /// Letters agree and no cell already carries a word in this direction
    ///
    /// Returns the number of crossings, or `None` on a conflict.
    fn crossings(&self, word: &WordEntry, origin: Pos, direction: Direction) -> Option<usize> {
        let last = direction.step(origin, word.len() - 1);
        if !self.grid.contains(last) {
            return None;
        }

        let mut count = 0;
        for (i, letter) in word.text().chars().enumerate() {
            let pos = direction.step(origin, i);
            match self.grid.get(pos)? {
                Cell::Blank => {}
                Cell::Letter(existing) => {
                    let used = self.usage.get(pos).copied().unwrap_or(0);
                    if *existing != letter || used & Self::mask(direction) != 0 {
                        return None;
                    }
                    count += 1;
                }
            }
        }
        Some(count)
    }

    /// Full crossword legality: no conflicts, blank ends, no letters touching
    /// the new word's sides except at crossings
    fn is_legal(&self, word: &WordEntry, origin: Pos, direction: Direction) -> Option<usize> {
        let count = self.crossings(word, origin, direction)?;

        let before = match direction {
            Direction::Horizontal => origin.col.checked_sub(1).map(|c| Pos::new(origin.row, c)),
            Direction::Vertical => origin.row.checked_sub(1).map(|r| Pos::new(r, origin.col)),
        };
        let after = direction.step(origin, word.len());
        if !before.is_none_or(|p| self.is_blank(p)) || !self.is_blank(after) {
            return None;
        }

        let sides_ok = (0..word.len())
            .map(|i| direction.step(origin, i))
            .filter(|&pos| self.is_blank(pos))
            .all(|pos| self.sides_clear(pos, direction));

        sides_ok.then_some(count)
    }

    /// First legal origin in row-major order that crosses an existing word
    fn find_crossing(&self, word: &WordEntry, direction: Direction) -> Option<Pos> {
        let span = self.size - word.len() + 1;
        let (rows, cols) = match direction {
            Direction::Horizontal => (self.size, span),
            Direction::Vertical => (span, self.size),
        };

        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Pos::new(row, col)))
            .find(|&origin| self.is_legal(word, origin, direction).is_some_and(|n| n > 0))
    }

    /// First origin along one row or column that passes `fits`
    fn find_in_line<F>(
        &self,
        word: &WordEntry,
        direction: Direction,
        line: usize,
        fits: F,
    ) -> Option<Pos>
    where
        F: Fn(Pos) -> bool,
    {
        let span = self.size - word.len() + 1;
        (0..span)
            .map(|offset| match direction {
                Direction::Horizontal => Pos::new(line, offset),
                Direction::Vertical => Pos::new(offset, line),
            })
            .find(|&origin| fits(origin))
    }

    /// Escape path: center row, center column, then any row or column
    ///
    /// A spot with blank ends and clear sides wins anywhere on the board;
    /// only when none exists is a merely conflict-free spot used.
    fn find_forced(&self, word: &WordEntry) -> Option<(Pos, Direction)> {
        let center = self.size / 2;
        let lines: Vec<(Direction, usize)> = std::iter::once((Direction::Horizontal, center))
            .chain(std::iter::once((Direction::Vertical, center)))
            .chain((0..self.size).map(|line| (Direction::Horizontal, line)))
            .chain((0..self.size).map(|line| (Direction::Vertical, line)))
            .collect();

        let legal = lines.iter().find_map(|&(direction, line)| {
            self.find_in_line(word, direction, line, |origin| {
                self.is_legal(word, origin, direction).is_some()
            })
            .map(|origin| (origin, direction))
        });
        legal.or_else(|| {
            lines.iter().find_map(|&(direction, line)| {
                self.find_in_line(word, direction, line, |origin| {
                    self.crossings(word, origin, direction).is_some()
                })
                .map(|origin| (origin, direction))
            })
        })
    }

    fn place(&mut self, word: &WordEntry, origin: Pos, direction: Direction) {
        for (i, letter) in word.text().chars().enumerate() {
            let pos = direction.step(origin, i);
            self.grid.set(pos, Cell::Letter(letter));
            if let Some(used) = self.usage.get_mut(pos) {
                *used |= Self::mask(direction);
            }
        }
        self.placed.push(PlacedWord {
            word: word.text().to_string(),
            row: origin.row,
            col: origin.col,
            direction,
        });
    }
}

/// Number entries by start cell in row-major order
fn number_entries(
    placed: Vec<PlacedWord>,
    clues: &HashMap<String, String>,
    words: &[WordEntry],
) -> Vec<CrosswordEntry> {
    let clues: HashMap<String, &str> = clues
        .iter()
        .map(|(word, clue)| (word.trim().to_lowercase(), clue.as_str()))
        .collect();

    let mut starts: Vec<Pos> = placed.iter().map(PlacedWord::origin).collect();
    starts.sort_unstable();
    starts.dedup();

    let mut entries: Vec<CrosswordEntry> = placed
        .into_iter()
        .map(|placement| {
            let number = starts
                .binary_search(&placement.origin())
                .map_or(0, |i| i + 1);
            let clue = match clues.get(&placement.word) {
                Some(clue) => (*clue).to_string(),
                None => words
                    .iter()
                    .find(|w| w.text() == placement.word)
                    .map(default_clue)
                    .unwrap_or_default(),
            };
            CrosswordEntry {
                number,
                placement,
                clue,
            }
        })
        .collect();

    entries.sort_by_key(|e| (e.number, e.placement.direction == Direction::Vertical));
    entries
}

/// Build a crossword from `words`, attaching clues from `clues`
///
/// Duplicate and invalid words are ignored. Clue keys match words without
/// regard to case or surrounding spaces. Words without a clue get a generic
/// "N-letter word starting with" clue.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use word_games::puzzles::crossword::{generate_crossword, CrosswordConfig};
///
/// let clues = HashMap::from([("apple".to_string(), "A red fruit".to_string())]);
/// let puzzle = generate_crossword(&["apple", "pear"], &clues, &CrosswordConfig::default());
/// assert_eq!(puzzle.entries.len(), 2);
/// assert!(puzzle.entries.iter().any(|e| e.clue == "A red fruit"));
/// ```
pub fn generate_crossword<S: AsRef<str>>(
    words: &[S],
    clues: &HashMap<String, String>,
    config: &CrosswordConfig,
) -> Crossword {
    let mut ordered = WordEntry::parse_all(words);
    let mut seen = rustc_hash::FxHashSet::default();
    ordered.retain(|w| seen.insert(w.text().to_string()));
    ordered.sort_by_key(|w| Reverse(w.len()));

    let mut board = Board::new(config.size);
    let mut unplaced = Vec::new();

    for word in &ordered {
        if word.len() > config.size {
            unplaced.push(word.text().to_string());
            continue;
        }

        if board.placed.is_empty() {
            let center = config.size / 2;
            let origin = Pos::new(center, (config.size - word.len()) / 2);
            board.place(word, origin, Direction::Horizontal);
            continue;
        }

        let crossing = Direction::ALL
            .into_iter()
            .find_map(|direction| board.find_crossing(word, direction).map(|o| (o, direction)));

        if let Some((origin, direction)) = crossing {
            board.place(word, origin, direction);
        } else if let Some((origin, direction)) = board.find_forced(word) {
            tracing::debug!(word = word.text(), %origin, "forced crossword placement");
            board.place(word, origin, direction);
        } else {
            unplaced.push(word.text().to_string());
        }
    }

    if !unplaced.is_empty() {
        tracing::warn!(words = ?unplaced, "crossword could not place words");
    }

    let Board { grid, placed, .. } = board;
    Crossword {
        grid,
        entries: number_entries(placed, clues, &ordered),
        unplaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Category;

    fn build(words: &[&str]) -> Crossword {
        generate_crossword(words, &HashMap::new(), &CrosswordConfig::default())
    }

    fn assert_consistent(puzzle: &Crossword) {
        for entry in &puzzle.entries {
            let p = &entry.placement;
            let read = puzzle.grid.read(p.origin(), p.direction, p.word.len());
            assert_eq!(read.as_deref(), Some(p.word.as_str()));
        }
    }

    #[test]
    fn first_word_is_centered() {
        let puzzle = build(&["apple"]);
        let entry = &puzzle.entries[0];
        assert_eq!(entry.number, 1);
        assert_eq!(entry.placement.origin(), Pos::new(7, 5));
        assert_eq!(entry.placement.direction, Direction::Horizontal);
    }

    #[test]
    fn second_word_crosses_first() {
        let puzzle = build(&["pear", "apple"]);

        let pear = puzzle
            .entries
            .iter()
            .find(|e| e.placement.word == "pear")
            .unwrap();
        assert_eq!(pear.placement.direction, Direction::Vertical);
        assert_eq!(pear.placement.origin(), Pos::new(5, 5));
        assert_eq!(pear.number, 1);

        let apple = puzzle
            .entries
            .iter()
            .find(|e| e.placement.word == "apple")
            .unwrap();
        assert_eq!(apple.number, 2);
        assert_consistent(&puzzle);
    }

    #[test]
    fn disjoint_word_is_forced_onto_center_row() {
        let puzzle = build(&["cat", "dog"]);
        let dog = puzzle
            .entries
            .iter()
            .find(|e| e.placement.word == "dog")
            .unwrap();
        assert_eq!(dog.placement.origin(), Pos::new(7, 0));
        assert_eq!(dog.placement.direction, Direction::Horizontal);
        assert_consistent(&puzzle);
    }

    #[test]
    fn every_word_placed_exactly_once() {
        for category in Category::ALL {
            let words: Vec<&str> = category.words().to_vec();
            let puzzle = build(&words);
            assert!(puzzle.unplaced.is_empty(), "{category}");
            for word in &words {
                let count = puzzle
                    .entries
                    .iter()
                    .filter(|e| e.placement.word == *word)
                    .count();
                assert_eq!(count, 1, "{word} in {category}");
            }
            assert_consistent(&puzzle);
        }
    }

    #[test]
    fn duplicates_and_invalid_words_ignored() {
        let puzzle = build(&["cat", "CAT", "ice cream", "act"]);
        assert_eq!(puzzle.entries.len(), 2);
    }

    #[test]
    fn oversized_word_is_unplaced() {
        let config = CrosswordConfig { size: 5 };
        let puzzle = generate_crossword(&["elephant", "cat"], &HashMap::new(), &config);
        assert_eq!(puzzle.unplaced, vec!["elephant".to_string()]);
        assert_eq!(puzzle.entries.len(), 1);
    }

    #[test]
    fn clues_attached_with_fallback() {
        let clues = HashMap::from([("apple".to_string(), "A red fruit".to_string())]);
        let puzzle = generate_crossword(&["apple", "pear"], &clues, &CrosswordConfig::default());

        let apple = puzzle
            .entries
            .iter()
            .find(|e| e.placement.word == "apple")
            .unwrap();
        assert_eq!(apple.clue, "A red fruit");

        let pear = puzzle
            .entries
            .iter()
            .find(|e| e.placement.word == "pear")
            .unwrap();
        assert_eq!(pear.clue, "A 4-letter word starting with 'p'");
    }

    /// Maximal letter runs along every row and column
    fn runs(grid: &Grid<Cell>) -> Vec<String> {
        grid.row_strings()
            .into_iter()
            .chain(grid.column_strings())
            .flat_map(|line| {
                line.split(|c: char| !c.is_ascii_alphabetic())
                    .filter(|run| run.len() > 1)
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    #[test]
    fn forced_words_keep_their_boundaries() {
        let puzzle = build(&["apple", "dog", "sun"]);
        assert!(puzzle.unplaced.is_empty());
        assert_consistent(&puzzle);

        let mut found = runs(&puzzle.grid);
        found.sort();
        assert_eq!(found, vec!["apple", "dog", "sun"]);
    }

    #[test]
    fn category_grids_have_no_fused_runs() {
        for category in Category::ALL {
            let puzzle = build(category.words());
            let answers: Vec<&str> = puzzle
                .entries
                .iter()
                .map(|e| e.placement.word.as_str())
                .collect();
            for run in runs(&puzzle.grid) {
                assert!(answers.contains(&run.as_str()), "{run} in {category}");
            }
        }
    }

    #[test]
    fn clue_keys_ignore_case_and_spaces() {
        let clues = HashMap::from([(" Apple ".to_string(), "A red fruit".to_string())]);
        let puzzle = generate_crossword(&["apple"], &clues, &CrosswordConfig::default());
        assert_eq!(puzzle.entries[0].clue, "A red fruit");
    }

    #[test]
    fn check_answer_by_number() {
        let puzzle = build(&["pear", "apple"]);
        assert!(puzzle.check_answer(1, Direction::Vertical, "PEAR"));
        assert!(puzzle.check_answer(2, Direction::Horizontal, "apple"));
        assert!(!puzzle.check_answer(2, Direction::Vertical, "apple"));
        assert!(!puzzle.check_answer(1, Direction::Vertical, "bear"));
    }

    #[test]
    fn entries_sorted_by_number() {
        let words = Category::Food.words();
        let puzzle = build(words);
        let numbers: Vec<usize> = puzzle.entries.iter().map(|e| e.number).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        assert_eq!(numbers, sorted);
        assert_eq!(
            puzzle.clues(Direction::Horizontal).count() + puzzle.clues(Direction::Vertical).count(),
            puzzle.entries.len()
        );
    }
}
