//! Sentence maze generation
//!
//! Carves a 4-connected path from the left edge to the right edge, grows a
//! few dead-end branches off it, then scatters the sentence's words along the
//! path with decoys everywhere else.

use crate::core::{Grid, Pos, WordEntry};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::fmt;

/// Chance a wordless path cell repeats a sentence word instead of a filler
const SENTENCE_DECOY_CHANCE: f64 = 0.3;

/// One maze square
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MazeCell {
    pub is_path: bool,
    pub is_visited: bool,
    pub is_start: bool,
    pub is_end: bool,
    pub is_current: bool,
    pub word: Option<String>,
}

/// A generated maze
#[derive(Debug, Clone)]
pub struct Maze {
    pub grid: Grid<MazeCell>,
    pub start: Pos,
    pub end: Pos,
    /// Words to collect, in order
    pub sentence: Vec<String>,
}

/// Reasons a maze cannot be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    TooSmall(usize),
    SentenceTooShort(usize),
    InvalidWord(String),
    SentenceTooLong { words: usize, path_cells: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall(size) => write!(f, "Maze size must be at least 2, got {size}"),
            Self::SentenceTooShort(len) => {
                write!(f, "Sentence needs at least 2 words, got {len}")
            }
            Self::InvalidWord(word) => write!(f, "'{word}' cannot be used as a maze word"),
            Self::SentenceTooLong { words, path_cells } => write!(
                f,
                "Sentence has {words} words but the path only has {path_cells} free cells"
            ),
        }
    }
}

impl std::error::Error for MazeError {}

impl Maze {
    /// Shortest route between two path cells, inclusive of both ends
    ///
    /// Only path cells are walked. Returns `None` if either end is off the
    /// path or no route exists.
    #[must_use]
    pub fn route(&self, from: Pos, to: Pos) -> Option<Vec<Pos>> {
        let on_path = |pos: Pos| self.grid.get(pos).is_some_and(|c| c.is_path);
        if !on_path(from) || !on_path(to) {
            return None;
        }

        let mut parent: FxHashMap<Pos, Pos> = FxHashMap::default();
        let mut queue = VecDeque::from([from]);
        parent.insert(from, from);

        while let Some(pos) = queue.pop_front() {
            if pos == to {
                let mut route = vec![to];
                let mut cursor = to;
                while cursor != from {
                    cursor = parent[&cursor];
                    route.push(cursor);
                }
                route.reverse();
                return Some(route);
            }

            for next in self.grid.neighbors(pos) {
                if on_path(next) && !parent.contains_key(&next) {
                    parent.insert(next, pos);
                    queue.push_back(next);
                }
            }
        }

        None
    }

    /// Number of path cells
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.grid.iter().filter(|(_, c)| c.is_path).count()
    }
}

/// Step from `from` one cell toward `to`, never diagonally
fn toward(from: usize, to: usize) -> usize {
    match from.cmp(&to) {
        std::cmp::Ordering::Less => from + 1,
        std::cmp::Ordering::Greater => from - 1,
        std::cmp::Ordering::Equal => from,
    }
}

fn mark_path(grid: &mut Grid<MazeCell>, pos: Pos) {
    if let Some(cell) = grid.get_mut(pos) {
        cell.is_path = true;
    }
}

/// Walk from start to end, choosing a horizontal or vertical step at random
fn carve_main_path<R: Rng + ?Sized>(grid: &mut Grid<MazeCell>, start: Pos, end: Pos, rng: &mut R) {
    let mut pos = start;
    while pos != end {
        let prefer_horizontal = rng.random_bool(0.5);
        pos = if (prefer_horizontal && pos.col != end.col) || pos.row == end.row {
            Pos::new(pos.row, toward(pos.col, end.col))
        } else {
            Pos::new(toward(pos.row, end.row), pos.col)
        };
        mark_path(grid, pos);
    }
}

fn free_neighbors(grid: &Grid<MazeCell>, pos: Pos) -> Vec<Pos> {
    grid.neighbors(pos)
        .into_iter()
        .filter(|&n| grid.get(n).is_some_and(|c| !c.is_path))
        .collect()
}

/// Grow `count` single-cell branches off random interior path cells
///
/// Each branch adds exactly one path cell; growth stops early only when no
/// interior path cell has a free neighbor left.
fn add_branches<R: Rng + ?Sized>(
    grid: &mut Grid<MazeCell>,
    start: Pos,
    end: Pos,
    count: usize,
    rng: &mut R,
) {
    for _ in 0..count {
        let frontier: Vec<Pos> = grid
            .iter()
            .filter(|(pos, c)| c.is_path && *pos != start && *pos != end)
            .map(|(pos, _)| pos)
            .filter(|&pos| !free_neighbors(grid, pos).is_empty())
            .collect();
        let Some(&from) = frontier.choose(rng) else {
            return;
        };
        if let Some(&next) = free_neighbors(grid, from).choose(rng) {
            mark_path(grid, next);
        }
    }
}

/// Generate a `size x size` maze for `sentence`
///
/// The first word sits on the start cell (left edge), the last on the end
/// cell (right edge) and the rest on shuffled path cells. Every other cell
/// gets a filler word, or on the path sometimes a repeated sentence word.
///
/// # Errors
/// Returns `MazeError` when `size < 2`, any sentence token is not a valid
/// word, the sentence has fewer than two words, or there are not enough path
/// cells for the middle words.
pub fn generate_maze<S, F, R>(
    size: usize,
    sentence: &[S],
    fillers: &[F],
    rng: &mut R,
) -> Result<Maze, MazeError>
where
    S: AsRef<str>,
    F: AsRef<str>,
    R: Rng + ?Sized,
{
    if size < 2 {
        return Err(MazeError::TooSmall(size));
    }

    let sentence: Vec<String> = sentence
        .iter()
        .map(|word| {
            WordEntry::new(word)
                .map(WordEntry::into_string)
                .map_err(|_| MazeError::InvalidWord(word.as_ref().to_string()))
        })
        .collect::<Result<_, _>>()?;
    if sentence.len() < 2 {
        return Err(MazeError::SentenceTooShort(sentence.len()));
    }

    let fillers: Vec<String> = WordEntry::parse_all(fillers)
        .into_iter()
        .map(WordEntry::into_string)
        .collect();

    let mut grid: Grid<MazeCell> = Grid::square(size);
    let start = Pos::new(rng.random_range(0..size), 0);
    let end = Pos::new(rng.random_range(0..size), size - 1);

    for (pos, is_start) in [(start, true), (end, false)] {
        if let Some(cell) = grid.get_mut(pos) {
            cell.is_path = true;
            cell.is_start = is_start;
            cell.is_end = !is_start;
        }
    }

    carve_main_path(&mut grid, start, end, rng);
    add_branches(&mut grid, start, end, size * 3 / 2, rng);

    let first = &sentence[0];
    let last = &sentence[sentence.len() - 1];
    let middle = &sentence[1..sentence.len() - 1];

    let mut open: Vec<Pos> = grid
        .iter()
        .filter(|(pos, c)| c.is_path && *pos != start && *pos != end)
        .map(|(pos, _)| pos)
        .collect();
    if open.len() < middle.len() {
        return Err(MazeError::SentenceTooLong {
            words: sentence.len(),
            path_cells: open.len(),
        });
    }
    open.shuffle(rng);

    let mut assignments = vec![(start, first.clone()), (end, last.clone())];
    assignments.extend(open.iter().copied().zip(middle.iter().cloned()));
    for (pos, word) in assignments {
        if let Some(cell) = grid.get_mut(pos) {
            cell.word = Some(word);
        }
    }

    for (_, cell) in grid.iter_mut() {
        if cell.word.is_some() {
            continue;
        }
        let pool = if fillers.is_empty() || (cell.is_path && rng.random_bool(SENTENCE_DECOY_CHANCE))
        {
            &sentence
        } else {
            &fillers
        };
        cell.word = pool.choose(rng).cloned();
    }

    Ok(Maze {
        grid,
        start,
        end,
        sentence,
    })
}
