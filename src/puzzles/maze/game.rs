//! Playing a sentence maze
//!
//! The player starts on the start cell holding the first word and walks one
//! cell at a time. Words are only collected in sentence order.

use super::generator::Maze;
use crate::core::Pos;
use rustc_hash::FxHashSet;

/// One player step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// The move that takes `from` to the orthogonally adjacent `to`
    #[must_use]
    pub const fn between(from: Pos, to: Pos) -> Option<Self> {
        if from.row == to.row && from.col + 1 == to.col {
            Some(Self::Right)
        } else if from.row == to.row && to.col + 1 == from.col {
            Some(Self::Left)
        } else if from.col == to.col && from.row + 1 == to.row {
            Some(Self::Down)
        } else if from.col == to.col && to.row + 1 == from.row {
            Some(Self::Up)
        } else {
            None
        }
    }
}

/// What happened after a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Blocked by the edge; no move counted
    Ignored,
    Moved,
    Collected(String),
    /// Stepped on a sentence cell out of order
    OutOfOrder { found: String, expected: String },
    /// Reached the end with the whole sentence
    Completed,
    /// Reached the end with words still missing
    Incomplete { collected: usize, needed: usize },
}

/// Game state for one maze
#[derive(Debug, Clone)]
pub struct MazeGame {
    maze: Maze,
    position: Pos,
    collected: Vec<String>,
    harvested: FxHashSet<Pos>,
    moves: usize,
    completed: bool,
}

impl MazeGame {
    /// Place the player on the start cell, already holding the first word
    #[must_use]
    pub fn new(mut maze: Maze) -> Self {
        let position = maze.start;
        let mut collected = Vec::new();
        let mut harvested = FxHashSet::default();

        if let Some(cell) = maze.grid.get_mut(position) {
            cell.is_current = true;
            if let Some(word) = &cell.word {
                collected.push(word.clone());
                harvested.insert(position);
            }
        }

        Self {
            maze,
            position,
            collected,
            harvested,
            moves: 0,
            completed: false,
        }
    }

    #[must_use]
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }

    #[must_use]
    pub const fn position(&self) -> Pos {
        self.position
    }

    #[must_use]
    pub fn collected(&self) -> &[String] {
        &self.collected
    }

    #[must_use]
    pub const fn moves(&self) -> usize {
        self.moves
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed
    }

    /// Next sentence word to pick up
    #[must_use]
    pub fn expected_next(&self) -> Option<&str> {
        self.maze
            .sentence
            .get(self.collected.len())
            .map(String::as_str)
    }

    /// Shortest path-only route to the nearest copy of the next word, or to
    /// the end once the sentence is collected
    #[must_use]
    pub fn hint_route(&self) -> Option<Vec<Pos>> {
        let Some(expected) = self.expected_next() else {
            return self.maze.route(self.position, self.maze.end);
        };

        self.maze
            .grid
            .iter()
            .filter(|(pos, cell)| {
                cell.is_path
                    && !self.harvested.contains(pos)
                    && cell.word.as_deref() == Some(expected)
            })
            .filter_map(|(pos, _)| self.maze.route(self.position, pos))
            .min_by_key(Vec::len)
    }

    fn target(&self, mv: Move) -> Pos {
        let Pos { row, col } = self.position;
        let last_row = self.maze.grid.rows().saturating_sub(1);
        let last_col = self.maze.grid.cols().saturating_sub(1);
        match mv {
            Move::Up => Pos::new(row.saturating_sub(1), col),
            Move::Down => Pos::new((row + 1).min(last_row), col),
            Move::Left => Pos::new(row, col.saturating_sub(1)),
            Move::Right => Pos::new(row, (col + 1).min(last_col)),
        }
    }

    /// Move one cell, clamped to the grid
    pub fn step(&mut self, mv: Move) -> MoveOutcome {
        if self.completed {
            return MoveOutcome::Ignored;
        }

        let next = self.target(mv);
        if next == self.position {
            return MoveOutcome::Ignored;
        }

        self.moves += 1;
        if let Some(cell) = self.maze.grid.get_mut(self.position) {
            cell.is_current = false;
            if cell.is_path {
                cell.is_visited = true;
            }
        }
        self.position = next;

        let mut outcome = MoveOutcome::Moved;
        let mut word_here = None;
        if let Some(cell) = self.maze.grid.get_mut(next) {
            cell.is_current = true;
            if cell.is_path {
                word_here = cell.word.clone();
            }
        }

        if let Some(word) = word_here.filter(|_| !self.harvested.contains(&next)) {
            let expected = self.expected_next().map(str::to_string);
            match expected {
                Some(ref expected) if *expected == word => {
                    tracing::debug!(%word, pos = %next, "collected maze word");
                    self.collected.push(word.clone());
                    self.harvested.insert(next);
                    outcome = MoveOutcome::Collected(word);
                }
                expected if !self.collected.contains(&word) => {
                    outcome = MoveOutcome::OutOfOrder {
                        expected: expected.unwrap_or_default(),
                        found: word,
                    };
                }
                _ => {}
            }
        }

        if next == self.maze.end {
            if self.collected == self.maze.sentence {
                self.completed = true;
                outcome = MoveOutcome::Completed;
            } else {
                outcome = MoveOutcome::Incomplete {
                    collected: self.collected.len(),
                    needed: self.maze.sentence.len(),
                };
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;
    use crate::puzzles::maze::{MazeCell, generate_maze};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn path_cell(word: &str) -> MazeCell {
        MazeCell {
            is_path: true,
            word: Some(word.to_string()),
            ..MazeCell::default()
        }
    }

    /// Single row: the(start) sat cat sat(end), plus a wall row beneath
    fn corridor() -> Maze {
        let mut grid: Grid<MazeCell> = Grid::new(2, 4);
        for (col, word) in ["the", "sat", "cat", "sat"].iter().enumerate() {
            grid.set(Pos::new(0, col), path_cell(word));
        }
        for col in 0..4 {
            grid.set(
                Pos::new(1, col),
                MazeCell {
                    word: Some("moon".to_string()),
                    ..MazeCell::default()
                },
            );
        }
        if let Some(cell) = grid.get_mut(Pos::new(0, 0)) {
            cell.is_start = true;
        }
        if let Some(cell) = grid.get_mut(Pos::new(0, 3)) {
            cell.is_end = true;
        }

        Maze {
            grid,
            start: Pos::new(0, 0),
            end: Pos::new(0, 3),
            sentence: vec!["the".into(), "cat".into(), "sat".into()],
        }
    }

    #[test]
    fn start_word_collected_immediately() {
        let game = MazeGame::new(corridor());
        assert_eq!(game.collected(), ["the".to_string()]);
        assert_eq!(game.expected_next(), Some("cat"));
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn out_of_order_then_complete() {
        let mut game = MazeGame::new(corridor());

        assert_eq!(
            game.step(Move::Right),
            MoveOutcome::OutOfOrder {
                found: "sat".into(),
                expected: "cat".into()
            }
        );
        assert_eq!(game.step(Move::Right), MoveOutcome::Collected("cat".into()));
        assert_eq!(game.step(Move::Right), MoveOutcome::Completed);
        assert!(game.is_complete());
        assert_eq!(game.moves(), 3);
        assert_eq!(game.step(Move::Left), MoveOutcome::Ignored);
    }

    #[test]
    fn reaching_end_early_is_incomplete() {
        let mut game = MazeGame::new(corridor());
        // Walk the wall row to skip "cat"
        game.step(Move::Down);
        game.step(Move::Right);
        game.step(Move::Right);
        game.step(Move::Right);
        assert_eq!(
            game.step(Move::Up),
            MoveOutcome::Incomplete {
                collected: 1,
                needed: 3
            }
        );
        assert!(!game.is_complete());

        // Still playable afterwards
        assert_eq!(game.step(Move::Left), MoveOutcome::Collected("cat".into()));
        assert_eq!(game.step(Move::Right), MoveOutcome::Completed);
    }

    #[test]
    fn edges_block_without_counting() {
        let mut game = MazeGame::new(corridor());
        assert_eq!(game.step(Move::Up), MoveOutcome::Ignored);
        assert_eq!(game.step(Move::Left), MoveOutcome::Ignored);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.position(), Pos::new(0, 0));
    }

    #[test]
    fn leaving_a_path_cell_marks_it_visited() {
        let mut game = MazeGame::new(corridor());
        game.step(Move::Right);
        let grid = &game.maze().grid;
        assert!(grid.get(Pos::new(0, 0)).unwrap().is_visited);
        assert!(grid.get(Pos::new(0, 1)).unwrap().is_current);
        assert!(!grid.get(Pos::new(0, 0)).unwrap().is_current);

        game.step(Move::Down);
        game.step(Move::Right);
        assert!(!game.maze().grid.get(Pos::new(1, 1)).unwrap().is_visited);
    }

    #[test]
    fn hint_leads_to_next_word_then_end() {
        let mut game = MazeGame::new(corridor());
        assert_eq!(
            game.hint_route(),
            Some(vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)])
        );

        game.step(Move::Right);
        game.step(Move::Right);
        assert_eq!(game.hint_route(), Some(vec![Pos::new(0, 2), Pos::new(0, 1)]));

        assert_eq!(game.step(Move::Left), MoveOutcome::Collected("sat".into()));
        assert_eq!(game.expected_next(), None);
        assert_eq!(
            game.hint_route(),
            Some(vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3)])
        );
    }

    #[test]
    fn move_between_adjacent_cells() {
        let origin = Pos::new(2, 2);
        assert_eq!(Move::between(origin, Pos::new(1, 2)), Some(Move::Up));
        assert_eq!(Move::between(origin, Pos::new(3, 2)), Some(Move::Down));
        assert_eq!(Move::between(origin, Pos::new(2, 1)), Some(Move::Left));
        assert_eq!(Move::between(origin, Pos::new(2, 3)), Some(Move::Right));
        assert_eq!(Move::between(origin, Pos::new(3, 3)), None);
    }

    fn walk(game: &mut MazeGame, to: Pos) -> MoveOutcome {
        let route = game.maze().route(game.position(), to).unwrap();
        let mut last = MoveOutcome::Ignored;
        for pair in route.windows(2) {
            let mv = Move::between(pair[0], pair[1]).unwrap();
            last = game.step(mv);
        }
        last
    }

    #[test]
    fn generated_mazes_are_solvable() {
        let sentence = ["we", "see", "a", "big", "green", "tree"];
        let fillers = ["cat", "moon", "cake", "blue"];

        for seed in 0..15 {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = generate_maze(8, &sentence, &fillers, &mut rng).unwrap();
            let mut game = MazeGame::new(maze);

            for word in &sentence[1..sentence.len() - 1] {
                let target = game
                    .maze()
                    .grid
                    .iter()
                    .find(|(pos, c)| {
                        c.is_path && c.word.as_deref() == Some(*word) && *pos != game.maze().end
                    })
                    .map(|(pos, _)| pos)
                    .unwrap();
                walk(&mut game, target);
                assert!(game.collected().iter().any(|w| w == word), "seed {seed}");
            }

            let end = game.maze().end;
            assert_eq!(walk(&mut game, end), MoveOutcome::Completed, "seed {seed}");
            assert_eq!(game.collected(), sentence.map(String::from));
        }
    }
}
