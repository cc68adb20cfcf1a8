//! Sentence maze
//!
//! A grid maze whose path cells spell out a sentence. The player walks from
//! the left edge to the right edge picking up the words in order.

mod game;
mod generator;

pub use game::{MazeGame, Move, MoveOutcome};
pub use generator::{Maze, MazeCell, MazeError, generate_maze};
