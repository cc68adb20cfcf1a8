//! Interactive maze played in the terminal

pub mod app;
pub mod rendering;

pub use app::{MazeApp, MazeFactory, run_tui};
