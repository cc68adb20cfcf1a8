//! Core domain types for the word games
//!
//! This module contains the fundamental domain types shared by every generator.
//! All types here are pure and hold no randomness or storage.

mod grid;
mod word;

pub use grid::{Cell, Direction, Grid, PlacedWord, Pos};
pub use word::{MAX_WORD_LEN, WordEntry, WordError};
