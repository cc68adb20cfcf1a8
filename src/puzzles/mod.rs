//! Puzzle generators and game rules
//!
//! Every generator takes its words and an explicit random source and
//! returns a freshly owned puzzle. Player actions are judged by the game
//! types and come back as values, never panics.

pub mod bingo;
pub mod crossword;
pub mod ladder;
pub mod maze;
pub mod misspelling;
pub mod quiz;
pub mod word_search;
