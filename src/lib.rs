//! Word Games
//!
//! Puzzle generators and word-game logic for early readers: word searches,
//! crosswords, sentence mazes, word ladders, spelling practice, bingo cards
//! and phonics analysis over curated sight-word lists.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use word_games::corpus::{MemoryRepository, WordCorpus};
//! use word_games::phonics::split_into_syllables;
//! use word_games::puzzles::word_search::{WordSearchConfig, generate_word_search};
//! use word_games::wordlists::Grade;
//!
//! let corpus = WordCorpus::open(MemoryRepository::new());
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let words = corpus.random_words(6, Some(Grade::First), &mut rng);
//! let puzzle = generate_word_search(&words, 10, &WordSearchConfig::default(), &mut rng);
//! println!("Placed {} words", puzzle.placed.len());
//!
//! println!("{:?}", split_into_syllables("butterfly"));
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Dictionary, sight words and persistence
pub mod corpus;

// Syllables and phonics rules
pub mod phonics;

// Puzzle generators and game logic
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
