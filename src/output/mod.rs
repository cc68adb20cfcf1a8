//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_bingo_card, print_crossword, print_ladder_result, print_maze,
    print_spelling_rounds, print_stress_result, print_word_listing, print_word_search,
};
