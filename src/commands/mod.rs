//! Command implementations

pub mod analyze;
pub mod generate;
pub mod ladder;
pub mod play;
pub mod stress;
pub mod words;

pub use analyze::{AnalysisResult, analyze_word};
pub use generate::{
    SearchConfig, WordSource, build_bingo, build_crossword, build_maze, build_spelling_rounds,
    build_word_search, resolve_words,
};
pub use ladder::{LadderConfig, LadderResult, LadderStep, LadderStrategy, solve_ladder};
pub use play::{run_ladder_game, run_quiz};
pub use stress::{StressConfig, StressResult, run_stress};
pub use words::{WordListing, add_sight_word, list_category, list_sight_words, random_sight_words};
