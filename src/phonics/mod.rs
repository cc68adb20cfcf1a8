//! Phonics helpers
//!
//! Syllable splitting and spelling-pattern rules for reading practice.

mod rules;
mod syllables;

pub use rules::{BLENDS, DIGRAPHS, phonics_rules, pronunciation_rules};
pub use syllables::split_into_syllables;
