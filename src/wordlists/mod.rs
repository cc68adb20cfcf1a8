//! Word lists for the games
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! plus the static category, blocklist and seed tables.

mod categories;
mod embedded;
pub mod loader;
pub mod seeds;

pub use categories::{BLOCKLIST, Category};
pub use embedded::{
    COMMON_WORDS, COMMON_WORDS_COUNT, SIGHT_FIRST, SIGHT_FIRST_COUNT, SIGHT_PRE_PRIMER,
    SIGHT_PRE_PRIMER_COUNT, SIGHT_PRIMER, SIGHT_PRIMER_COUNT, SIGHT_SECOND, SIGHT_SECOND_COUNT,
    SIGHT_THIRD, SIGHT_THIRD_COUNT,
};

use std::fmt;
use std::str::FromStr;

/// Reading level for sight-word lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    PreK,
    Kindergarten,
    First,
    Second,
    Third,
}

impl Grade {
    pub const ALL: [Self; 5] = [
        Self::PreK,
        Self::Kindergarten,
        Self::First,
        Self::Second,
        Self::Third,
    ];

    /// The embedded sight-word list for this grade
    #[must_use]
    pub const fn sight_words(self) -> &'static [&'static str] {
        match self {
            Self::PreK => SIGHT_PRE_PRIMER,
            Self::Kindergarten => SIGHT_PRIMER,
            Self::First => SIGHT_FIRST,
            Self::Second => SIGHT_SECOND,
            Self::Third => SIGHT_THIRD,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PreK => "prek",
            Self::Kindergarten => "k",
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prek" | "pre-k" | "preprimer" | "pre-primer" => Ok(Self::PreK),
            "k" | "kindergarten" | "primer" => Ok(Self::Kindergarten),
            "1" | "first" => Ok(Self::First),
            "2" | "second" => Ok(Self::Second),
            "3" | "third" => Ok(Self::Third),
            other => Err(format!("Unknown grade '{other}' (expected prek, k, 1, 2 or 3)")),
        }
    }
}
