//! Themed word categories and the content blocklist

use std::fmt;
use std::str::FromStr;

/// A themed word list used by crossword, matching and spelling games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Animals,
    Colors,
    Food,
    Body,
    Home,
    Nature,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Animals,
        Self::Colors,
        Self::Food,
        Self::Body,
        Self::Home,
        Self::Nature,
    ];

    /// The ten words in this category
    #[must_use]
    pub const fn words(self) -> &'static [&'static str; 10] {
        match self {
            Self::Animals => &[
                "cat", "dog", "bird", "fish", "horse", "cow", "pig", "duck", "frog", "lion",
            ],
            Self::Colors => &[
                "red", "blue", "green", "yellow", "orange", "purple", "pink", "brown", "black",
                "white",
            ],
            Self::Food => &[
                "apple", "bread", "milk", "egg", "cake", "corn", "rice", "soup", "pear", "grape",
            ],
            Self::Body => &[
                "head", "hand", "foot", "nose", "arm", "leg", "ear", "mouth", "hair", "knee",
            ],
            Self::Home => &[
                "bed", "door", "chair", "table", "lamp", "sofa", "sink", "cup", "book", "clock",
            ],
            Self::Nature => &[
                "tree", "sun", "moon", "star", "rain", "snow", "wind", "rock", "leaf", "flower",
            ],
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Animals => "animals",
            Self::Colors => "colors",
            Self::Food => "food",
            Self::Body => "body",
            Self::Home => "home",
            Self::Nature => "nature",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == lowered)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|c| c.name()).collect();
                format!("Unknown category '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Substrings that mark text as unsuitable for young readers
///
/// Matched case-insensitively anywhere in the text.
pub const BLOCKLIST: &[&str] = &[
    "kill", "murder", "blood", "weapon", "drug", "alcohol", "beer", "drunk", "sex", "naked",
    "damn", "stupid", "idiot", "violent", "suicide", "corpse", "gore", "torture",
];
