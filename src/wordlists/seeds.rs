//! Static seed records for the quiz, maze and ladder games
//!
//! Loaded once, never mutated.

/// A target word with words that do and do not rhyme with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RhymeSet {
    pub target: &'static str,
    pub rhymes: &'static [&'static str],
    pub non_rhymes: &'static [&'static str],
}

/// A sentence with a blank for display, plus its ordered word tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceTemplate {
    pub template: &'static str,
    pub words: &'static [&'static str],
}

/// A letter or blend with its phonetic label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSoundEntry {
    pub letters: &'static str,
    pub sound: &'static str,
    pub example: &'static str,
}

/// Start and goal words for a word ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderPuzzle {
    pub start: &'static str,
    pub target: &'static str,
}

pub const RHYME_SETS: &[RhymeSet] = &[
    RhymeSet {
        target: "cat",
        rhymes: &["hat", "bat", "mat", "rat"],
        non_rhymes: &["dog", "sun", "pig", "cup"],
    },
    RhymeSet {
        target: "dog",
        rhymes: &["log", "fog", "frog", "hog"],
        non_rhymes: &["cat", "bed", "tree", "milk"],
    },
    RhymeSet {
        target: "bee",
        rhymes: &["tree", "see", "three", "tea"],
        non_rhymes: &["bug", "hat", "fish", "moon"],
    },
    RhymeSet {
        target: "cake",
        rhymes: &["lake", "make", "rake", "snake"],
        non_rhymes: &["cook", "pie", "milk", "bread"],
    },
    RhymeSet {
        target: "star",
        rhymes: &["car", "jar", "far", "tar"],
        non_rhymes: &["moon", "sun", "sky", "stop"],
    },
    RhymeSet {
        target: "ring",
        rhymes: &["sing", "king", "wing", "swing"],
        non_rhymes: &["rang", "bell", "hand", "rock"],
    },
];

pub const SENTENCES: &[SentenceTemplate] = &[
    SentenceTemplate {
        template: "The cat can ___.",
        words: &["the", "cat", "can", "jump"],
    },
    SentenceTemplate {
        template: "I like to ___ fast.",
        words: &["i", "like", "to", "run", "fast"],
    },
    SentenceTemplate {
        template: "We see a big ___ tree.",
        words: &["we", "see", "a", "big", "green", "tree"],
    },
    SentenceTemplate {
        template: "My dog likes to ___.",
        words: &["my", "dog", "likes", "to", "play"],
    },
    SentenceTemplate {
        template: "The sun is ___ today.",
        words: &["the", "sun", "is", "hot", "today"],
    },
    SentenceTemplate {
        template: "She can ___ a red kite.",
        words: &["she", "can", "fly", "a", "red", "kite"],
    },
];

pub const LETTER_SOUNDS: &[LetterSoundEntry] = &[
    LetterSoundEntry {
        letters: "a",
        sound: "short a",
        example: "apple",
    },
    LetterSoundEntry {
        letters: "b",
        sound: "buh",
        example: "ball",
    },
    LetterSoundEntry {
        letters: "c",
        sound: "kuh",
        example: "cat",
    },
    LetterSoundEntry {
        letters: "d",
        sound: "duh",
        example: "dog",
    },
    LetterSoundEntry {
        letters: "e",
        sound: "short e",
        example: "egg",
    },
    LetterSoundEntry {
        letters: "f",
        sound: "fff",
        example: "fish",
    },
    LetterSoundEntry {
        letters: "i",
        sound: "short i",
        example: "igloo",
    },
    LetterSoundEntry {
        letters: "m",
        sound: "mmm",
        example: "moon",
    },
    LetterSoundEntry {
        letters: "o",
        sound: "short o",
        example: "octopus",
    },
    LetterSoundEntry {
        letters: "s",
        sound: "sss",
        example: "sun",
    },
    LetterSoundEntry {
        letters: "u",
        sound: "short u",
        example: "umbrella",
    },
    LetterSoundEntry {
        letters: "sh",
        sound: "shh",
        example: "ship",
    },
    LetterSoundEntry {
        letters: "ch",
        sound: "chuh",
        example: "chair",
    },
    LetterSoundEntry {
        letters: "th",
        sound: "thuh",
        example: "three",
    },
    LetterSoundEntry {
        letters: "bl",
        sound: "bl blend",
        example: "blue",
    },
    LetterSoundEntry {
        letters: "st",
        sound: "st blend",
        example: "star",
    },
];

pub const LADDER_PUZZLES: &[LadderPuzzle] = &[
    LadderPuzzle {
        start: "cat",
        target: "dog",
    },
    LadderPuzzle {
        start: "cold",
        target: "warm",
    },
    LadderPuzzle {
        start: "bat",
        target: "bug",
    },
    LadderPuzzle {
        start: "hot",
        target: "pig",
    },
    LadderPuzzle {
        start: "sun",
        target: "fan",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_have_at_least_three_words() {
        for sentence in SENTENCES {
            assert!(sentence.words.len() >= 3, "{}", sentence.template);
            assert!(sentence.template.contains("___"));
        }
    }

    #[test]
    fn rhyme_sets_are_disjoint() {
        for set in RHYME_SETS {
            for word in set.rhymes {
                assert!(!set.non_rhymes.contains(word), "{} in both lists", word);
            }
        }
    }

    #[test]
    fn ladder_puzzles_have_matching_lengths() {
        for puzzle in LADDER_PUZZLES {
            assert_eq!(puzzle.start.len(), puzzle.target.len());
        }
    }
}
