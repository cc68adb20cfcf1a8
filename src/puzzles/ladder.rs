//! Word ladder validation, hints and sessions
//!
//! A ladder turns one word into another by changing a single letter per
//! step, and every step has to be a real word.

use crate::corpus::Dictionary;
use crate::wordlists::seeds::LadderPuzzle;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::fmt;

/// Why a ladder step was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderRejection {
    NotAWord(String),
    LengthMismatch { expected: usize, found: usize },
    NotOneLetterApart,
}

impl fmt::Display for LadderRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAWord(word) => write!(f, "'{word}' is not a word I know"),
            Self::LengthMismatch { expected, found } => {
                write!(f, "Expected {expected} letters, got {found}")
            }
            Self::NotOneLetterApart => write!(f, "Change exactly one letter"),
        }
    }
}

impl std::error::Error for LadderRejection {}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Number of positions where two equal-length words differ
fn differences(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count()
}

/// Judges ladder steps against a dictionary
#[derive(Debug, Clone, Copy)]
pub struct LadderValidator<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> LadderValidator<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Check `candidate` as the step after `previous`
    ///
    /// # Errors
    /// Returns the first rule the candidate breaks: wrong length, not
    /// exactly one letter different, or not in the dictionary.
    pub fn check(&self, candidate: &str, previous: &str) -> Result<(), LadderRejection> {
        let candidate = normalize(candidate);
        let previous = normalize(previous);

        if candidate.len() != previous.len() {
            return Err(LadderRejection::LengthMismatch {
                expected: previous.len(),
                found: candidate.len(),
            });
        }
        if differences(&candidate, &previous) != 1 {
            return Err(LadderRejection::NotOneLetterApart);
        }
        if !self.dictionary.contains(&candidate) {
            return Err(LadderRejection::NotAWord(candidate));
        }
        Ok(())
    }

    /// # Examples
    /// ```
    /// use word_games::corpus::Dictionary;
    /// use word_games::puzzles::ladder::LadderValidator;
    ///
    /// let dictionary = Dictionary::embedded();
    /// let validator = LadderValidator::new(&dictionary);
    /// assert!(validator.is_valid("cot", "cat"));
    /// assert!(!validator.is_valid("cats", "cat"));
    /// ```
    #[must_use]
    pub fn is_valid(&self, candidate: &str, previous: &str) -> bool {
        self.check(candidate, previous).is_ok()
    }

    /// Suggest a next step from `current` toward `target`
    ///
    /// Tries copying one of the target's letters into `current`, left to
    /// right. Failing that, returns the alphabetically first dictionary word
    /// one letter away from `current`, which may not move closer to the
    /// target. `None` when already at the target or stuck.
    #[must_use]
    pub fn next_hint(&self, current: &str, target: &str) -> Option<String> {
        let current = normalize(current);
        let target = normalize(target);
        if current == target {
            return None;
        }

        let direct = current
            .bytes()
            .zip(target.bytes())
            .enumerate()
            .filter(|(_, (c, t))| c != t)
            .find_map(|(i, (_, t))| {
                let mut bytes = current.clone().into_bytes();
                bytes[i] = t;
                let candidate = String::from_utf8(bytes).ok()?;
                self.is_valid(&candidate, &current).then_some(candidate)
            });

        direct.or_else(|| {
            self.dictionary
                .iter()
                .find(|word| self.is_valid(word, &current))
                .map(str::to_string)
        })
    }

    /// Shortest ladder from `start` to `target`, both ends included
    ///
    /// Breadth-first over dictionary words of the same length.
    #[must_use]
    pub fn solve(&self, start: &str, target: &str) -> Option<Vec<String>> {
        let start = normalize(start);
        let target = normalize(target);
        if start.len() != target.len() || !self.dictionary.contains(&target) {
            return None;
        }

        let len = start.len();
        let pool: Vec<&str> = self.dictionary.with_lengths(len..=len).collect();
        let mut parent: FxHashMap<String, String> = FxHashMap::default();
        let mut queue = VecDeque::from([start.clone()]);
        parent.insert(start.clone(), String::new());

        while let Some(word) = queue.pop_front() {
            if word == target {
                let mut ladder = vec![word];
                while let Some(prev) = ladder.last().and_then(|w| parent.get(w)) {
                    if prev.is_empty() {
                        break;
                    }
                    ladder.push(prev.clone());
                }
                ladder.reverse();
                return Some(ladder);
            }

            for next in &pool {
                if !parent.contains_key(*next) && differences(next, &word) == 1 {
                    parent.insert((*next).to_string(), word.clone());
                    queue.push_back((*next).to_string());
                }
            }
        }

        None
    }
}

/// One ladder being played
#[derive(Debug, Clone)]
pub struct LadderGame<'a> {
    validator: LadderValidator<'a>,
    target: String,
    steps: Vec<String>,
}

impl<'a> LadderGame<'a> {
    /// # Errors
    /// Returns `LengthMismatch` when the two ends differ in length.
    pub fn new(
        validator: LadderValidator<'a>,
        start: &str,
        target: &str,
    ) -> Result<Self, LadderRejection> {
        let start = normalize(start);
        let target = normalize(target);
        if start.len() != target.len() {
            return Err(LadderRejection::LengthMismatch {
                expected: start.len(),
                found: target.len(),
            });
        }

        Ok(Self {
            validator,
            target,
            steps: vec![start],
        })
    }

    /// # Errors
    /// Returns `LengthMismatch` for a malformed seed.
    pub fn from_puzzle(
        validator: LadderValidator<'a>,
        puzzle: &LadderPuzzle,
    ) -> Result<Self, LadderRejection> {
        Self::new(validator, puzzle.start, puzzle.target)
    }

    /// Words so far, starting word first
    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    #[must_use]
    pub fn current(&self) -> &str {
        self.steps.last().map_or("", String::as_str)
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.current() == self.target
    }

    /// Add the next step; the ladder is unchanged on rejection
    ///
    /// # Errors
    /// Returns the `LadderRejection` from the validator.
    pub fn submit(&mut self, word: &str) -> Result<(), LadderRejection> {
        self.validator.check(word, self.current())?;
        self.steps.push(normalize(word));
        Ok(())
    }

    #[must_use]
    pub fn hint(&self) -> Option<String> {
        self.validator.next_hint(self.current(), &self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::seeds::LADDER_PUZZLES;

    fn dictionary() -> Dictionary {
        Dictionary::embedded()
    }

    #[test]
    fn validity_examples() {
        let dictionary = dictionary();
        let validator = LadderValidator::new(&dictionary);

        assert!(validator.is_valid("cot", "cat"));
        assert!(!validator.is_valid("dog", "cat"));
        assert!(validator.is_valid("bat", "cat"));
        assert!(!validator.is_valid("cats", "cat"));
    }

    #[test]
    fn rejection_reasons() {
        let dictionary = dictionary();
        let validator = LadderValidator::new(&dictionary);

        assert_eq!(
            validator.check("cxt", "cat"),
            Err(LadderRejection::NotAWord("cxt".to_string()))
        );
        assert_eq!(
            validator.check("cats", "cat"),
            Err(LadderRejection::LengthMismatch {
                expected: 3,
                found: 4
            })
        );
        assert_eq!(
            validator.check("dog", "cat"),
            Err(LadderRejection::NotOneLetterApart)
        );
        assert_eq!(
            validator.check("cat", "cat"),
            Err(LadderRejection::NotOneLetterApart)
        );
        assert_eq!(validator.check(" COT ", "cat"), Ok(()));
    }

    #[test]
    fn shape_is_judged_before_spelling() {
        let dictionary = Dictionary::from_words(["cat", "cot"]);
        let validator = LadderValidator::new(&dictionary);

        // Neither is a word, but the length is the first thing wrong
        assert_eq!(
            validator.check("cats", "cat"),
            Err(LadderRejection::LengthMismatch {
                expected: 3,
                found: 4
            })
        );
        assert_eq!(
            validator.check("cta", "cat"),
            Err(LadderRejection::NotOneLetterApart)
        );
        assert_eq!(
            validator.check("cut", "cat"),
            Err(LadderRejection::NotAWord("cut".to_string()))
        );
    }

    #[test]
    fn hint_substitutes_left_to_right() {
        let dictionary = dictionary();
        let validator = LadderValidator::new(&dictionary);
        // "dat" is not a word, so the first usable swap is the vowel
        assert_eq!(validator.next_hint("cat", "dog").as_deref(), Some("cot"));
        assert_eq!(validator.next_hint("cog", "dog").as_deref(), Some("dog"));
        assert_eq!(validator.next_hint("dog", "dog"), None);
    }

    #[test]
    fn hint_falls_back_to_dictionary_scan() {
        let dictionary = Dictionary::from_words(["abc", "abd", "xyz"]);
        let validator = LadderValidator::new(&dictionary);
        // No direct swap from abc toward xyz is a word
        assert_eq!(validator.next_hint("abc", "xyz").as_deref(), Some("abd"));

        let dictionary = Dictionary::from_words(["abc", "xyz"]);
        let validator = LadderValidator::new(&dictionary);
        assert_eq!(validator.next_hint("abc", "xyz"), None);
    }

    #[test]
    fn solve_finds_shortest_ladder() {
        let dictionary = Dictionary::from_words(["cat", "cot", "cog", "dog", "hat", "hot"]);
        let validator = LadderValidator::new(&dictionary);
        let ladder = validator.solve("cat", "dog").unwrap();
        assert_eq!(ladder, vec!["cat", "cot", "cog", "dog"]);
        assert!(validator.solve("cat", "doge").is_none());
    }

    #[test]
    fn built_in_puzzles_are_solvable() {
        let dictionary = dictionary();
        let validator = LadderValidator::new(&dictionary);
        for puzzle in LADDER_PUZZLES {
            let ladder = validator
                .solve(puzzle.start, puzzle.target)
                .unwrap_or_else(|| panic!("{} -> {}", puzzle.start, puzzle.target));
            assert_eq!(ladder.first().map(String::as_str), Some(puzzle.start));
            assert_eq!(ladder.last().map(String::as_str), Some(puzzle.target));
            for pair in ladder.windows(2) {
                assert!(validator.is_valid(&pair[1], &pair[0]));
            }
        }
    }

    #[test]
    fn game_accepts_valid_steps_only() {
        let dictionary = dictionary();
        let validator = LadderValidator::new(&dictionary);
        let mut game = LadderGame::new(validator, "cat", "dog").unwrap();

        assert!(game.submit("dig").is_err());
        assert_eq!(game.steps(), ["cat".to_string()]);

        for word in ["cot", "cog", "dog"] {
            assert!(!game.is_solved());
            game.submit(word).unwrap();
        }
        assert!(game.is_solved());
        assert_eq!(game.steps().len(), 4);
        assert_eq!(game.hint(), None);
    }

    #[test]
    fn game_hint_follows_current_word() {
        let dictionary = dictionary();
        let validator = LadderValidator::new(&dictionary);
        let mut game = LadderGame::from_puzzle(validator, &LADDER_PUZZLES[0]).unwrap();
        assert_eq!(game.hint().as_deref(), Some("cot"));
        game.submit("cot").unwrap();
        assert_eq!(game.current(), "cot");
        assert!(game.hint().is_some());
    }

    #[test]
    fn game_rejects_mismatched_ends() {
        let dictionary = dictionary();
        let validator = LadderValidator::new(&dictionary);
        assert!(matches!(
            LadderGame::new(validator, "cat", "bird"),
            Err(LadderRejection::LengthMismatch { .. })
        ));
    }
}
