//! Word ladder command
//!
//! Finds a ladder between two words and returns every rung.

use crate::core::WordEntry;
use crate::corpus::Dictionary;
use crate::puzzles::ladder::LadderValidator;
use rustc_hash::FxHashSet;

/// How the ladder is climbed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LadderStrategy {
    /// Breadth-first search for a shortest ladder
    #[default]
    Shortest,
    /// Follow the hint from each rung, the way a player would
    Hints,
}

/// Configuration for solving a ladder
pub struct LadderConfig {
    pub start: String,
    pub target: String,
    pub strategy: LadderStrategy,
    pub max_steps: usize,
}

impl LadderConfig {
    #[must_use]
    pub const fn new(start: String, target: String) -> Self {
        Self {
            start,
            target,
            strategy: LadderStrategy::Shortest,
            max_steps: 20,
        }
    }
}

/// Result of solving a ladder
pub struct LadderResult {
    pub success: bool,
    pub start: String,
    pub target: String,
    pub steps: Vec<LadderStep>,
}

/// A single rung
pub struct LadderStep {
    pub word: String,
    /// Letters still differing from the target
    pub distance: usize,
}

fn distance(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count()
}

fn hint_walk(validator: LadderValidator<'_>, start: &str, target: &str, max_steps: usize) -> Vec<String> {
    let mut words = vec![start.to_string()];
    let mut seen: FxHashSet<String> = words.iter().cloned().collect();

    while words.len() <= max_steps {
        let Some(current) = words.last() else { break };
        if current == target {
            break;
        }
        match validator.next_hint(current, target) {
            Some(next) if seen.insert(next.clone()) => words.push(next),
            _ => break,
        }
    }
    words
}

/// Solve a ladder from `config.start` to `config.target`
///
/// # Errors
///
/// Returns an error if:
/// - Either word is invalid
/// - The words differ in length
/// - The target is not in the dictionary
pub fn solve_ladder(config: LadderConfig, dictionary: &Dictionary) -> Result<LadderResult, String> {
    let start = WordEntry::new(&config.start).map_err(|e| format!("Invalid start word: {e}"))?;
    let target = WordEntry::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    if start.len() != target.len() {
        return Err(format!(
            "Words must be the same length ({} has {}, {} has {})",
            start.text(),
            start.len(),
            target.text(),
            target.len()
        ));
    }
    if !dictionary.contains(target.text()) {
        return Err(format!("'{}' is not in the word list", target.text()));
    }

    let validator = LadderValidator::new(dictionary);
    let words = match config.strategy {
        LadderStrategy::Shortest => validator
            .solve(start.text(), target.text())
            .filter(|words| words.len() <= config.max_steps + 1)
            .unwrap_or_else(|| vec![start.text().to_string()]),
        LadderStrategy::Hints => hint_walk(validator, start.text(), target.text(), config.max_steps),
    };

    let success = words.last().is_some_and(|w| w == target.text());
    let steps = words
        .into_iter()
        .map(|word| LadderStep {
            distance: distance(&word, target.text()),
            word,
        })
        .collect();

    Ok(LadderResult {
        success,
        start: start.into_string(),
        target: target.into_string(),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["cat", "cot", "cog", "dog", "dot", "bat"])
    }

    #[test]
    fn shortest_ladder_reaches_target() {
        let dictionary = dictionary();
        let config = LadderConfig::new("cat".to_string(), "dog".to_string());
        let result = solve_ladder(config, &dictionary).unwrap();

        assert!(result.success);
        assert_eq!(result.steps.len(), 4);
        assert_eq!(result.steps[0].word, "cat");
        assert_eq!(result.steps[0].distance, 3);
        assert_eq!(result.steps.last().unwrap().distance, 0);
    }

    #[test]
    fn rungs_close_in_on_target() {
        let dictionary = dictionary();
        let config = LadderConfig::new("cat".to_string(), "dog".to_string());
        let result = solve_ladder(config, &dictionary).unwrap();

        for pair in result.steps.windows(2) {
            assert_eq!(distance(&pair[0].word, &pair[1].word), 1);
            assert!(pair[1].distance < pair[0].distance);
        }
    }

    #[test]
    fn hint_strategy_follows_hints() {
        let dictionary = dictionary();
        let mut config = LadderConfig::new("cat".to_string(), "dog".to_string());
        config.strategy = LadderStrategy::Hints;
        let result = solve_ladder(config, &dictionary).unwrap();

        assert!(result.success);
        assert_eq!(result.steps[1].word, "cot");
    }

    #[test]
    fn step_limit_is_respected() {
        let dictionary = dictionary();
        let mut config = LadderConfig::new("cat".to_string(), "dog".to_string());
        config.max_steps = 2;
        let result = solve_ladder(config, &dictionary).unwrap();

        assert!(!result.success);
        assert_eq!(result.steps.len(), 1);

        let mut config = LadderConfig::new("cat".to_string(), "dog".to_string());
        config.strategy = LadderStrategy::Hints;
        config.max_steps = 2;
        let result = solve_ladder(config, &dictionary).unwrap();
        assert!(!result.success);
        assert!(result.steps.len() <= 3);
    }

    #[test]
    fn unreachable_target_is_not_an_error() {
        let dictionary = Dictionary::from_words(["cat", "dog"]);
        let config = LadderConfig::new("cat".to_string(), "dog".to_string());
        let result = solve_ladder(config, &dictionary).unwrap();
        assert!(!result.success);
    }

    #[test]
    fn invalid_ladders_return_error() {
        let dictionary = dictionary();
        assert!(solve_ladder(LadderConfig::new("cat".into(), "doge".into()), &dictionary).is_err());
        assert!(solve_ladder(LadderConfig::new("cat".into(), "zzz".into()), &dictionary).is_err());
        assert!(solve_ladder(LadderConfig::new("c4t".into(), "dog".into()), &dictionary).is_err());
    }
}
