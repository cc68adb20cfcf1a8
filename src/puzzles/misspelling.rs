//! Misspelling generation
//!
//! Produces a plausible wrong spelling of a word that is guaranteed not to be
//! a dictionary word. Small edits are tried first; each stage that keeps
//! landing on real words escalates to a rougher one, and a final fixed edit
//! always succeeds.

use crate::core::MAX_WORD_LEN;
use crate::corpus::{CorpusError, CorpusRepository, Dictionary, WordCorpus};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Default tries for each escalation stage
pub const DEFAULT_ATTEMPTS_PER_STAGE: usize = 5;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Letter pairs that almost never occur in English
const UNCOMMON_PAIRS: [&str; 6] = ["qx", "zx", "jq", "vq", "xj", "qz"];

const ODD_VOWEL_SWAPS: [&str; 3] = ["ae", "uo", "y"];
const ODD_CONSONANT_SWAPS: [&str; 3] = ["x", "zh", "kw"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MisspellingConfig {
    /// Tries per stage before escalating
    pub attempts_per_stage: usize,
}

impl MisspellingConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempts_per_stage: DEFAULT_ATTEMPTS_PER_STAGE,
        }
    }
}

impl Default for MisspellingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-edit perturbations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Swap two neighboring letters
    Transpose,
    /// Double one letter
    Duplicate,
    /// Drop one letter
    Delete,
    /// Replace a vowel with another vowel
    VowelSwap,
}

impl Edit {
    pub const ALL: [Self; 4] = [Self::Transpose, Self::Duplicate, Self::Delete, Self::VowelSwap];

    fn applies_to(self, letters: &[char]) -> bool {
        match self {
            Self::Transpose | Self::Delete => letters.len() >= 2,
            Self::Duplicate => !letters.is_empty(),
            Self::VowelSwap => letters.iter().any(|c| VOWELS.contains(c)),
        }
    }

    fn apply<R: Rng + ?Sized>(self, letters: &[char], rng: &mut R) -> Option<Vec<char>> {
        if !self.applies_to(letters) {
            return None;
        }

        let mut out = letters.to_vec();
        match self {
            Self::Transpose => {
                let i = rng.random_range(0..letters.len() - 1);
                out.swap(i, i + 1);
            }
            Self::Duplicate => {
                let i = rng.random_range(0..letters.len());
                out.insert(i, letters[i]);
            }
            Self::Delete => {
                out.remove(rng.random_range(0..letters.len()));
            }
            Self::VowelSwap => {
                let positions: Vec<usize> = (0..letters.len())
                    .filter(|&i| VOWELS.contains(&letters[i]))
                    .collect();
                let &i = positions.choose(rng)?;
                let others: Vec<char> = VOWELS.into_iter().filter(|&v| v != letters[i]).collect();
                out[i] = *others.choose(rng)?;
            }
        }
        Some(out)
    }
}

/// Which stage produced a misspelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Simple(Edit),
    Substitution,
    Aggressive,
    /// The fixed "qq" insertion
    Fallback,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(Edit::Transpose) => f.write_str("transpose"),
            Self::Simple(Edit::Duplicate) => f.write_str("duplicate"),
            Self::Simple(Edit::Delete) => f.write_str("delete"),
            Self::Simple(Edit::VowelSwap) => f.write_str("vowel swap"),
            Self::Substitution => f.write_str("substitution"),
            Self::Aggressive => f.write_str("aggressive"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// A correct word and its generated misspelling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    pub correct: String,
    pub incorrect: String,
    pub stage: Stage,
}

/// Replace up to three distinct positions with different random letters
fn substitute_three<R: Rng + ?Sized>(letters: &[char], rng: &mut R) -> Vec<char> {
    let mut out = letters.to_vec();
    let mut positions: Vec<usize> = (0..letters.len()).collect();
    positions.shuffle(rng);

    for &i in positions.iter().take(3) {
        let original = out[i];
        let mut replacement = original;
        while replacement == original {
            replacement = char::from(b'a' + rng.random_range(0..26u8));
        }
        out[i] = replacement;
    }
    out
}

/// Transpose, swap one letter for an odd spelling, then insert a rare pair
fn aggressive<R: Rng + ?Sized>(letters: &[char], rng: &mut R) -> Vec<char> {
    let mut out = Edit::Transpose
        .apply(letters, rng)
        .unwrap_or_else(|| letters.to_vec());

    if !out.is_empty() {
        let i = rng.random_range(0..out.len());
        let table = if VOWELS.contains(&out[i]) {
            &ODD_VOWEL_SWAPS
        } else {
            &ODD_CONSONANT_SWAPS
        };
        if let Some(swap) = table.choose(rng) {
            out = splice(&out, i, i + 1, swap);
        }
    }

    if let Some(pair) = UNCOMMON_PAIRS.choose(rng) {
        let at = rng.random_range(0..=out.len());
        out = splice(&out, at, at, pair);
    }
    out
}

/// `letters` with `from..to` replaced by `with`
fn splice(letters: &[char], from: usize, to: usize, with: &str) -> Vec<char> {
    let with: Vec<char> = with.chars().collect();
    [&letters[..from], &with[..], &letters[to..]].concat()
}

/// Generates misspellings checked against a dictionary
#[derive(Debug, Clone, Copy)]
pub struct MisspellingGenerator<'a> {
    dictionary: &'a Dictionary,
    config: MisspellingConfig,
}

impl<'a> MisspellingGenerator<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, config: MisspellingConfig) -> Self {
        Self { dictionary, config }
    }

    fn accept(&self, correct: &str, candidate: Vec<char>) -> Option<String> {
        let candidate: String = candidate.into_iter().collect();
        (!candidate.is_empty() && candidate != correct && !self.dictionary.contains(&candidate))
            .then_some(candidate)
    }

    /// Insert "qq" at the midpoint, or append it to short words, adding
    /// more q's while the result is still in the dictionary
    fn fallback(&self, letters: &[char]) -> String {
        let at = if letters.len() <= 3 {
            letters.len()
        } else {
            letters.len() / 2
        };
        let mut filler = String::from("qq");
        loop {
            let candidate: String = splice(letters, at, at, &filler).into_iter().collect();
            if !self.dictionary.contains(&candidate) {
                return candidate;
            }
            filler.push('q');
        }
    }

    /// Misspell `word`
    ///
    /// One edit kind is picked at random and retried for a stage; then up to
    /// three letters are substituted; then the aggressive compound edit runs.
    /// If every attempt still spells a real word, "qq" is inserted (or more
    /// q's when that too is listed).
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_games::corpus::Dictionary;
    /// use word_games::puzzles::misspelling::{MisspellingConfig, MisspellingGenerator};
    ///
    /// let dictionary = Dictionary::embedded();
    /// let generator = MisspellingGenerator::new(&dictionary, MisspellingConfig::default());
    /// let result = generator.generate("because", &mut StdRng::seed_from_u64(3));
    /// assert_ne!(result.incorrect, "because");
    /// assert!(!dictionary.contains(&result.incorrect));
    /// ```
    pub fn generate<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> Misspelling {
        let correct = word.trim().to_lowercase();
        let letters: Vec<char> = correct.chars().collect();
        let attempts = self.config.attempts_per_stage;

        let found = |incorrect: String, stage: Stage| Misspelling {
            correct: correct.clone(),
            incorrect,
            stage,
        };

        let usable: Vec<Edit> = Edit::ALL
            .into_iter()
            .filter(|e| e.applies_to(&letters))
            .collect();
        if let Some(&edit) = usable.choose(rng) {
            for _ in 0..attempts {
                let candidate = edit.apply(&letters, rng);
                if let Some(incorrect) = candidate.and_then(|c| self.accept(&correct, c)) {
                    return found(incorrect, Stage::Simple(edit));
                }
            }
        }

        if !letters.is_empty() {
            for _ in 0..attempts {
                if let Some(incorrect) = self.accept(&correct, substitute_three(&letters, rng)) {
                    return found(incorrect, Stage::Substitution);
                }
            }
        }

        for _ in 0..attempts {
            if let Some(incorrect) = self.accept(&correct, aggressive(&letters, rng)) {
                return found(incorrect, Stage::Aggressive);
            }
        }

        tracing::debug!(word = %correct, "misspelling fell back to fixed insertion");
        found(self.fallback(&letters), Stage::Fallback)
    }
}

/// Word-length band for the spelling game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub const fn lengths(self) -> RangeInclusive<usize> {
        match self {
            Self::Easy => 3..=4,
            Self::Medium => 5..=6,
            Self::Hard => 7..=MAX_WORD_LEN,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown difficulty '{s}' (expected easy, medium or hard)"))
    }
}

/// One option shown to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingChoice {
    pub word: String,
    pub correct: bool,
}

/// A correct word and its misspelling, in random order
///
/// The word comes from the corpus dictionary within the difficulty's
/// length band.
///
/// # Errors
/// Returns `CorpusError::InsufficientWords` when the band is empty.
pub fn generate_misspelled_words<Repo, R>(
    corpus: &WordCorpus<Repo>,
    difficulty: Difficulty,
    config: MisspellingConfig,
    rng: &mut R,
) -> Result<[SpellingChoice; 2], CorpusError>
where
    Repo: CorpusRepository,
    R: Rng + ?Sized,
{
    let dictionary = corpus.dictionary();
    let pool: Vec<&str> = dictionary.with_lengths(difficulty.lengths()).collect();
    let word = pool.choose(rng).ok_or(CorpusError::InsufficientWords {
        requested: 1,
        available: 0,
    })?;

    let misspelling = MisspellingGenerator::new(dictionary, config).generate(word, rng);
    let mut choices = [
        SpellingChoice {
            word: misspelling.correct,
            correct: true,
        },
        SpellingChoice {
            word: misspelling.incorrect,
            correct: false,
        },
    ];
    choices.shuffle(rng);
    Ok(choices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::MemoryRepository;
    use crate::wordlists::Category;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn category_words_never_collide() {
        let dictionary = Dictionary::embedded();
        let generator = MisspellingGenerator::new(&dictionary, MisspellingConfig::default());
        let words: Vec<&str> = Category::ALL
            .into_iter()
            .flat_map(|c| c.words().iter().copied())
            .collect();
        let mut rng = StdRng::seed_from_u64(2024);

        for i in 0..1000 {
            let word = words[i % words.len()];
            let result = generator.generate(word, &mut rng);
            assert_eq!(result.correct, word);
            assert_ne!(result.incorrect, word);
            assert!(
                !dictionary.contains(&result.incorrect),
                "{word} -> {} is a real word",
                result.incorrect
            );
        }
    }

    #[test]
    fn zero_attempts_forces_fallback() {
        let dictionary = Dictionary::embedded();
        let config = MisspellingConfig {
            attempts_per_stage: 0,
        };
        let generator = MisspellingGenerator::new(&dictionary, config);
        let mut rng = StdRng::seed_from_u64(1);

        let long = generator.generate("elephant", &mut rng);
        assert_eq!(long.incorrect, "elepqqhant");
        assert_eq!(long.stage, Stage::Fallback);

        let short = generator.generate("cat", &mut rng);
        assert_eq!(short.incorrect, "catqq");
    }

    #[test]
    fn fallback_grows_past_listed_words() {
        let dictionary =
            Dictionary::from_words(["cat", "catqq", "catqqq", "elephant", "elepqqhant"]);
        let config = MisspellingConfig {
            attempts_per_stage: 0,
        };
        let generator = MisspellingGenerator::new(&dictionary, config);
        let mut rng = StdRng::seed_from_u64(1);

        let short = generator.generate("cat", &mut rng);
        assert_eq!(short.incorrect, "catqqqq");
        assert_eq!(short.stage, Stage::Fallback);

        let long = generator.generate("elephant", &mut rng);
        assert_eq!(long.incorrect, "elepqqqhant");
        assert!(!dictionary.contains(&long.incorrect));
    }

    #[test]
    fn escalates_when_every_small_edit_is_a_word() {
        // "ab" can only become "ba", "aab", "abb", "a", "b", "eb", ... all listed
        let words = ["ab", "ba", "aab", "abb", "a", "b", "eb", "ib", "ob", "ub"];
        let dictionary = Dictionary::from_words(words);
        let generator = MisspellingGenerator::new(&dictionary, MisspellingConfig::default());
        for seed in 0..20 {
            let result = generator.generate("ab", &mut StdRng::seed_from_u64(seed));
            assert!(!matches!(result.stage, Stage::Simple(_)));
            assert!(!dictionary.contains(&result.incorrect));
        }
    }

    #[test]
    fn single_edits_change_the_word() {
        let letters: Vec<char> = "table".chars().collect();
        let mut rng = StdRng::seed_from_u64(8);

        let deleted = Edit::Delete.apply(&letters, &mut rng).unwrap();
        assert_eq!(deleted.len(), 4);

        let doubled = Edit::Duplicate.apply(&letters, &mut rng).unwrap();
        assert_eq!(doubled.len(), 6);

        let swapped = Edit::VowelSwap.apply(&letters, &mut rng).unwrap();
        assert_eq!(swapped.len(), 5);
        assert_ne!(swapped, letters);

        assert!(Edit::Transpose.apply(&['a'], &mut rng).is_none());
        assert!(Edit::VowelSwap.apply(&['b', 'c'], &mut rng).is_none());
    }

    #[test]
    fn spelling_pair_has_one_correct_choice() {
        let corpus = WordCorpus::open(MemoryRepository::new());
        for difficulty in Difficulty::ALL {
            let mut rng = StdRng::seed_from_u64(11);
            let choices =
                generate_misspelled_words(&corpus, difficulty, MisspellingConfig::default(), &mut rng)
                    .unwrap();
            assert_eq!(choices.iter().filter(|c| c.correct).count(), 1);

            let correct = choices.iter().find(|c| c.correct).unwrap();
            assert!(difficulty.lengths().contains(&correct.word.len()));
            assert!(corpus.dictionary().contains(&correct.word));

            let wrong = choices.iter().find(|c| !c.correct).unwrap();
            assert!(!corpus.dictionary().contains(&wrong.word));
        }
    }

    #[test]
    fn difficulty_parses_names() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
    }
}
