//! Quick quiz rounds built from the seed tables
//!
//! Rhyme matching, letter-sound recognition and sentence building. Each
//! round is generated once and then judges answers without further
//! randomness.

use crate::wordlists::seeds::{LETTER_SOUNDS, LetterSoundEntry, RhymeSet, SentenceTemplate};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Options shown per rhyme round, split evenly between rhymes and others
pub const RHYME_CHOICES: usize = 4;

/// Options shown per letter-sound round
pub const LETTER_SOUND_CHOICES: usize = 4;

const SCRAMBLE_ATTEMPTS: usize = 10;

/// Pick the words that rhyme with the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhymeRound {
    pub target: &'static str,
    pub choices: Vec<&'static str>,
    rhymes: Vec<&'static str>,
}

impl RhymeRound {
    #[must_use]
    pub fn is_rhyme(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.rhymes.iter().any(|r| *r == word)
    }

    /// How many of the choices rhyme
    #[must_use]
    pub fn rhyme_count(&self) -> usize {
        self.choices.iter().filter(|c| self.is_rhyme(c)).count()
    }
}

pub fn rhyme_round<R: Rng + ?Sized>(set: &RhymeSet, rng: &mut R) -> RhymeRound {
    let half = RHYME_CHOICES / 2;
    let mut choices: Vec<&'static str> = set
        .rhymes
        .choose_multiple(rng, half)
        .chain(set.non_rhymes.choose_multiple(rng, half))
        .copied()
        .collect();
    choices.shuffle(rng);

    RhymeRound {
        target: set.target,
        choices,
        rhymes: set.rhymes.to_vec(),
    }
}

/// Hear a sound, pick its letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSoundRound {
    pub entry: LetterSoundEntry,
    pub choices: Vec<&'static str>,
}

impl LetterSoundRound {
    #[must_use]
    pub fn check(&self, letters: &str) -> bool {
        letters.trim().eq_ignore_ascii_case(self.entry.letters)
    }
}

/// Letter-sound round for `entry` with distractors from the seed table
pub fn letter_sound_round<R: Rng + ?Sized>(entry: LetterSoundEntry, rng: &mut R) -> LetterSoundRound {
    let others: Vec<&'static str> = LETTER_SOUNDS
        .iter()
        .map(|e| e.letters)
        .filter(|letters| *letters != entry.letters)
        .collect();

    let mut choices: Vec<&'static str> = others
        .choose_multiple(rng, LETTER_SOUND_CHOICES - 1)
        .copied()
        .collect();
    choices.push(entry.letters);
    choices.shuffle(rng);

    LetterSoundRound { entry, choices }
}

/// Put the scrambled words back in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRound {
    pub template: &'static str,
    pub scrambled: Vec<&'static str>,
    answer: &'static [&'static str],
}

impl SentenceRound {
    #[must_use]
    pub fn check<S: AsRef<str>>(&self, attempt: &[S]) -> bool {
        attempt.len() == self.answer.len()
            && attempt
                .iter()
                .zip(self.answer)
                .all(|(a, b)| a.as_ref().trim().eq_ignore_ascii_case(b))
    }

    /// The sentence as it should read
    #[must_use]
    pub fn answer(&self) -> String {
        self.answer.join(" ")
    }
}

/// Scramble the template's words, avoiding the original order when the
/// words allow it
pub fn sentence_round<R: Rng + ?Sized>(template: &SentenceTemplate, rng: &mut R) -> SentenceRound {
    let mut scrambled = template.words.to_vec();
    for _ in 0..SCRAMBLE_ATTEMPTS {
        scrambled.shuffle(rng);
        if scrambled != template.words {
            break;
        }
    }

    SentenceRound {
        template: template.template,
        scrambled,
        answer: template.words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::seeds::{RHYME_SETS, SENTENCES};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rhyme_round_mixes_rhymes_and_others() {
        let mut rng = StdRng::seed_from_u64(3);
        for set in RHYME_SETS {
            let round = rhyme_round(set, &mut rng);
            assert_eq!(round.target, set.target);
            assert_eq!(round.choices.len(), RHYME_CHOICES);
            assert_eq!(round.rhyme_count(), RHYME_CHOICES / 2);
        }
    }

    #[test]
    fn rhyme_check_ignores_case() {
        let mut rng = StdRng::seed_from_u64(0);
        let round = rhyme_round(&RHYME_SETS[0], &mut rng);
        assert!(round.is_rhyme(" HAT "));
        assert!(!round.is_rhyme("dog"));
    }

    #[test]
    fn letter_sound_round_contains_answer_once() {
        let mut rng = StdRng::seed_from_u64(7);
        for entry in LETTER_SOUNDS {
            let round = letter_sound_round(*entry, &mut rng);
            assert_eq!(round.choices.len(), LETTER_SOUND_CHOICES);
            assert_eq!(
                round.choices.iter().filter(|c| **c == entry.letters).count(),
                1
            );
            assert!(round.check(&entry.letters.to_uppercase()));
        }
    }

    #[test]
    fn sentence_round_scrambles_and_checks() {
        let mut rng = StdRng::seed_from_u64(12);
        for template in SENTENCES {
            let round = sentence_round(template, &mut rng);
            assert_ne!(round.scrambled, template.words);

            let mut sorted = round.scrambled.clone();
            sorted.sort_unstable();
            let mut expected = template.words.to_vec();
            expected.sort_unstable();
            assert_eq!(sorted, expected);

            assert!(round.check(template.words));
            assert!(!round.check(&round.scrambled));
            assert!(!round.check(&template.words[1..]));
        }
    }

    #[test]
    fn sentence_answer_reads_in_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let round = sentence_round(&SENTENCES[0], &mut rng);
        assert_eq!(round.answer(), "the cat can jump");
    }
}
