//! Heuristic syllable splitting
//!
//! A vowel/consonant scan, not a pronunciation dictionary. Good enough to
//! clap out a word with a beginning reader.

/// Letters treated as vowels when splitting (includes `y`)
const VOWELS: &[u8] = b"aeiouy";

#[inline]
fn is_vowel(b: u8) -> bool {
    VOWELS.contains(&b.to_ascii_lowercase())
}

/// Split a word into syllable-like chunks
///
/// Concatenating the result always reproduces the input. Words of three
/// characters or fewer come back whole.
///
/// # Examples
/// ```
/// use word_games::phonics::split_into_syllables;
///
/// let parts = split_into_syllables("elephant");
/// assert_eq!(parts.concat(), "elephant");
/// assert!(parts.len() >= 2);
///
/// assert_eq!(split_into_syllables("cat"), vec!["cat"]);
/// ```
#[must_use]
pub fn split_into_syllables(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();

    if n <= 3 {
        return vec![word.to_string()];
    }

    let mut syllables = Vec::new();
    let mut current = String::new();
    let mut vowel_found = false;

    for (i, &c) in chars.iter().enumerate() {
        current.push(c);
        if c.is_ascii() && is_vowel(c as u8) {
            vowel_found = true;
        }

        // Close after a vowel when a consonant follows and two or more
        // characters remain after that consonant.
        let next_is_consonant = chars
            .get(i + 1)
            .is_some_and(|&next| next.is_ascii_alphabetic() && !is_vowel(next as u8));
        if vowel_found && next_is_consonant && n >= i + 4 {
            syllables.push(std::mem::take(&mut current));
            vowel_found = false;
        }
    }

    if !current.is_empty() {
        syllables.push(current);
    }

    syllables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_stay_whole() {
        assert_eq!(split_into_syllables(""), vec![""]);
        assert_eq!(split_into_syllables("a"), vec!["a"]);
        assert_eq!(split_into_syllables("dog"), vec!["dog"]);
    }

    #[test]
    fn elephant_splits() {
        assert_eq!(split_into_syllables("elephant"), vec!["e", "le", "phant"]);
    }

    #[test]
    fn basket_splits_after_first_vowel() {
        assert_eq!(split_into_syllables("basket"), vec!["ba", "sket"]);
    }

    #[test]
    fn no_split_when_too_few_letters_remain() {
        assert_eq!(split_into_syllables("cake"), vec!["cake"]);
        assert_eq!(split_into_syllables("tree"), vec!["tree"]);
    }

    #[test]
    fn y_counts_as_vowel() {
        assert_eq!(split_into_syllables("cymbal"), vec!["cy", "mbal"]);
    }

    #[test]
    fn concatenation_round_trips() {
        for word in [
            "elephant",
            "butterfly",
            "together",
            "umbrella",
            "strength",
            "aaaaaa",
            "rhythm",
            "alligator",
            "Dinosaur",
        ] {
            assert_eq!(split_into_syllables(word).concat(), word, "{word}");
        }
    }
}
