//! Phonics and pronunciation rule matching
//!
//! Two related tables: `phonics_rules` names the spelling patterns a word
//! contains, `pronunciation_rules` gives reading tips for the same word.
//! Both match by substring, so a word may trigger several rules.

const VOWELS: &[u8] = b"aeiou";

/// Consonant blends checked in order
pub const BLENDS: [&str; 24] = [
    "bl", "br", "cl", "cr", "dr", "fl", "fr", "gl", "gr", "pl", "pr", "sc", "sk", "sl", "sm",
    "sn", "sp", "st", "sw", "tr", "tw", "scr", "spl", "str",
];

/// Consonant digraphs with the sound each makes
pub const DIGRAPHS: [(&str, &str); 6] = [
    ("th", "sounds like the start of 'think'"),
    ("sh", "sounds like the start of 'ship'"),
    ("ch", "sounds like the start of 'chair'"),
    ("ph", "sounds like 'f'"),
    ("wh", "sounds like the 'w' in 'whale'"),
    ("ck", "sounds like 'k'"),
];

const R_CONTROLLED: [&str; 5] = ["ar", "er", "ir", "or", "ur"];

const FLOSS_ENDINGS: [&str; 4] = ["ff", "ll", "ss", "zz"];

#[inline]
fn is_vowel(b: u8) -> bool {
    VOWELS.contains(&b)
}

/// Consonant-vowel-consonant-e ending, as in "cake" or "bike"
fn has_silent_e(word: &[u8]) -> bool {
    match word {
        [.., v, c, b'e'] => is_vowel(*v) && c.is_ascii_alphabetic() && !is_vowel(*c),
        _ => false,
    }
}

/// First pair of adjacent vowels, if any
fn vowel_pair(word: &[u8]) -> Option<&str> {
    word.windows(2)
        .find(|pair| is_vowel(pair[0]) && is_vowel(pair[1]))
        .and_then(|pair| std::str::from_utf8(pair).ok())
}

/// Spelling patterns present in `word`
///
/// Order: silent e, adjacent vowels, each blend, each digraph.
///
/// # Examples
/// ```
/// use word_games::phonics::phonics_rules;
///
/// let rules = phonics_rules("street");
/// assert!(rules.contains(&"Vowel pair: ee".to_string()));
/// assert!(rules.contains(&"Blend: st".to_string()));
/// assert!(rules.contains(&"Blend: str".to_string()));
/// ```
#[must_use]
pub fn phonics_rules(word: &str) -> Vec<String> {
    let word = word.trim().to_lowercase();
    let bytes = word.as_bytes();
    let mut rules = Vec::new();

    if has_silent_e(bytes) {
        rules.push("Silent E: the final 'e' makes the vowel say its name".to_string());
    }

    if let Some(pair) = vowel_pair(bytes) {
        rules.push(format!("Vowel pair: {pair}"));
    }

    for blend in BLENDS {
        if word.contains(blend) {
            rules.push(format!("Blend: {blend}"));
        }
    }

    for (digraph, _) in DIGRAPHS {
        if word.contains(digraph) {
            rules.push(format!("Digraph: {digraph}"));
        }
    }

    rules
}

/// Reading tips for `word`
///
/// Order: silent e, vowel team, bossy r, digraph sounds, floss ending.
#[must_use]
pub fn pronunciation_rules(word: &str) -> Vec<String> {
    let word = word.trim().to_lowercase();
    let bytes = word.as_bytes();
    let mut rules = Vec::new();

    if has_silent_e(bytes) {
        rules.push("The 'e' at the end is silent and makes the vowel say its name".to_string());
    }

    if let Some(pair) = vowel_pair(bytes) {
        rules.push(format!(
            "'{pair}': when two vowels go walking, the first one does the talking"
        ));
    }

    for pattern in R_CONTROLLED {
        if word.contains(pattern) {
            rules.push(format!("Bossy R: '{pattern}' changes the vowel sound"));
        }
    }

    for (digraph, sound) in DIGRAPHS {
        if word.contains(digraph) {
            rules.push(format!("'{digraph}' {sound}"));
        }
    }

    if FLOSS_ENDINGS.iter().any(|ending| word.ends_with(ending)) && word.len() > 2 {
        rules.push("Double letters at the end make one sound".to_string());
    }

    rules
}
