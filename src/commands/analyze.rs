//! Word analysis command
//!
//! Breaks a word into syllables and lists the phonics patterns and reading
//! tips that apply to it.

use crate::core::WordEntry;
use crate::corpus::{DefinitionEntry, DefinitionSource, Dictionary, lookup_for_child};
use crate::phonics::{phonics_rules, pronunciation_rules, split_into_syllables};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub syllables: Vec<String>,
    pub phonics: Vec<String>,
    pub pronunciation: Vec<String>,
    pub known_word: bool,
    pub definition: Option<DefinitionEntry>,
}

/// Analyze a single word
///
/// The definition is looked up only when a source is given, and only
/// child-appropriate senses are kept.
///
/// # Errors
///
/// Returns an error if the word is empty, too long or not alphabetic.
pub fn analyze_word(
    word: &str,
    dictionary: &Dictionary,
    definitions: Option<&dyn DefinitionSource>,
) -> Result<AnalysisResult, String> {
    let entry = WordEntry::new(word).map_err(|e| format!("Invalid word: {e}"))?;
    let text = entry.text();

    Ok(AnalysisResult {
        word: text.to_string(),
        syllables: split_into_syllables(text),
        phonics: phonics_rules(text),
        pronunciation: pronunciation_rules(text),
        known_word: dictionary.contains(text),
        definition: definitions.and_then(|source| lookup_for_child(source, text)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::JsonDefinitions;

    const DEFINITIONS: &str = r#"[
        {
            "word": "snake",
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [{ "definition": "A long animal with no legs" }]
                }
            ]
        }
    ]"#;

    #[test]
    fn analyze_valid_word() {
        let dictionary = Dictionary::embedded();
        let result = analyze_word("Elephant", &dictionary, None).unwrap();

        assert_eq!(result.word, "elephant");
        assert_eq!(result.syllables.concat(), "elephant");
        assert!(result.syllables.len() >= 2);
        assert!(result.phonics.iter().any(|r| r == "Digraph: ph"));
        assert!(result.definition.is_none());
    }

    #[test]
    fn analyze_invalid_word() {
        let dictionary = Dictionary::embedded();
        assert!(analyze_word("ice cream", &dictionary, None).is_err());
        assert!(analyze_word("", &dictionary, None).is_err());
    }

    #[test]
    fn analyze_with_definitions() {
        let dictionary = Dictionary::embedded();
        let json = JsonDefinitions::from_reader(DEFINITIONS.as_bytes()).unwrap();
        let source: &dyn DefinitionSource = &json;

        let result = analyze_word("snake", &dictionary, Some(source)).unwrap();
        let definition = result.definition.unwrap();
        assert_eq!(definition.meanings[0].part_of_speech, "noun");
        assert!(result.phonics[0].starts_with("Silent E"));

        let missing = analyze_word("tiger", &dictionary, Some(source)).unwrap();
        assert!(missing.definition.is_none());
    }
}
