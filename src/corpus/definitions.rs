//! Child-safe dictionary definitions
//!
//! Definition data comes from an external `DefinitionSource`. Everything it
//! returns passes through `is_appropriate` before a child sees it.

use super::repository::StorageError;
use super::service::is_appropriate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Dictionary data for one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// Definitions grouped under one part of speech
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Sense>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// A definition source could not answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    Unavailable(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "definition source unavailable: {reason}"),
        }
    }
}

impl std::error::Error for LookupError {}

/// External collaborator that returns dictionary data for a word
pub trait DefinitionSource {
    /// Look up `word`; `Ok(None)` means the source has no entry
    ///
    /// # Errors
    /// Returns `LookupError` when the source cannot be reached.
    fn lookup(&self, word: &str) -> Result<Option<DefinitionEntry>, LookupError>;
}

/// Definitions loaded from a JSON array of entries
#[derive(Debug, Clone, Default)]
pub struct JsonDefinitions {
    entries: FxHashMap<String, DefinitionEntry>,
}

impl JsonDefinitions {
    pub fn from_entries(entries: impl IntoIterator<Item = DefinitionEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| (e.word.to_lowercase(), e))
                .collect(),
        }
    }

    /// # Errors
    /// Returns `StorageError::Format` when the JSON is not a list of entries.
    pub fn from_reader(reader: impl Read) -> Result<Self, StorageError> {
        let entries: Vec<DefinitionEntry> = serde_json::from_reader(reader)?;
        Ok(Self::from_entries(entries))
    }

    /// # Errors
    /// Returns `StorageError` when the file cannot be opened or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DefinitionSource for JsonDefinitions {
    fn lookup(&self, word: &str) -> Result<Option<DefinitionEntry>, LookupError> {
        Ok(self.entries.get(&word.trim().to_lowercase()).cloned())
    }
}

/// Look up `word` and strip anything unsuitable for a young reader
///
/// Returns `None` when the query itself is blocked, the source has no entry,
/// the source fails, or no definition survives filtering. Blocked examples
/// are dropped while their definition is kept.
pub fn lookup_for_child<S: DefinitionSource + ?Sized>(
    source: &S,
    word: &str,
) -> Option<DefinitionEntry> {
    if !is_appropriate(word) {
        tracing::debug!(word, "blocked definition query");
        return None;
    }

    let entry = match source.lookup(word) {
        Ok(Some(entry)) => entry,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(word, error = %e, "definition lookup failed");
            return None;
        }
    };

    let meanings: Vec<Meaning> = entry
        .meanings
        .into_iter()
        .filter_map(|meaning| {
            let definitions: Vec<Sense> = meaning
                .definitions
                .into_iter()
                .filter(|sense| is_appropriate(&sense.definition))
                .map(|sense| Sense {
                    example: sense.example.filter(|ex| is_appropriate(ex)),
                    definition: sense.definition,
                })
                .collect();

            (!definitions.is_empty()).then_some(Meaning {
                part_of_speech: meaning.part_of_speech,
                definitions,
            })
        })
        .collect();

    if meanings.is_empty() {
        return None;
    }

    Some(DefinitionEntry {
        word: entry.word,
        phonetic: entry.phonetic,
        meanings,
    })
}
