//! Word corpus service
//!
//! Curated word lists, the common-word dictionary, persisted custom words and
//! the child-safe content filter.

pub mod definitions;
mod dictionary;
mod repository;
mod service;

pub use definitions::{DefinitionEntry, DefinitionSource, JsonDefinitions, lookup_for_child};
pub use dictionary::Dictionary;
pub use repository::{CorpusRepository, JsonFileRepository, MemoryRepository, StorageError};
pub use service::{AddOutcome, CUSTOM_WORDS_NAMESPACE, CorpusError, WordCorpus, is_appropriate};
