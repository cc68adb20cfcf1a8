//! Durable storage for user-added word lists
//!
//! The corpus only sees the `CorpusRepository` trait; concrete stores are an
//! in-memory map for tests and a JSON file for the CLI.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Errors raised by a storage backend
#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Format(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "storage I/O error: {e}"),
            Self::Format(e) => write!(f, "storage format error: {e}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Format(e) => Some(e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e)
    }
}

/// Key-value store of ordered string lists, keyed by namespace
pub trait CorpusRepository {
    /// Load the list stored under `namespace`; a missing namespace is empty
    ///
    /// # Errors
    /// Returns `StorageError` when the backend cannot be read.
    fn load(&self, namespace: &str) -> Result<Vec<String>, StorageError>;

    /// Replace the list stored under `namespace`
    ///
    /// # Errors
    /// Returns `StorageError` when the backend cannot be written.
    fn save(&mut self, namespace: &str, words: &[String]) -> Result<(), StorageError>;
}

/// Process-local repository
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    lists: FxHashMap<String, Vec<String>>,
}

impl MemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a namespace
    #[must_use]
    pub fn with_list(mut self, namespace: &str, words: &[&str]) -> Self {
        self.lists.insert(
            namespace.to_string(),
            words.iter().map(|w| (*w).to_string()).collect(),
        );
        self
    }
}

impl CorpusRepository for MemoryRepository {
    fn load(&self, namespace: &str) -> Result<Vec<String>, StorageError> {
        Ok(self.lists.get(namespace).cloned().unwrap_or_default())
    }

    fn save(&mut self, namespace: &str, words: &[String]) -> Result<(), StorageError> {
        self.lists.insert(namespace.to_string(), words.to_vec());
        Ok(())
    }
}

/// Repository backed by one JSON object of `namespace -> [words]`
///
/// Writes go to a temporary file in the same directory which then replaces
/// the target, so a crash never leaves a half-written store.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, Vec<String>>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    fn write_all(&self, lists: &BTreeMap<String, Vec<String>>) -> Result<(), StorageError> {
        let parent_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer_pretty(&mut writer, lists)?;
            writer.flush()?;
        }

        temp_file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl CorpusRepository for JsonFileRepository {
    fn load(&self, namespace: &str) -> Result<Vec<String>, StorageError> {
        Ok(self.read_all()?.remove(namespace).unwrap_or_default())
    }

    fn save(&mut self, namespace: &str, words: &[String]) -> Result<(), StorageError> {
        let mut lists = self.read_all()?;
        lists.insert(namespace.to_string(), words.to_vec());
        self.write_all(&lists)
    }
}
