//! Word list loading utilities
//!
//! Reads user-supplied word lists; the built-in lists live in `embedded`.

use crate::core::WordEntry;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Blank lines and lines starting with `#` are ignored;
/// invalid entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_games::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/common_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<WordEntry>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                WordEntry::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}
