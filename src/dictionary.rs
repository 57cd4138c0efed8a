//! Dictionary loading
//!
//! Reads a line-delimited word file into a set for the 'in_dictionary'
//! preset. Entries are whitespace-trimmed; blank lines are skipped. Case
//! normalization is the engine's job, so the set is stored as read.

use crate::input::LineReader;

use std::collections::HashSet;
use std::io;
use std::path::Path;

/// Load a dictionary file into a word set
pub fn load(path: &Path) -> io::Result<HashSet<String>> {
    let reader = LineReader::open(path)?;
    let mut words = HashSet::new();
    for line in reader {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        words.insert(word.to_string());
    }
    log::debug!("loaded {} dictionary words from {}", words.len(), path.display());
    Ok(words)
}
