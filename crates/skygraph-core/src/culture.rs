//! Culture discovery
//!
//! Cultures are found by listing a root directory one level deep. The
//! listing is not filtered to culture folders, so every entry is only a
//! candidate: entries without an index document are dropped quietly.
//! Hidden (dot-prefixed) entries are never candidates.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Source of culture candidates and their index documents
pub trait CultureSource {
    /// Candidate culture keys, in the order they should be processed
    fn candidates(&self) -> Result<Vec<String>>;

    /// Raw index document for a candidate, or `None` if it has none
    fn read_index(&self, culture: &str) -> Result<Option<String>>;
}

/// Cultures stored as `<root>/<culture>/<index_file>`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    index_file: String,
}

impl DirectorySource {
    /// Create a source rooted at `root`, reading `index_file` in each entry
    pub fn new(root: impl Into<PathBuf>, index_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            index_file: index_file.into(),
        }
    }

    /// Directory being listed
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CultureSource for DirectorySource {
    fn candidates(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| match e.into_io_error() {
                Some(io) => io,
                None => std::io::Error::other("directory loop while listing cultures"),
            })?;
            if let Some(name) = entry.file_name().to_str() {
                // Hidden entries are not listed, as with a shell glob
                if !name.starts_with('.') {
                    names.push(name.to_string());
                }
            } else {
                tracing::debug!("Skipping non UTF-8 entry {}", entry.path().display());
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_index(&self, culture: &str) -> Result<Option<String>> {
        let path = self.root.join(culture).join(&self.index_file);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            // A plain file in the root shows up as "not a directory"
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory cultures, keyed by name
///
/// A `None` document stands for a directory entry without an index file.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: BTreeMap<String, Option<String>>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a culture with an index document
    pub fn with_culture(mut self, name: impl Into<String>, index: impl Into<String>) -> Self {
        self.entries.insert(name.into(), Some(index.into()));
        self
    }

    /// Add a candidate that has no index document
    pub fn with_entry(mut self, name: impl Into<String>) -> Self {
        self.entries.insert(name.into(), None);
        self
    }
}

impl CultureSource for MemorySource {
    fn candidates(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn read_index(&self, culture: &str) -> Result<Option<String>> {
        Ok(self.entries.get(culture).cloned().flatten())
    }
}
