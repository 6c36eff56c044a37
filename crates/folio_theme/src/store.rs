//! Preference persistence
//!
//! A [`PreferenceStore`] is a small string key/value surface backing the
//! theme choice, the shape of browser `localStorage`. Two backends ship:
//! in-memory for tests and headless runs, and a single-file store that keeps
//! one `key=value` line per entry.

use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Preference store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Store cannot be read
    #[error("Store read failed: {0}")]
    Read(std::io::Error),

    /// Store cannot be written
    #[error("Store write failed: {0}")]
    Write(std::io::Error),

    /// Store disabled or denied by the environment
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// String key/value persistence for user preferences
///
/// Both operations may fail when the backing storage is disabled or denied.
/// Callers that must not propagate storage failures (theme loading is one)
/// degrade to defaults instead.
pub trait PreferenceStore {
    /// Stored value for `key`, or `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store for tests and headless sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<(String, String)>,
    /// When true, every operation fails as if storage were denied
    denied: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, for exercising degraded paths
    pub fn denied() -> Self {
        Self {
            entries: Vec::new(),
            denied: true,
        }
    }

    /// Pre-populate an entry
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.push((key.to_owned(), value.to_owned()));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.denied {
            return Err(StoreError::Unavailable("memory store denied".into()));
        }
        Ok(self
            .entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.denied {
            return Err(StoreError::Unavailable("memory store denied".into()));
        }
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_owned(),
            None => self.entries.push((key.to_owned(), value.to_owned())),
        }
        Ok(())
    }
}

/// File-backed store, one `key=value` line per entry
///
/// Writes rewrite the whole file. Reads tolerate a missing file (treated as
/// empty) and skip lines that do not parse.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Vec<(String, String)>> {
        let file = match std::fs::File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::Read(err)),
        };

        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(StoreError::Read)?;
            if let Some((key, value)) = line.split_once('=') {
                entries.push((key.to_owned(), value.to_owned()));
            }
        }
        Ok(entries)
    }

    fn write_entries(&self, entries: &[(String, String)]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(StoreError::Write)?;
        }
        let mut file = std::fs::File::create(&self.path).map_err(StoreError::Write)?;
        for (key, value) in entries {
            writeln!(file, "{key}={value}").map_err(StoreError::Write)?;
        }
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .read_entries()?
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        match entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_owned(),
            None => entries.push((key.to_owned(), value.to_owned())),
        }
        self.write_entries(&entries)
    }
}
