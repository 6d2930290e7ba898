//! Preference storage.
//!
//! A small key-value string store backing the theme preference. The
//! file-backed implementation keeps a TOML table under the user config
//! directory; the in-memory one serves tests and hosts that bring their own
//! persistence.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

/// Errors from writing a preference.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write preference file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// A persistent key-value string store.
pub trait PreferenceStore {
    /// Read a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. The new value must be visible to later `get` calls
    /// even when persisting it fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store: one TOML table of string keys, read once at
/// construction and rewritten on every [`set`](PreferenceStore::set).
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// The default location under the user config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tiltcalc")
            .join("preferences.toml")
    }

    /// Open the store at the default location.
    pub fn open() -> Self {
        Self::at_path(Self::default_path())
    }

    /// Open a store backed by an explicit file.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::read_values(&path);
        Self { path, values }
    }

    fn read_values(path: &Path) -> BTreeMap<String, String> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            // A missing file is just the first run.
            Err(err) if err.kind() == ErrorKind::NotFound => return BTreeMap::new(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read preference file");
                return BTreeMap::new();
            }
        };

        match toml::from_str(&contents) {
            Ok(values) => values,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "discarding malformed preference file");
                BTreeMap::new()
            }
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string(&self.values)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// In-memory store for tests and hosts with their own persistence.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
