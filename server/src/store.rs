//! Read-only in-memory data store.
//!
//! The dataset is a single JSON document whose root object maps collection
//! names to arrays of records (or, for singular resources, to one object).
//! It is loaded once at startup and never mutated afterwards, so it can be
//! shared between request handlers behind a plain `Arc`.
//!
//! # Invariants
//!
//! - The document root is always a JSON object
//! - Record order within a collection is the order of the source file

use std::path::Path;

use serde_json::Value;

/// Errors that can occur while loading the dataset.
#[derive(Debug)]
pub enum StoreError {
    /// The dataset file could not be read.
    Io(std::io::Error),
    /// The dataset file is not valid JSON.
    Parse(serde_json::Error),
    /// The document root is not a JSON object.
    NotAnObject,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read dataset: {e}"),
            Self::Parse(e) => write!(f, "failed to parse dataset: {e}"),
            Self::NotAnObject => write!(f, "dataset root must be a JSON object"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::NotAnObject => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Snapshot of the dataset, keyed by collection name.
#[derive(Debug)]
pub struct DataStore {
    document: Value,
}

impl DataStore {
    /// Load the dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not JSON, or its root
    /// is not an object.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let bytes = std::fs::read(path)?;
        let document: Value = serde_json::from_slice(&bytes)?;
        let store = Self::from_value(document)?;
        tracing::debug!(
            "loaded dataset from {} with collections {:?}",
            path.display(),
            store.collection_names().collect::<Vec<_>>()
        );
        Ok(store)
    }

    /// Build a store from an already parsed document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotAnObject` if the root is not an object.
    pub fn from_value(document: Value) -> Result<Self, StoreError> {
        if document.is_object() {
            Ok(Self { document })
        } else {
            Err(StoreError::NotAnObject)
        }
    }

    /// The whole document, as served by `GET /db`.
    #[must_use]
    pub const fn document(&self) -> &Value {
        &self.document
    }

    /// Look up a top-level entry of any shape.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&Value> {
        self.document.get(name)
    }

    /// Look up a collection of records.
    ///
    /// Returns `None` if the entry is missing or is not an array.
    #[must_use]
    pub fn collection(&self, name: &str) -> Option<&[Value]> {
        self.entry(name).and_then(Value::as_array).map(Vec::as_slice)
    }

    /// Names of all top-level entries, in document order.
    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.document
            .as_object()
            .into_iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }
}
