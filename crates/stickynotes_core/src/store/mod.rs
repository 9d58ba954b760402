//! Note Store: the owned, persisted note collection.
//!
//! # Responsibility
//! - Keep the in-memory collection and its persisted slot consistent.
//! - Expose create/commit/delete/clear/load use-cases to the UI boundary.

use crate::codec::DeserializationError;
use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod note_store;

pub use note_store::NoteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
#[derive(Debug)]
pub enum StoreError {
    /// Persistence transport failure. The in-memory collection is unchanged.
    Storage(StorageError),
    /// Persisted slot holds a corrupted collection.
    Deserialization(DeserializationError),
    /// Collection could not be encoded. Nothing was written.
    Serialization(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Deserialization(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "failed to encode note collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Deserialization(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<DeserializationError> for StoreError {
    fn from(value: DeserializationError) -> Self {
        Self::Deserialization(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}
