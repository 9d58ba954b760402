//! Persistence surface for the note collection.
//!
//! # Responsibility
//! - Define the named-slot contract the store persists through.
//! - Provide SQLite-backed and in-memory slot implementations.
//! - Open and migrate the SQLite database holding the slots.
//!
//! # Invariants
//! - `write_slot` fully replaces the slot value; there are no partial writes.
//! - `read_slot` returns the last written value, or `None` if never written.
//! - Migration version is tracked via `PRAGMA user_version`.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
pub mod migrations;
mod open;
mod sqlite;

pub use memory::MemorySlotStorage;
pub use open::{open_db, open_db_in_memory};
pub use sqlite::SqliteSlotStorage;

/// Slot name holding the serialized note collection.
pub const DEFAULT_SLOT_NAME: &str = "stickynotes-notes";

pub type DbResult<T> = Result<T, DbError>;
pub type StorageResult<T> = Result<T, StorageError>;

/// Database bootstrap failure.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Slot read/write failure.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Connection is not migrated for slot storage.
    MissingRequiredTable(&'static str),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "missing required table `{table}`; run migrations first")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Named-slot persistence contract.
pub trait SlotStorage {
    /// Returns the last value written to `name`, or `None` if never written.
    fn read_slot(&self, name: &str) -> StorageResult<Option<String>>;
    /// Replaces the whole value held by `name`.
    fn write_slot(&mut self, name: &str, value: &str) -> StorageResult<()>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for &mut S {
    fn read_slot(&self, name: &str) -> StorageResult<Option<String>> {
        (**self).read_slot(name)
    }

    fn write_slot(&mut self, name: &str, value: &str) -> StorageResult<()> {
        (**self).write_slot(name, value)
    }
}
