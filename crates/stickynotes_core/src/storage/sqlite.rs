//! SQLite-backed slot storage.
//!
//! # Invariants
//! - One row per slot name; writes upsert the whole value.
//! - Construction fails fast when the connection was not migrated.

use super::{SlotStorage, StorageError, StorageResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Slot storage over a migrated SQLite connection.
pub struct SqliteSlotStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStorage<'conn> {
    /// Constructs slot storage from a connection returned by `open_db*`.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        if !table_exists(conn, "slots")? {
            return Err(StorageError::MissingRequiredTable("slots"));
        }
        Ok(Self { conn })
    }
}

impl SlotStorage for SqliteSlotStorage<'_> {
    fn read_slot(&self, name: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE name = ?1;",
                [name],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&mut self, name: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO slots (name, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(name) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![name, value],
        )?;
        Ok(())
    }
}

fn table_exists(conn: &Connection, table: &str) -> StorageResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
