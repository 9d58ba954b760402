use rusqlite::Connection;
use stickynotes_core::storage::migrations::latest_version;
use stickynotes_core::storage::{open_db, open_db_in_memory, DbError};
use stickynotes_core::{SlotStorage, SqliteSlotStorage, StorageError};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert!(SqliteSlotStorage::try_new(&conn).is_ok());
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stickynotes.sqlite3");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unmigrated_connection_is_rejected() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteSlotStorage::try_new(&conn).err().unwrap();
    assert!(matches!(err, StorageError::MissingRequiredTable("slots")));
}

#[test]
fn slot_reads_none_until_written_then_last_write_wins() {
    let conn = open_db_in_memory().unwrap();
    let mut storage = SqliteSlotStorage::try_new(&conn).unwrap();

    assert_eq!(storage.read_slot("stickynotes-notes").unwrap(), None);

    storage.write_slot("stickynotes-notes", "[1]").unwrap();
    storage.write_slot("stickynotes-notes", "[]").unwrap();
    assert_eq!(
        storage.read_slot("stickynotes-notes").unwrap().as_deref(),
        Some("[]")
    );

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM slots;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn slot_values_persist_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slots.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let mut storage = SqliteSlotStorage::try_new(&conn).unwrap();
        storage.write_slot("a", "first").unwrap();
        storage.write_slot("b", "second").unwrap();
    }

    let conn = open_db(&path).unwrap();
    let storage = SqliteSlotStorage::try_new(&conn).unwrap();
    assert_eq!(storage.read_slot("a").unwrap().as_deref(), Some("first"));
    assert_eq!(storage.read_slot("b").unwrap().as_deref(), Some("second"));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}
