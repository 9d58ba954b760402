//! Core domain logic for StickyNotes.
//! This crate is the single source of truth for note collection invariants.

pub mod boundary;
pub mod codec;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use boundary::{
    AlwaysConfirm, Confirm, DispatchOutcome, EventDispatcher, KeyCombo, KeyComboParseError,
    NeverConfirm, UiEvent, CLEAR_ALL_HOTKEY, CLEAR_ALL_PROMPT,
};
pub use codec::{decode_collection, encode_collection, DeserializationError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteId};
pub use storage::{
    MemorySlotStorage, SlotStorage, SqliteSlotStorage, StorageError, StorageResult,
    DEFAULT_SLOT_NAME,
};
pub use store::{NoteStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
