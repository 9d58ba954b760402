//! Note domain model.
//!
//! # Responsibility
//! - Define the record persisted for every sticky note.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `content` starts empty and only changes through an explicit commit.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a sticky note.
pub type NoteId = Uuid;

/// A single sticky note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Opaque unique ID, fixed for the note lifetime.
    pub id: NoteId,
    /// Plain text body. Empty for freshly added notes.
    #[serde(default)]
    pub content: String,
}

impl Note {
    /// Creates an empty note with a freshly generated ID.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4(), String::new())
    }

    /// Creates a note with a caller-provided ID.
    ///
    /// Used by decode paths where identity already exists in storage.
    pub fn with_id(id: NoteId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}
