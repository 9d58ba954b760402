//! Note Store implementation.
//!
//! # Invariants
//! - Every mutator performs exactly one whole-collection slot write.
//! - The candidate collection is written before it replaces the in-memory
//!   one, so a failed write leaves memory and storage in agreement.
//! - Unknown IDs are a no-op for update/delete, not an error.
//! - Note content is never logged; only IDs and counts are.

use super::{StoreError, StoreResult};
use crate::codec::{decode_collection, encode_collection};
use crate::model::note::{Note, NoteId};
use crate::storage::{SlotStorage, DEFAULT_SLOT_NAME};
use log::{error, info, warn};

/// Owns the note collection and keeps it mirrored in one storage slot.
pub struct NoteStore<S: SlotStorage> {
    storage: S,
    slot: String,
    notes: Vec<Note>,
}

impl<S: SlotStorage> NoteStore<S> {
    /// Opens the store on the default `stickynotes-notes` slot.
    pub fn open(storage: S) -> StoreResult<Self> {
        Self::open_with_slot(storage, DEFAULT_SLOT_NAME)
    }

    /// Opens the store and restores the collection persisted in `slot`.
    ///
    /// A corrupted slot is logged and replaced by an empty collection in
    /// memory; the slot itself is left untouched until the next mutation.
    ///
    /// # Errors
    /// - Returns `StoreError::Storage` when the slot cannot be read.
    pub fn open_with_slot(storage: S, slot: impl Into<String>) -> StoreResult<Self> {
        let mut store = Self {
            storage,
            slot: slot.into(),
            notes: Vec::new(),
        };

        match store.load() {
            Ok(notes) => {
                info!(
                    "event=store_load module=store status=ok slot={} count={}",
                    store.slot,
                    notes.len()
                );
                store.notes = notes;
            }
            Err(StoreError::Deserialization(err)) => {
                warn!(
                    "event=store_load module=store status=fallback slot={} error_code=deserialization_failed error={}",
                    store.slot, err
                );
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error slot={} error_code=storage_read_failed error={}",
                    store.slot, err
                );
                return Err(err);
            }
        }

        Ok(store)
    }

    /// Reads and decodes the persisted collection.
    ///
    /// Returns an empty collection when the slot was never written.
    pub fn load(&self) -> StoreResult<Vec<Note>> {
        match self.storage.read_slot(&self.slot)? {
            Some(text) => Ok(decode_collection(&text)?),
            None => Ok(Vec::new()),
        }
    }

    /// Appends an empty note with a fresh ID and persists the collection.
    pub fn add_note(&mut self) -> StoreResult<Note> {
        let mut note = Note::new();
        while self.contains(note.id) {
            note = Note::new();
        }

        let mut next = self.notes.clone();
        next.push(note.clone());
        self.persist("note_add", next)?;

        info!(
            "event=note_add module=store status=ok note_id={} count={}",
            note.id,
            self.notes.len()
        );
        Ok(note)
    }

    /// Replaces the content of note `id` and persists the collection.
    ///
    /// Returns whether a note matched. A miss still persists once so the slot
    /// keeps mirroring memory.
    pub fn update_content(&mut self, id: NoteId, content: impl Into<String>) -> StoreResult<bool> {
        let mut next = self.notes.clone();
        let matched = match next.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.content = content.into();
                true
            }
            None => false,
        };
        self.persist("note_update", next)?;

        info!(
            "event=note_update module=store status=ok note_id={} matched={}",
            id, matched
        );
        Ok(matched)
    }

    /// Removes note `id` and persists the collection.
    ///
    /// Returns whether a note was removed.
    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<bool> {
        let next: Vec<Note> = self
            .notes
            .iter()
            .filter(|note| note.id != id)
            .cloned()
            .collect();
        let removed = next.len() != self.notes.len();
        self.persist("note_delete", next)?;

        info!(
            "event=note_delete module=store status=ok note_id={} removed={} count={}",
            id,
            removed,
            self.notes.len()
        );
        Ok(removed)
    }

    /// Empties the collection unconditionally and persists `[]`.
    ///
    /// Confirmation is the caller's concern. Returns the number of notes
    /// removed.
    pub fn clear_all(&mut self) -> StoreResult<usize> {
        let removed = self.notes.len();
        self.persist("notes_clear", Vec::new())?;

        info!(
            "event=notes_clear module=store status=ok removed={}",
            removed
        );
        Ok(removed)
    }

    /// Current collection in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up one note by ID.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Returns whether a note with `id` is in the collection.
    pub fn contains(&self, id: NoteId) -> bool {
        self.get(id).is_some()
    }

    /// Number of notes in the collection.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether the collection has no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Name of the slot this store persists to.
    pub fn slot_name(&self) -> &str {
        &self.slot
    }

    /// Borrows the underlying slot storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Releases the underlying storage, e.g. to simulate a reload.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self, event: &'static str, next: Vec<Note>) -> StoreResult<()> {
        let encoded = match encode_collection(&next) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!(
                    "event={event} module=store status=error slot={} error_code=encode_failed error={}",
                    self.slot, err
                );
                return Err(err.into());
            }
        };
        if let Err(err) = self.storage.write_slot(&self.slot, &encoded) {
            error!(
                "event={event} module=store status=error slot={} error_code=storage_write_failed error={}",
                self.slot, err
            );
            return Err(err.into());
        }
        self.notes = next;
        Ok(())
    }
}
