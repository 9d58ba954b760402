//! Domain model for sticky notes.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` assigned at creation.
//! - Deletion is a hard removal from the collection; there are no tombstones.

pub mod note;
