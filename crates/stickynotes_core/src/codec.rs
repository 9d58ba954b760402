//! Textual codec for the persisted note collection.
//!
//! # Responsibility
//! - Encode the in-memory collection into the JSON array stored in a slot.
//! - Decode a slot value back into a collection, rejecting corrupted input.
//!
//! # Invariants
//! - An empty collection encodes as `[]`, never `null`.
//! - Record order is preserved in both directions.
//! - Decoded collections never contain duplicate note IDs.

use crate::model::note::{Note, NoteId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure raised when a persisted collection cannot be reconstructed.
#[derive(Debug)]
pub enum DeserializationError {
    /// Slot text is not a JSON array of `{id, content}` records.
    Malformed(serde_json::Error),
    /// Two records share the same note ID.
    DuplicateId(NoteId),
}

impl Display for DeserializationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed note collection: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate note id in collection: {id}"),
        }
    }
}

impl Error for DeserializationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for DeserializationError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

/// Encodes the collection as a JSON array in collection order.
///
/// # Errors
/// - Returns the serializer error as-is; callers must not substitute a
///   fallback value, since writing it would replace the persisted notes.
pub fn encode_collection(notes: &[Note]) -> Result<String, serde_json::Error> {
    serde_json::to_string(notes)
}

/// Decodes a JSON array produced by [`encode_collection`].
///
/// Unknown per-record fields are ignored so values written by richer clients
/// (position, color) still load.
pub fn decode_collection(text: &str) -> Result<Vec<Note>, DeserializationError> {
    let notes: Vec<Note> = serde_json::from_str(text)?;

    let mut seen = HashSet::with_capacity(notes.len());
    for note in &notes {
        if !seen.insert(note.id) {
            return Err(DeserializationError::DuplicateId(note.id));
        }
    }

    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::{decode_collection, encode_collection, DeserializationError};
    use crate::model::note::Note;
    use uuid::Uuid;

    #[test]
    fn empty_collection_encodes_as_empty_array() {
        assert_eq!(encode_collection(&[]).unwrap(), "[]");
        assert!(decode_collection("[]").unwrap().is_empty());
    }

    #[test]
    fn roundtrip_preserves_order_and_fields() {
        let collections = vec![
            Vec::new(),
            vec![Note::with_id(Uuid::new_v4(), "")],
            vec![
                Note::with_id(Uuid::new_v4(), "first"),
                Note::with_id(Uuid::new_v4(), ""),
                Note::with_id(Uuid::new_v4(), "line one\nline \"two\""),
            ],
            vec![
                Note::with_id(Uuid::new_v4(), "Grüße, café, naïve"),
                Note::with_id(Uuid::new_v4(), "付箋メモ 📝"),
                Note::with_id(Uuid::new_v4(), "tab\tback\\slash \u{0}nul"),
            ],
        ];

        for notes in collections {
            let encoded = encode_collection(&notes).unwrap();
            let decoded = decode_collection(&encoded).unwrap();
            assert_eq!(decoded, notes, "roundtrip failed for {encoded}");
        }
    }

    #[test]
    fn decode_ignores_unknown_record_fields() {
        let id = Uuid::new_v4();
        let text = format!(r#"[{{"id":"{id}","content":"hi","x":10,"color":"yellow"}}]"#);
        let decoded = decode_collection(&text).unwrap();
        assert_eq!(decoded, vec![Note::with_id(id, "hi")]);
    }

    #[test]
    fn decode_rejects_null_and_garbage() {
        for text in ["null", "{}", "not json", r#"[{"content":"no id"}]"#] {
            let err = decode_collection(text).unwrap_err();
            assert!(
                matches!(err, DeserializationError::Malformed(_)),
                "unexpected result for {text}"
            );
        }
    }

    #[test]
    fn decode_rejects_duplicate_ids() {
        let id = Uuid::new_v4();
        let text = format!(r#"[{{"id":"{id}","content":"a"}},{{"id":"{id}","content":"b"}}]"#);
        let err = decode_collection(&text).unwrap_err();
        match err {
            DeserializationError::DuplicateId(dup) => assert_eq!(dup, id),
            other => panic!("unexpected error: {other}"),
        }
    }
}
