//! Event-to-store dispatch.

use super::confirm::Confirm;
use super::key::{KeyCombo, CLEAR_ALL_HOTKEY};
use crate::model::note::{Note, NoteId};
use crate::storage::SlotStorage;
use crate::store::{NoteStore, StoreResult};
use log::{debug, info};

/// Prompt shown before every note is removed.
pub const CLEAR_ALL_PROMPT: &str = "Are you sure you want to delete all notes?";

/// Discrete user interaction delivered by the UI layer.
///
/// Typing is not an event on its own: edits commit only on `ContentChanged`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The "Add Note" control was activated.
    AddClicked,
    /// A rendered note signalled a content change (blur/change).
    ContentChanged { id: NoteId, content: String },
    /// A rendered note was double-activated.
    DoubleClicked { id: NoteId },
    /// A global key combination was pressed.
    KeyPressed(KeyCombo),
}

/// What a dispatched event did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Added(Note),
    /// Content committed; `matched` is false when the note no longer exists.
    Committed { id: NoteId, matched: bool },
    Deleted { id: NoteId, removed: bool },
    Cleared(usize),
    ClearDeclined,
    /// Event has no binding; nothing was written.
    Ignored,
}

/// Routes UI events to a [`NoteStore`], asking `C` before bulk clears.
pub struct EventDispatcher<C: Confirm> {
    confirm: C,
    clear_hotkey: KeyCombo,
}

impl<C: Confirm> EventDispatcher<C> {
    pub fn new(confirm: C) -> Self {
        Self {
            confirm,
            clear_hotkey: CLEAR_ALL_HOTKEY,
        }
    }

    /// Rebinds the clear-all hotkey.
    pub fn with_clear_hotkey(mut self, hotkey: KeyCombo) -> Self {
        self.clear_hotkey = hotkey;
        self
    }

    pub fn clear_hotkey(&self) -> KeyCombo {
        self.clear_hotkey
    }

    /// Applies one event to `store`, running it to completion.
    pub fn dispatch<S: SlotStorage>(
        &mut self,
        store: &mut NoteStore<S>,
        event: UiEvent,
    ) -> StoreResult<DispatchOutcome> {
        match event {
            UiEvent::AddClicked => Ok(DispatchOutcome::Added(store.add_note()?)),
            UiEvent::ContentChanged { id, content } => {
                let matched = store.update_content(id, content)?;
                Ok(DispatchOutcome::Committed { id, matched })
            }
            UiEvent::DoubleClicked { id } => {
                let removed = store.delete_note(id)?;
                Ok(DispatchOutcome::Deleted { id, removed })
            }
            UiEvent::KeyPressed(combo) if combo == self.clear_hotkey => {
                if !self.confirm.confirm(CLEAR_ALL_PROMPT) {
                    info!(
                        "event=notes_clear module=boundary status=declined count={}",
                        store.len()
                    );
                    return Ok(DispatchOutcome::ClearDeclined);
                }
                Ok(DispatchOutcome::Cleared(store.clear_all()?))
            }
            UiEvent::KeyPressed(combo) => {
                debug!("event=key_ignored module=boundary combo={combo}");
                Ok(DispatchOutcome::Ignored)
            }
        }
    }
}
