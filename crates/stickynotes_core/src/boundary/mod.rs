//! UI event boundary.
//!
//! # Responsibility
//! - Translate discrete interaction events into Note Store calls.
//! - Gate bulk clearing behind a caller-supplied confirmation capability.
//!
//! # Invariants
//! - The store never sees where an event came from.
//! - Declined confirmations and unbound keys cause no slot write.

mod confirm;
mod dispatch;
mod key;

pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm};
pub use dispatch::{DispatchOutcome, EventDispatcher, UiEvent, CLEAR_ALL_PROMPT};
pub use key::{KeyCombo, KeyComboParseError, CLEAR_ALL_HOTKEY};
