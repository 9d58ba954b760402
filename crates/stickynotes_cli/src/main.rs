//! StickyNotes command-line front end.
//!
//! Each invocation behaves like one page load: open the slot database,
//! restore the collection, apply one UI event, print the result.

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use stickynotes_core::storage::open_db;
use stickynotes_core::{
    core_version, default_log_level, init_logging, DispatchOutcome, EventDispatcher, KeyCombo,
    Note, NoteStore, SlotStorage, SqliteSlotStorage, StoreResult, UiEvent, DEFAULT_SLOT_NAME,
};
use uuid::Uuid;

/// Sticky notes persisted in a local SQLite slot.
#[derive(Parser)]
#[command(name = "stickynotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// SQLite database holding the notes slot
    #[arg(long, env = "STICKYNOTES_DB", default_value = "stickynotes.sqlite3", global = true)]
    db: PathBuf,

    /// Slot name the collection is stored under
    #[arg(long, default_value = DEFAULT_SLOT_NAME, global = true)]
    slot: String,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "STICKYNOTES_LOG_DIR", global = true)]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print the raw persisted slot instead of a listing
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an empty note
    Add,
    /// Commit new content for a note
    Edit { id: Uuid, content: String },
    /// Delete one note
    Delete { id: Uuid },
    /// Delete every note after confirmation
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Deliver a key combination such as Ctrl+Shift+D
    Key {
        combo: KeyCombo,
        /// Accept any confirmation the key triggers
        #[arg(short, long)]
        yes: bool,
    },
    /// List notes
    List,
    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    if matches!(cli.command, Commands::Version) {
        println!("stickynotes {}", core_version());
        return Ok(());
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    let storage = SqliteSlotStorage::try_new(&conn)?;
    let mut store = NoteStore::open_with_slot(storage, cli.slot.as_str())?;

    let yes = match &cli.command {
        Commands::Clear { yes } | Commands::Key { yes, .. } => *yes,
        _ => false,
    };
    let confirm: Box<dyn FnMut(&str) -> bool> = if yes {
        Box::new(|_: &str| true)
    } else {
        Box::new(prompt_stdin)
    };
    let mut dispatcher = EventDispatcher::new(confirm);

    let event = command_event(cli.command, dispatcher.clear_hotkey());

    if let Some(event) = event {
        let outcome = dispatcher.dispatch(&mut store, event)?;
        info!("event=cli_dispatch module=cli status=ok outcome={}", outcome_label(&outcome));
        report(&outcome);
    }

    if cli.json {
        println!("{}", slot_json(&store)?);
    } else {
        print_notes(store.notes());
    }

    Ok(())
}

/// Maps one CLI command to the UI event it stands for.
///
/// `clear` is the clear-all hotkey, so it goes through the same confirmation
/// gate as a key press.
fn command_event(command: Commands, clear_hotkey: KeyCombo) -> Option<UiEvent> {
    match command {
        Commands::Add => Some(UiEvent::AddClicked),
        Commands::Edit { id, content } => Some(UiEvent::ContentChanged { id, content }),
        Commands::Delete { id } => Some(UiEvent::DoubleClicked { id }),
        Commands::Clear { .. } => Some(UiEvent::KeyPressed(clear_hotkey)),
        Commands::Key { combo, .. } => Some(UiEvent::KeyPressed(combo)),
        Commands::List | Commands::Version => None,
    }
}

/// Raw persisted slot value; `[]` when the slot was never written.
fn slot_json<S: SlotStorage>(store: &NoteStore<S>) -> StoreResult<String> {
    let raw = store.storage().read_slot(store.slot_name())?;
    Ok(raw.unwrap_or_else(|| "[]".to_string()))
}

fn prompt_stdin(message: &str) -> bool {
    print!("{message} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn report(outcome: &DispatchOutcome) {
    match outcome {
        DispatchOutcome::Added(note) => println!("added {}", note.id),
        DispatchOutcome::Committed { id, matched: true } => println!("updated {id}"),
        DispatchOutcome::Committed { id, matched: false } => println!("no note {id}"),
        DispatchOutcome::Deleted { id, removed: true } => println!("deleted {id}"),
        DispatchOutcome::Deleted { id, removed: false } => println!("no note {id}"),
        DispatchOutcome::Cleared(count) => println!("cleared {count} note(s)"),
        DispatchOutcome::ClearDeclined => println!("clear cancelled"),
        DispatchOutcome::Ignored => println!("key not bound"),
    }
}

fn outcome_label(outcome: &DispatchOutcome) -> &'static str {
    match outcome {
        DispatchOutcome::Added(_) => "added",
        DispatchOutcome::Committed { .. } => "committed",
        DispatchOutcome::Deleted { .. } => "deleted",
        DispatchOutcome::Cleared(_) => "cleared",
        DispatchOutcome::ClearDeclined => "clear_declined",
        DispatchOutcome::Ignored => "ignored",
    }
}

fn print_notes(notes: &[Note]) {
    if notes.is_empty() {
        println!("(no notes)");
        return;
    }
    for note in notes {
        let preview = note.content.replace(['\n', '\r'], " ");
        println!("{}  {}", note.id, preview);
    }
}

#[cfg(test)]
mod tests {
    use super::{command_event, slot_json, Cli, Commands};
    use clap::{CommandFactory, Parser};
    use stickynotes_core::{
        AlwaysConfirm, DispatchOutcome, EventDispatcher, KeyCombo, MemorySlotStorage, NoteStore,
        UiEvent, CLEAR_ALL_HOTKEY,
    };

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn clear_hotkey_parses_as_key_argument() {
        let cli = Cli::parse_from(["stickynotes", "key", "Ctrl+Shift+D", "--yes"]);
        match cli.command {
            Commands::Key { combo, yes } => {
                assert_eq!(combo, CLEAR_ALL_HOTKEY);
                assert!(yes);
            }
            _ => panic!("expected key command"),
        }
    }

    #[test]
    fn clear_command_dispatches_the_dispatcher_hotkey() {
        let mut store = NoteStore::open(MemorySlotStorage::new()).unwrap();
        store.add_note().unwrap();
        store.add_note().unwrap();

        let rebound = KeyCombo::parse("Ctrl+Alt+X").unwrap();
        let mut dispatcher = EventDispatcher::new(AlwaysConfirm).with_clear_hotkey(rebound);
        let cli = Cli::parse_from(["stickynotes", "clear", "--yes"]);

        let event = command_event(cli.command, dispatcher.clear_hotkey());
        assert_eq!(event, Some(UiEvent::KeyPressed(rebound)));

        let outcome = dispatcher.dispatch(&mut store, event.unwrap()).unwrap();
        assert_eq!(outcome, DispatchOutcome::Cleared(2));
        assert_eq!(slot_json(&store).unwrap(), "[]");
    }

    #[test]
    fn list_maps_to_no_event() {
        let cli = Cli::parse_from(["stickynotes", "list"]);
        assert_eq!(command_event(cli.command, CLEAR_ALL_HOTKEY), None);
    }

    #[test]
    fn json_output_for_unwritten_slot_is_empty_array() {
        let store = NoteStore::open(MemorySlotStorage::new()).unwrap();
        assert_eq!(store.storage().write_count(), 0);
        assert_eq!(slot_json(&store).unwrap(), "[]");
    }

    #[test]
    fn json_output_reflects_persisted_slot() {
        let mut store = NoteStore::open(MemorySlotStorage::new()).unwrap();
        let note = store.add_note().unwrap();
        store.update_content(note.id, "hello").unwrap();

        let expected = format!(r#"[{{"id":"{}","content":"hello"}}]"#, note.id);
        assert_eq!(slot_json(&store).unwrap(), expected);
    }
}
