//! Undo / Redo
//!
//! This example demonstrates stepping backward and forward through a
//! machine's history. Undo and redo append replay clones instead of
//! deleting records, so the full audit trail survives.
//!
//! Key concepts:
//! - "Current" is always the last-appended record
//! - Undo replays the previous originating index, redo the next one
//! - Boundary calls are silent no-ops, never errors
//!
//! Run with: cargo run --example undo_redo

use hindsight::{HistoryMachine, Registry, State};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
enum Editor {
    Typed,
}

impl State for Editor {
    fn name(&self) -> &str {
        "typed"
    }
}

fn show(label: &str, machine: &HistoryMachine<Editor, String>) {
    let current = machine.current().expect("at least one transition");
    println!(
        "{label:<18} buffer={:?} (index {}, {} records)",
        current.result.as_deref().unwrap_or(""),
        current.index,
        machine.history().len()
    );
}

fn main() {
    println!("=== Undo / Redo Example ===\n");

    let registry: Registry<Editor, String> =
        Registry::new().register(Editor::Typed, |_scope, payload| payload);

    let mut machine = HistoryMachine::new(registry);

    for buffer in ["h", "he", "hel", "hell", "hello"] {
        machine
            .transition(Editor::Typed, Some(buffer.to_string()))
            .unwrap();
    }
    show("after typing:", &machine);

    machine.undo();
    machine.undo();
    show("after 2 undos:", &machine);

    machine.redo();
    show("after 1 redo:", &machine);

    // Redo cannot move past the last state a real transition reached.
    machine.redo();
    machine.redo();
    show("redo at the top:", &machine);

    println!("\nFull audit trail:");
    for record in machine.history().records() {
        println!("  index {} -> {:?}", record.index, record.result);
    }

    println!("\n=== Example Complete ===");
}
