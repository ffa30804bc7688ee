//! Hindsight: a replayable finite state machine with audit-trail undo/redo.
//!
//! Callers register named transition handlers in a [`Registry`], drive a
//! [`HistoryMachine`] through transitions that may chain into one another,
//! and step backward/forward through the resulting history. Undo and redo
//! never delete anything: they append replay clones of earlier records,
//! so the log is a complete audit trail of everything the machine did.
//!
//! # Core Concepts
//!
//! - **State**: a caller-defined tagged enum implementing the [`State`]
//!   trait; the variant is the handler-lookup key
//! - **Handlers**: functions invoked on transition; each receives a
//!   [`TransitionScope`] view of the machine and may chain further
//!   transitions through it before returning
//! - **History**: an append-only [`HistoryLog`] of [`TransitionRecord`]s;
//!   "current" is simply the last-appended record
//!
//! # Example
//!
//! ```rust
//! use hindsight::{HistoryMachine, Registry, State};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! enum Greeting {
//!     Hello,
//!     Goodbye,
//! }
//!
//! impl State for Greeting {
//!     fn name(&self) -> &str {
//!         match self {
//!             Self::Hello => "hello",
//!             Self::Goodbye => "goodbye",
//!         }
//!     }
//! }
//!
//! // hello chains straight into goodbye before resolving.
//! let registry: Registry<Greeting, String> = Registry::new()
//!     .register(Greeting::Hello, |scope, payload: Option<String>| {
//!         let name = payload.unwrap_or_default();
//!         scope
//!             .transition(Greeting::Goodbye, Some(name.clone()))
//!             .expect("goodbye is registered");
//!         Some(format!("hello {name}"))
//!     })
//!     .register(Greeting::Goodbye, |_scope, payload| {
//!         payload.map(|name| format!("goodbye {name}"))
//!     });
//!
//! let mut machine = HistoryMachine::new(registry);
//! machine
//!     .transition(Greeting::Hello, Some("world".into()))
//!     .unwrap();
//!
//! // One record per step, each resolved independently.
//! assert_eq!(machine.history().len(), 2);
//! assert_eq!(
//!     machine.current().unwrap().result.as_deref(),
//!     Some("goodbye world")
//! );
//!
//! // Stepping back replays the earlier record; the log grows.
//! machine.undo();
//! assert_eq!(
//!     machine.current().unwrap().result.as_deref(),
//!     Some("hello world")
//! );
//! assert_eq!(machine.history().len(), 3);
//! ```

pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{HistoryLog, Payload, State, TransitionRecord};
pub use crate::machine::{Handler, HistoryMachine, Registry, TransitionScope, UnknownStateError};
