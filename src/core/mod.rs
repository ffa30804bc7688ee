//! Core state machine types.
//!
//! This module contains the pure data layer of the machine:
//! - State and payload traits for caller-defined types
//! - Transition records and the append-only history log
//!
//! Nothing here performs a transition; the imperative shell lives in
//! [`crate::machine`].

mod record;
mod state;

pub use record::{HistoryLog, TransitionRecord};
pub use state::{Payload, State};
