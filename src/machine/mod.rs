//! The imperative shell: a state machine that records every step.
//!
//! [`HistoryMachine`] drives transitions through handlers looked up in an
//! immutable [`Registry`], appending one [`TransitionRecord`] per step to
//! an append-only [`HistoryLog`]. Undo and redo replay earlier records as
//! fresh log entries instead of truncating, so history only ever grows.
//!
//! # Key Concepts
//!
//! - **Transitions**: invoke a registered handler, which may chain into
//!   further transitions through its [`TransitionScope`]
//! - **Current record**: the last-appended log entry; there is no
//!   separately stored cursor
//! - **Originating index**: the counter value a record was assigned when
//!   first created; replay clones keep it, which is what undo/redo
//!   navigate by

use crate::core::{HistoryLog, Payload, State, TransitionRecord};
use chrono::Utc;

mod error;
mod registry;
mod scope;

pub use error::UnknownStateError;
pub use registry::{Handler, Registry};
pub use scope::TransitionScope;

/// State machine with replay-based undo/redo over an append-only log.
///
/// The registry is fixed at construction; the log and index counter are
/// the only mutable state, and they mutate only through [`transition`],
/// [`undo`], and [`redo`].
///
/// [`transition`]: HistoryMachine::transition
/// [`undo`]: HistoryMachine::undo
/// [`redo`]: HistoryMachine::redo
///
/// # Example
///
/// ```rust
/// use hindsight::{HistoryMachine, Registry, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Editor {
///     Typed,
/// }
///
/// impl State for Editor {
///     fn name(&self) -> &str {
///         "Typed"
///     }
/// }
///
/// let registry: Registry<Editor, String> =
///     Registry::new().register(Editor::Typed, |_scope, payload| payload);
///
/// let mut machine = HistoryMachine::new(registry);
/// machine.transition(Editor::Typed, Some("a".into())).unwrap();
/// machine.transition(Editor::Typed, Some("ab".into())).unwrap();
///
/// machine.undo();
/// assert_eq!(machine.current().unwrap().result.as_deref(), Some("a"));
///
/// machine.redo();
/// assert_eq!(machine.current().unwrap().result.as_deref(), Some("ab"));
///
/// // Undo and redo appended replays; nothing was deleted.
/// assert_eq!(machine.history().len(), 4);
/// ```
pub struct HistoryMachine<S: State, P: Payload> {
    registry: Registry<S, P>,
    log: HistoryLog<S, P>,
    /// Next originating index; `next_index - 1` is the high-water mark.
    next_index: usize,
}

impl<S: State, P: Payload> HistoryMachine<S, P> {
    /// Create a machine with the given handler registry and an empty log.
    pub fn new(registry: Registry<S, P>) -> Self {
        Self {
            registry,
            log: HistoryLog::new(),
            next_index: 0,
        }
    }

    /// Create a machine and immediately perform its first transition.
    ///
    /// Returns the machine together with the resolved record of that
    /// first step.
    pub fn start(
        registry: Registry<S, P>,
        state: S,
        payload: Option<P>,
    ) -> Result<(Self, TransitionRecord<S, P>), UnknownStateError> {
        let mut machine = Self::new(registry);
        let record = machine.transition(state, payload)?;
        Ok((machine, record))
    }

    /// The handler registry this machine was built with.
    pub fn registry(&self) -> &Registry<S, P> {
        &self.registry
    }

    /// The full audit trail, replay clones included.
    ///
    /// The shared borrow keeps the log read-only for callers; only the
    /// machine's own operations append to it.
    pub fn history(&self) -> &HistoryLog<S, P> {
        &self.log
    }

    /// The current record: the last entry in the log, `None` before any
    /// transition has occurred.
    pub fn current(&self) -> Option<&TransitionRecord<S, P>> {
        self.log.last()
    }

    /// Transition to `state`, invoking its registered handler.
    ///
    /// A record with `result` unset is appended before the handler runs,
    /// so nested transitions chained through the handler's
    /// [`TransitionScope`] land after it in the log. When the handler
    /// returns `Some(value)`, the record appended by this call (not by
    /// any nested step) is resolved with that value.
    ///
    /// Returns a clone of the resolved record, or [`UnknownStateError`]
    /// if `state` has no registered handler.
    pub fn transition(
        &mut self,
        state: S,
        payload: Option<P>,
    ) -> Result<TransitionRecord<S, P>, UnknownStateError> {
        let handler = self
            .registry
            .resolve(&state)
            .cloned()
            .ok_or_else(|| UnknownStateError::new(state.name()))?;

        // Position of this call's record, captured before the handler can
        // append nested ones.
        let position = self.log.len();
        let index = self.next_index;
        self.next_index += 1;

        self.log.append(TransitionRecord {
            state,
            payload: payload.clone(),
            result: None,
            index,
            timestamp: Utc::now(),
        });

        let mut scope = TransitionScope::new(self);
        let result = handler(&mut scope, payload);

        if let Some(value) = result {
            self.log.set_result(position, value);
        }

        Ok(self.log.records()[position].clone())
    }

    /// Step backward one originating index by replaying the previous
    /// record as a new log entry.
    ///
    /// No-op when the log is empty or the current record originated at
    /// index 0; the unchanged current record is returned. The handler is
    /// not re-invoked: undo replays the recorded outcome.
    pub fn undo(&mut self) -> Option<&TransitionRecord<S, P>> {
        let target = match self.log.last() {
            Some(current) if current.index > 0 => current.index - 1,
            _ => return self.log.last(),
        };

        let replay = match self.log.find_origin(target) {
            Some(origin) => origin.replay(Utc::now()),
            None => return self.log.last(),
        };

        self.log.append(replay);
        self.log.last()
    }

    /// Step forward one originating index by replaying the next record as
    /// a new log entry.
    ///
    /// No-op when the log is empty or the current record already sits at
    /// the high-water mark (the highest originating index a real
    /// transition ever produced); redo replays recorded states, it never
    /// invents new ones.
    pub fn redo(&mut self) -> Option<&TransitionRecord<S, P>> {
        let target = match self.log.last() {
            Some(current) if current.index + 1 < self.next_index => current.index + 1,
            _ => return self.log.last(),
        };

        let replay = match self.log.find_origin(target) {
            Some(origin) => origin.replay(Utc::now()),
            None => return self.log.last(),
        };

        self.log.append(replay);
        self.log.last()
    }
}
