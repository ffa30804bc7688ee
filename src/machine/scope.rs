//! Per-invocation machine view passed to transition handlers.

use crate::core::{Payload, State, TransitionRecord};
use crate::machine::error::UnknownStateError;
use crate::machine::registry::Registry;
use crate::machine::HistoryMachine;

/// View of the machine handed to a handler for the duration of one
/// transition.
///
/// The scope is the only way a handler can reach the machine: it is built
/// fresh for every invocation, so handlers never capture machine state in
/// closures or touch anything global. Chained transitions go through
/// [`transition`](TransitionScope::transition), which re-enters the
/// machine and appends one record per step.
pub struct TransitionScope<'m, S: State, P: Payload> {
    machine: &'m mut HistoryMachine<S, P>,
}

impl<'m, S: State, P: Payload> TransitionScope<'m, S, P> {
    pub(crate) fn new(machine: &'m mut HistoryMachine<S, P>) -> Self {
        Self { machine }
    }

    /// Chain into another transition from inside a handler.
    ///
    /// Appends a record for the nested step and runs its handler to
    /// completion before returning, exactly as a top-level
    /// [`HistoryMachine::transition`] call would.
    pub fn transition(
        &mut self,
        state: S,
        payload: Option<P>,
    ) -> Result<TransitionRecord<S, P>, UnknownStateError> {
        self.machine.transition(state, payload)
    }

    /// The machine's handler registry.
    pub fn registry(&self) -> &Registry<S, P> {
        self.machine.registry()
    }

    /// The record currently at the top of the log.
    ///
    /// During a handler's own invocation (with no nested transitions yet)
    /// this is the handler's own record, with `result` still unset.
    pub fn current(&self) -> Option<&TransitionRecord<S, P>> {
        self.machine.current()
    }
}
