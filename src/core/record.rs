//! Transition records and the append-only history log.
//!
//! Every transition, undo, and redo appends a record; the log never
//! shrinks. Undo and redo append *replay clones* of earlier records
//! rather than truncating, so the full audit trail survives stepping
//! backward and forward through history.

use super::state::{Payload, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// The `index` field is the record's *originating index*: the logical
/// position assigned when the record was first created by a real
/// transition. Replay clones appended by undo/redo keep the originating
/// index of the record they copy; only their timestamp is fresh.
///
/// `result` is `None` while the record's handler is still executing,
/// which is what lets a handler chain further transitions before its own
/// outcome is known.
///
/// # Example
///
/// ```rust
/// use hindsight::{HistoryMachine, Registry, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Task {
///     Run,
/// }
///
/// impl State for Task {
///     fn name(&self) -> &str {
///         "Run"
///     }
/// }
///
/// let registry: Registry<Task, String> =
///     Registry::new().register(Task::Run, |_scope, payload| payload);
///
/// let mut machine = HistoryMachine::new(registry);
/// let record = machine.transition(Task::Run, Some("job".into())).unwrap();
///
/// assert_eq!(record.name(), "Run");
/// assert_eq!(record.index, 0);
/// assert_eq!(record.result.as_deref(), Some("job"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, P: Payload> {
    /// The state transitioned to
    pub state: S,
    /// The payload the handler was invoked with
    pub payload: Option<P>,
    /// The handler's return value, filled in after it finishes
    pub result: Option<P>,
    /// Originating index (see type-level docs)
    pub index: usize,
    /// When this record was appended
    pub timestamp: DateTime<Utc>,
}

impl<S: State, P: Payload> TransitionRecord<S, P> {
    /// The name of the state this record transitioned to.
    pub fn name(&self) -> &str {
        self.state.name()
    }

    /// Clone this record for an undo/redo replay, keeping the originating
    /// index and resolved result but stamping a fresh timestamp.
    pub(crate) fn replay(&self, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            ..self.clone()
        }
    }
}

/// Ordered, append-only history of transition records.
///
/// Positions run `0..len()`; the record at the highest position is the
/// machine's current record. Mutation only happens through
/// [`HistoryMachine`](crate::machine::HistoryMachine) operations, so a
/// shared borrow of the log is a read-only view of the audit trail.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct HistoryLog<S: State, P: Payload> {
    records: Vec<TransitionRecord<S, P>>,
}

impl<S: State, P: Payload> Default for HistoryLog<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, P: Payload> HistoryLog<S, P> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of records appended so far, replay clones included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any transition has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recently appended record, i.e. the current one.
    pub fn last(&self) -> Option<&TransitionRecord<S, P>> {
        self.records.last()
    }

    /// All records in append order.
    pub fn records(&self) -> &[TransitionRecord<S, P>] {
        &self.records
    }

    /// The first record carrying the given originating index.
    ///
    /// The first occurrence is always the record created by the real
    /// transition; any later occurrences are replay clones of it.
    pub fn find_origin(&self, index: usize) -> Option<&TransitionRecord<S, P>> {
        self.records.iter().find(|record| record.index == index)
    }

    /// Elapsed time between the first and last record.
    ///
    /// Returns `None` while the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub(crate) fn append(&mut self, record: TransitionRecord<S, P>) {
        self.records.push(record);
    }

    /// Resolve the record at `position` after its handler returned.
    pub(crate) fn set_result(&mut self, position: usize, result: P) {
        if let Some(record) = self.records.get_mut(position) {
            record.result = Some(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        First,
        Second,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::First => "First",
                Self::Second => "Second",
            }
        }
    }

    fn record(state: TestState, index: usize) -> TransitionRecord<TestState, String> {
        TransitionRecord {
            state,
            payload: None,
            result: None,
            index,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log: HistoryLog<TestState, String> = HistoryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.last().is_none());
        assert!(log.duration().is_none());
    }

    #[test]
    fn append_preserves_order() {
        let mut log = HistoryLog::new();
        log.append(record(TestState::First, 0));
        log.append(record(TestState::Second, 1));

        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].index, 0);
        assert_eq!(log.records()[1].index, 1);
        assert_eq!(log.last().unwrap().name(), "Second");
    }

    #[test]
    fn find_origin_returns_first_occurrence() {
        let mut log = HistoryLog::new();
        log.append(record(TestState::First, 0));
        log.append(record(TestState::Second, 1));
        // Replay clone of index 0, as undo would append it.
        let replay = log.records()[0].replay(Utc::now());
        log.append(replay);

        let origin = log.find_origin(0).unwrap();
        assert_eq!(origin.name(), "First");
        assert!(log.find_origin(7).is_none());
    }

    #[test]
    fn replay_keeps_index_and_result() {
        let mut log = HistoryLog::new();
        log.append(record(TestState::First, 0));
        log.set_result(0, "done".to_string());

        let original = &log.records()[0];
        let replay = original.replay(Utc::now());

        assert_eq!(replay.index, original.index);
        assert_eq!(replay.result, original.result);
    }

    #[test]
    fn set_result_resolves_record_in_place() {
        let mut log = HistoryLog::new();
        log.append(record(TestState::First, 0));
        assert!(log.records()[0].result.is_none());

        log.set_result(0, "value".to_string());
        assert_eq!(log.records()[0].result.as_deref(), Some("value"));
    }

    #[test]
    fn duration_spans_first_to_last_record() {
        let mut log = HistoryLog::new();
        log.append(record(TestState::First, 0));

        std::thread::sleep(Duration::from_millis(10));
        log.append(record(TestState::Second, 1));

        let duration = log.duration().unwrap();
        assert!(duration >= Duration::from_millis(10));
    }

    #[test]
    fn log_serializes_correctly() {
        let mut log = HistoryLog::new();
        log.append(record(TestState::First, 0));
        log.set_result(0, "value".to_string());

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: HistoryLog<TestState, String> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.records()[0].result.as_deref(), Some("value"));
    }
}
