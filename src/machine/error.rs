//! Machine error types.

use thiserror::Error;

/// Error raised when a transition targets a state with no registered
/// handler.
///
/// This is the machine's only failure mode: boundary undo/redo and
/// empty-history cases are silent no-ops, never errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("failed to transition to unknown state '{name}'")]
pub struct UnknownStateError {
    name: String,
}

impl UnknownStateError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Name of the state that had no handler.
    pub fn state_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_names_the_missing_state() {
        let err = UnknownStateError::new("Published");
        assert_eq!(err.state_name(), "Published");
        assert_eq!(
            err.to_string(),
            "failed to transition to unknown state 'Published'"
        );
    }
}
