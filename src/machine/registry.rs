//! Handler registry keyed by state variant.

use crate::core::{Payload, State};
use crate::machine::scope::TransitionScope;
use std::fmt;
use std::sync::Arc;

/// Type alias for transition handler functions.
///
/// A handler receives a [`TransitionScope`] view of the machine plus the
/// caller's payload, and returns the transition result. Returning `None`
/// leaves the record's result unset. Handlers may call
/// [`TransitionScope::transition`] to chain further transitions before
/// returning.
pub type Handler<S, P> =
    Arc<dyn for<'m> Fn(&mut TransitionScope<'m, S, P>, Option<P>) -> Option<P> + Send + Sync>;

/// Immutable mapping from state variant to transition handler.
///
/// Built up front with the fluent [`register`](Registry::register) API and
/// handed to [`HistoryMachine::new`](crate::machine::HistoryMachine::new);
/// the machine never mutates it. Lookup is by `PartialEq` on the state
/// variant, so the enum tag is the single source of identity.
///
/// # Example
///
/// ```rust
/// use hindsight::{Registry, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Light {
///     Green,
///     Red,
/// }
///
/// impl State for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Green => "Green",
///             Self::Red => "Red",
///         }
///     }
/// }
///
/// let registry: Registry<Light, String> = Registry::new()
///     .register(Light::Green, |_scope, payload| payload)
///     .register(Light::Red, |_scope, _payload| None);
///
/// assert!(registry.contains(&Light::Green));
/// assert_eq!(registry.len(), 2);
/// ```
pub struct Registry<S: State, P: Payload> {
    handlers: Vec<(S, Handler<S, P>)>,
}

impl<S: State, P: Payload> Registry<S, P> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a handler for a state variant, consuming and returning
    /// the registry for chaining.
    ///
    /// Registering the same variant twice replaces the earlier handler,
    /// keeping lookup unambiguous.
    pub fn register<F>(mut self, state: S, handler: F) -> Self
    where
        F: for<'m> Fn(&mut TransitionScope<'m, S, P>, Option<P>) -> Option<P>
            + Send
            + Sync
            + 'static,
    {
        self.handlers.retain(|(existing, _)| *existing != state);
        self.handlers.push((state, Arc::new(handler)));
        self
    }

    /// Look up the handler registered for a state variant.
    pub fn resolve(&self, state: &S) -> Option<&Handler<S, P>> {
        self.handlers
            .iter()
            .find(|(candidate, _)| candidate == state)
            .map(|(_, handler)| handler)
    }

    /// Whether a handler is registered for the given variant.
    pub fn contains(&self, state: &S) -> bool {
        self.resolve(state).is_some()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry has no handlers at all.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Iterate over the registered state variants.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.handlers.iter().map(|(state, _)| state)
    }
}

impl<S: State, P: Payload> Default for Registry<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, P: Payload> Clone for Registry<S, P> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<S: State, P: Payload> fmt::Debug for Registry<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.states().map(|state| state.name()))
            .finish()
    }
}
