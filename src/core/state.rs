//! Core traits for machine states and transition payloads.
//!
//! States are caller-defined tagged variants: each enum variant names one
//! state the machine can transition to. Handler lookup goes through the
//! variant's identity (`PartialEq`), never through function pointers.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// Implement this on an enum whose variants are the states the machine
/// can transition to. The variant itself is the tag used for handler
/// lookup in the [`Registry`](crate::machine::Registry).
///
/// # Required Traits
///
/// - `Clone`: states are cloneable for history tracking
/// - `PartialEq`: states are comparable for handler lookup
/// - `Debug`: states are debuggable for diagnostics
/// - `Serialize` + `Deserialize`: records stay serializable
///
/// # Example
///
/// ```rust
/// use hindsight::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Document {
///     Draft,
///     Review,
///     Published,
/// }
///
/// impl State for Document {
///     fn name(&self) -> &str {
///         match self {
///             Self::Draft => "Draft",
///             Self::Review => "Review",
///             Self::Published => "Published",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Marker trait for values carried through transitions.
///
/// Blanket-implemented for any type meeting the bounds, so callers never
/// implement it by hand. The serde bounds keep [`TransitionRecord`]s
/// serializable end to end.
///
/// [`TransitionRecord`]: crate::core::TransitionRecord
pub trait Payload:
    Clone + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> Payload for T where
    T: Clone + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}
