//! Core State trait for state machine states.
//!
//! States are opaque caller-defined values. The machine only needs to
//! compare, hash and clone them, since the current state doubles as half of
//! every transition lookup key.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the current state is copied into each lookup key
/// - `Eq` + `Hash`: states index the transition table
/// - `Debug`: states are rendered in diagnostics
/// - `Send` + `Sync`: built machines may be moved between threads
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///             Self::Complete => "Complete",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Complete)
///     }
/// }
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// The machine never enforces terminality. A final state is simply one
    /// with no registered outgoing transitions, so every event reaching it
    /// goes to the fallback handler.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
