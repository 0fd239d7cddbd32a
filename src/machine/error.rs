//! Errors raised while dispatching events.

use thiserror::Error;

/// Error type returned by fallible transition functions and fallback handlers.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while handling an event.
///
/// None of these leave the machine half-transitioned: each is raised before
/// the current state is replaced.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("No event supplied to state machine in state '{state}'")]
    NullEvent { state: String },

    #[error("Transition from '{state}' on {kind} failed: {source}")]
    TransitionFailed {
        state: String,
        kind: String,
        #[source]
        source: HandlerError,
    },

    #[error("Fallback handler in state '{state}' failed on {kind}: {source}")]
    FallbackFailed {
        state: String,
        kind: String,
        #[source]
        source: HandlerError,
    },
}
