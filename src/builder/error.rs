//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error(
        "Fallback handler not specified. Call .fallback(handler) or .stay_on_unhandled() before .build()"
    )]
    MissingFallbackHandler,
}
