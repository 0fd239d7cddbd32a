//! Event dispatch.
//!
//! A [`StateMachine`] owns its current state and shares an immutable
//! [`TransitionTable`], fallback handler and listener. Handling an event
//! follows a fixed order:
//!
//! 1. look up (current state, event kind) in the table
//! 2. run the registered transition function, or the fallback if none
//! 3. replace the current state
//! 4. notify the listener
//!
//! Failures in steps 1-2 leave the state untouched. A listener panic in
//! step 4 happens after the state has already changed.

mod engine;
mod error;
mod table;

pub use engine::{Fallback, StateMachine};
pub use error::{DispatchError, HandlerError};
pub use table::{Mapper, Registration, TransitionTable};
