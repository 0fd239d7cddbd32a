//! Switchyard: an embeddable finite state machine
//!
//! A machine holds a current state and a frozen table of transition
//! functions keyed by (state, event kind). Handling an event looks up the
//! function for the current state and the event's kind, falls back to a
//! catch-all handler when there is none, adopts the resulting state and
//! notifies a listener.
//!
//! # Core Concepts
//!
//! - **State**: caller-defined values implementing the `State` trait
//! - **Event**: caller-defined values whose *kind* selects a transition
//! - **Transition table**: immutable (state, kind) -> function mapping
//! - **Listener**: notified once per handled event, after the state changes
//!
//! # Example
//!
//! ```rust
//! use switchyard::{event_enum, state_enum, StateMachineBuilder};
//!
//! state_enum! {
//!     enum Lifecycle {
//!         Idle,
//!         Running,
//!         Stopped,
//!     }
//!     final: [Stopped]
//! }
//!
//! event_enum! {
//!     #[derive(Debug)]
//!     enum Signal {
//!         Start,
//!         Stop,
//!     }
//!     kind: SignalKind
//! }
//!
//! let mut machine = StateMachineBuilder::<Lifecycle, Signal>::new()
//!     .initial(Lifecycle::Idle)
//!     .transition(Lifecycle::Idle, SignalKind::Start, |_| Lifecycle::Running)
//!     .transition(Lifecycle::Running, SignalKind::Stop, |_| Lifecycle::Stopped)
//!     .stay_on_unhandled()
//!     .build()
//!     .unwrap();
//!
//! machine.handle(Signal::Start).unwrap();
//! machine.handle(Signal::Stop).unwrap();
//! machine.handle(Signal::Start).unwrap();
//! assert_eq!(machine.current_state(), &Lifecycle::Stopped);
//! ```

pub mod builder;
pub mod core;
pub mod listener;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use crate::core::{Event, State, TransitionKey};
pub use listener::{StateChange, StateChangeListener};
pub use machine::{DispatchError, StateMachine};
