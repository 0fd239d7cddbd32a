//! Core state machine types.
//!
//! This module contains the value types every machine is keyed on:
//! - States via the `State` trait
//! - Events and their kinds via the `Event` trait
//! - `TransitionKey`, the (state, event kind) pair that indexes transitions

mod event;
mod key;
mod state;

pub use event::Event;
pub use key::TransitionKey;
pub use state::State;
