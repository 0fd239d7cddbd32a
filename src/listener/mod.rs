//! State change notification.
//!
//! A listener is called exactly once per handled event, after the machine
//! has adopted the new state. Self-transitions are notified like any other.

mod debug;
mod history;

pub use debug::{format_transition, DebugTransitions};
pub use history::{TransitionLog, TransitionRecord};

use crate::core::{Event, State};

/// A completed transition, as seen by listeners.
#[derive(Debug)]
pub struct StateChange<'a, S: State, E: Event> {
    /// State before the event was handled
    pub from: &'a S,
    /// State after the event was handled (already current)
    pub to: &'a S,
    /// The event that caused the transition
    pub event: &'a E,
    /// Prefix passed to `handle_with_prefix`, empty otherwise
    pub logging_prefix: &'a str,
}

impl<S: State, E: Event> StateChange<'_, S, E> {
    /// True when the machine stayed in the same state.
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}

/// Capability notified of every state change.
///
/// Closures of the form `Fn(&S, &S, &E)` (old state, new state, event)
/// implement this trait directly.
///
/// A panicking listener is not caught. Since notification happens after the
/// state swap, the machine stays in the new state.
pub trait StateChangeListener<S: State, E: Event>: Send + Sync {
    fn on_state_change(&self, change: &StateChange<'_, S, E>);
}

impl<S, E, F> StateChangeListener<S, E> for F
where
    S: State,
    E: Event,
    F: Fn(&S, &S, &E) + Send + Sync,
{
    fn on_state_change(&self, change: &StateChange<'_, S, E>) {
        self(change.from, change.to, change.event)
    }
}

/// Listener that ignores every change. Used when none is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListener;

impl<S: State, E: Event> StateChangeListener<S, E> for NoopListener {
    fn on_state_change(&self, _change: &StateChange<'_, S, E>) {}
}
