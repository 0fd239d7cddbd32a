//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Event, State, TransitionKey};
use crate::listener::{DebugTransitions, NoopListener, StateChangeListener};
use crate::machine::{Fallback, HandlerError, Registration, StateMachine, TransitionTable};
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
///
/// Registrations accumulate in order. Registering the same (state, event
/// kind) pair twice is allowed and the later registration wins.
///
/// `build` takes `&self`: every machine gets a frozen snapshot of the
/// registrations made so far, and the builder stays usable.
pub struct StateMachineBuilder<S: State, E: Event> {
    initial: Option<S>,
    registrations: Vec<Registration<S, E>>,
    fallback: Option<Fallback<S, E>>,
    listener: Arc<dyn StateChangeListener<S, E>>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            registrations: Vec::new(),
            fallback: None,
            listener: Arc::new(NoopListener),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register the transition taken when an event of `kind` arrives in
    /// `from`. The mapper computes the new state from the event.
    pub fn transition<F>(self, from: S, kind: E::Kind, mapper: F) -> Self
    where
        F: Fn(&E) -> S + Send + Sync + 'static,
    {
        self.try_transition(from, kind, move |event| Ok(mapper(event)))
    }

    /// Register a transition whose mapper may fail.
    pub fn try_transition<F>(mut self, from: S, kind: E::Kind, mapper: F) -> Self
    where
        F: Fn(&E) -> Result<S, HandlerError> + Send + Sync + 'static,
    {
        self.registrations.push(Registration {
            key: TransitionKey::new(from, kind),
            mapper: Arc::new(mapper),
        });
        self
    }

    /// Set the handler for events with no registered transition (required).
    ///
    /// It receives the current state and the event and returns the new state.
    pub fn fallback<F>(self, handler: F) -> Self
    where
        F: Fn(&S, &E) -> S + Send + Sync + 'static,
    {
        self.try_fallback(move |state, event| Ok(handler(state, event)))
    }

    /// Set a fallback handler that may fail.
    pub fn try_fallback<F>(mut self, handler: F) -> Self
    where
        F: Fn(&S, &E) -> Result<S, HandlerError> + Send + Sync + 'static,
    {
        self.fallback = Some(Arc::new(handler));
        self
    }

    /// Fallback that keeps the current state for unhandled events.
    pub fn stay_on_unhandled(self) -> Self {
        self.fallback(|state, _| state.clone())
    }

    /// Set the listener notified after every handled event (optional).
    pub fn on_state_change<L>(mut self, listener: L) -> Self
    where
        L: StateChangeListener<S, E> + 'static,
    {
        self.listener = Arc::new(listener);
        self
    }

    /// Log every transition at info level as
    /// `"<prefix> <event>: <old> -> <new>"`.
    ///
    /// Replaces any listener set earlier.
    pub fn debug_transitions(self, prefix: impl Into<String>) -> Self {
        self.on_state_change(DebugTransitions::new(prefix))
    }

    /// Number of transitions registered so far, duplicates included.
    pub fn registration_count(&self) -> usize {
        self.registrations.len()
    }

    /// Build the state machine.
    /// Returns an error if the initial state or fallback handler is missing.
    pub fn build(&self) -> Result<StateMachine<S, E>, BuildError> {
        let initial = self
            .initial
            .clone()
            .ok_or(BuildError::MissingInitialState)?;
        let fallback = self
            .fallback
            .clone()
            .ok_or(BuildError::MissingFallbackHandler)?;

        let table = TransitionTable::from_registrations(self.registrations.iter().cloned());

        Ok(StateMachine::new(
            initial,
            Arc::new(table),
            fallback,
            Arc::clone(&self.listener),
        ))
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
