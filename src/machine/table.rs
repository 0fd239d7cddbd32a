//! Immutable transition table.

use crate::core::{Event, State, TransitionKey};
use crate::machine::error::HandlerError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Uniform, type-erased transition function.
///
/// Typed closures are wrapped into this shape at registration time, so
/// dispatch never has to cast.
pub type Mapper<S, E> = Arc<dyn Fn(&E) -> Result<S, HandlerError> + Send + Sync>;

/// A single registration: the key it answers to and its mapper.
pub struct Registration<S: State, E: Event> {
    pub key: TransitionKey<S, E::Kind>,
    pub mapper: Mapper<S, E>,
}

impl<S: State, E: Event> Clone for Registration<S, E> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            mapper: Arc::clone(&self.mapper),
        }
    }
}

/// Mapping from (state, event kind) to transition function.
///
/// Built once and never mutated. When the same key is registered more than
/// once, the registration that comes last in the input sequence wins, so
/// `len()` never exceeds the number of distinct keys.
pub struct TransitionTable<S: State, E: Event> {
    entries: HashMap<TransitionKey<S, E::Kind>, Mapper<S, E>>,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Build a table from registrations in the order they were made.
    pub fn from_registrations<I>(registrations: I) -> Self
    where
        I: IntoIterator<Item = Registration<S, E>>,
    {
        let mut entries = HashMap::new();
        for registration in registrations {
            // Later registrations replace earlier ones for the same key.
            entries.insert(registration.key, registration.mapper);
        }
        Self { entries }
    }

    /// Find the transition function for a state and event kind.
    pub fn lookup(&self, state: &S, kind: E::Kind) -> Option<&Mapper<S, E>> {
        let key = TransitionKey::new(state.clone(), kind);
        self.entries.get(&key)
    }

    /// Check whether a transition is registered for a state and event kind.
    pub fn contains(&self, state: &S, kind: E::Kind) -> bool {
        self.lookup(state, kind).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &TransitionKey<S, E::Kind>> {
        self.entries.keys()
    }
}

impl<S: State, E: Event> fmt::Debug for TransitionTable<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
