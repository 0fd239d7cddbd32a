//! In-memory transition log.
//!
//! `TransitionLog` is a listener that keeps every transition it observes,
//! in order. Clone the log before handing it to the builder and keep the
//! clone to inspect what happened.

use super::{StateChange, StateChangeListener};
use crate::core::{Event, State};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Record of a single handled event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord<S, K> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Kind of the event that caused the transition
    pub event_kind: K,
    /// When the transition was observed
    pub timestamp: DateTime<Utc>,
}

impl<S: PartialEq, K> TransitionRecord<S, K> {
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}

/// Shared, ordered log of transitions.
///
/// # Example
///
/// ```rust
/// use switchyard::builder::StateMachineBuilder;
/// use switchyard::listener::TransitionLog;
/// use switchyard::{event_enum, state_enum};
///
/// state_enum! {
///     enum Door { Closed, Open }
/// }
///
/// event_enum! {
///     #[derive(Debug)]
///     enum DoorEvent { Push, Pull }
///     kind: DoorEventKind
/// }
///
/// let log = TransitionLog::new();
/// let mut door = StateMachineBuilder::<Door, DoorEvent>::new()
///     .initial(Door::Closed)
///     .transition(Door::Closed, DoorEventKind::Push, |_| Door::Open)
///     .stay_on_unhandled()
///     .on_state_change(log.clone())
///     .build()
///     .unwrap();
///
/// door.handle(DoorEvent::Push).unwrap();
/// door.handle(DoorEvent::Pull).unwrap();
///
/// assert_eq!(log.path(), vec![Door::Closed, Door::Open, Door::Open]);
/// ```
pub struct TransitionLog<S, K> {
    records: Arc<Mutex<Vec<TransitionRecord<S, K>>>>,
}

impl<S, K> Clone for TransitionLog<S, K> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<S, K> Default for TransitionLog<S, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, K> TransitionLog<S, K> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Drop all recorded transitions.
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let records = self.records.lock();
        let (first, last) = (records.first()?, records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

impl<S: Clone, K: Clone> TransitionLog<S, K> {
    /// Snapshot of all records, oldest first.
    pub fn records(&self) -> Vec<TransitionRecord<S, K>> {
        self.records.lock().clone()
    }

    /// States traversed: the first `from` state, then each `to` state.
    pub fn path(&self) -> Vec<S> {
        let records = self.records.lock();
        let mut path = Vec::with_capacity(records.len() + 1);
        if let Some(first) = records.first() {
            path.push(first.from.clone());
        }
        path.extend(records.iter().map(|record| record.to.clone()));
        path
    }
}

impl<S: State, E: Event> StateChangeListener<S, E> for TransitionLog<S, E::Kind> {
    fn on_state_change(&self, change: &StateChange<'_, S, E>) {
        self.records.lock().push(TransitionRecord {
            from: change.from.clone(),
            to: change.to.clone(),
            event_kind: change.event.kind(),
            timestamp: Utc::now(),
        });
    }
}
