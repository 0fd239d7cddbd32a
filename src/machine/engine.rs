//! State machine that dispatches events through a frozen transition table.

use crate::core::{Event, State};
use crate::listener::{StateChange, StateChangeListener};
use crate::machine::error::{DispatchError, HandlerError};
use crate::machine::table::TransitionTable;
use std::fmt;
use std::sync::Arc;

/// Uniform, type-erased fallback handler.
pub type Fallback<S, E> = Arc<dyn Fn(&S, &E) -> Result<S, HandlerError> + Send + Sync>;

/// State machine driven by events.
///
/// The table, fallback and listener are immutable and shared; the current
/// state is the only thing `handle` changes. `handle` takes `&mut self`, so
/// a machine has a single driver. Hosts that need several producers must
/// serialize them, e.g. behind a mutex or through a channel consumed by the
/// task that owns the machine.
pub struct StateMachine<S: State, E: Event> {
    current: S,
    table: Arc<TransitionTable<S, E>>,
    fallback: Fallback<S, E>,
    listener: Arc<dyn StateChangeListener<S, E>>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    pub(crate) fn new(
        initial: S,
        table: Arc<TransitionTable<S, E>>,
        fallback: Fallback<S, E>,
        listener: Arc<dyn StateChangeListener<S, E>>,
    ) -> Self {
        Self {
            current: initial,
            table,
            fallback,
            listener,
        }
    }

    /// Get the state adopted by the most recent `handle` call, or the
    /// initial state if nothing has been handled yet.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if machine is in a final state
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    pub fn transitions(&self) -> &TransitionTable<S, E> {
        &self.table
    }

    /// Create a machine sharing this one's table, fallback and listener,
    /// starting from `initial`.
    pub fn with_initial_state(&self, initial: S) -> Self {
        Self {
            current: initial,
            table: Arc::clone(&self.table),
            fallback: Arc::clone(&self.fallback),
            listener: Arc::clone(&self.listener),
        }
    }

    /// Handle an event and return the new current state.
    pub fn handle(&mut self, event: E) -> Result<&S, DispatchError> {
        self.handle_with_prefix(event, "")
    }

    /// Handle an event, passing `logging_prefix` through to the listener.
    ///
    /// The transition function registered for (current state, event kind)
    /// produces the new state; without one, the fallback handler does. The
    /// new state is adopted before the listener runs. If the transition
    /// function or fallback fails, the state is left as it was and the
    /// listener is not called.
    pub fn handle_with_prefix(
        &mut self,
        event: E,
        logging_prefix: &str,
    ) -> Result<&S, DispatchError> {
        let kind = event.kind();

        let new_state = match self.table.lookup(&self.current, kind) {
            Some(mapper) => {
                mapper(&event).map_err(|source| DispatchError::TransitionFailed {
                    state: self.current.name().to_string(),
                    kind: format!("{:?}", kind),
                    source,
                })?
            }
            None => {
                tracing::debug!(
                    state = self.current.name(),
                    kind = ?kind,
                    "no transition registered, using fallback handler"
                );
                (self.fallback)(&self.current, &event).map_err(|source| {
                    DispatchError::FallbackFailed {
                        state: self.current.name().to_string(),
                        kind: format!("{:?}", kind),
                        source,
                    }
                })?
            }
        };

        let old_state = std::mem::replace(&mut self.current, new_state);

        self.listener.on_state_change(&StateChange {
            from: &old_state,
            to: &self.current,
            event: &event,
            logging_prefix,
        });

        Ok(&self.current)
    }

    /// Handle an event that may be absent, such as the result of receiving
    /// from a channel. `None` fails with [`DispatchError::NullEvent`] and
    /// leaves the machine untouched.
    pub fn handle_received(&mut self, event: Option<E>) -> Result<&S, DispatchError> {
        self.handle_received_with_prefix(event, "")
    }

    pub fn handle_received_with_prefix(
        &mut self,
        event: Option<E>,
        logging_prefix: &str,
    ) -> Result<&S, DispatchError> {
        match event {
            Some(event) => self.handle_with_prefix(event, logging_prefix),
            None => Err(DispatchError::NullEvent {
                state: self.current.name().to_string(),
            }),
        }
    }
}

impl<S: State, E: Event> fmt::Debug for StateMachine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("transitions", &self.table.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StateMachineBuilder;
    use parking_lot::Mutex;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum WorkflowState {
        Idle,
        Running,
        Stopped,
    }

    impl State for WorkflowState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
                Self::Stopped => "Stopped",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Stopped)
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Command {
        Start,
        Stop,
        Resize(u32),
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum CommandKind {
        Start,
        Stop,
        Resize,
    }

    impl Event for Command {
        type Kind = CommandKind;

        fn kind(&self) -> CommandKind {
            match self {
                Self::Start => CommandKind::Start,
                Self::Stop => CommandKind::Stop,
                Self::Resize(_) => CommandKind::Resize,
            }
        }
    }

    type Seen = Arc<Mutex<Vec<(WorkflowState, WorkflowState, Command)>>>;

    fn recording_builder(seen: &Seen) -> StateMachineBuilder<WorkflowState, Command> {
        let seen = Arc::clone(seen);
        StateMachineBuilder::<WorkflowState, Command>::new()
            .initial(WorkflowState::Idle)
            .transition(WorkflowState::Idle, CommandKind::Start, |_| {
                WorkflowState::Running
            })
            .transition(WorkflowState::Running, CommandKind::Stop, |_| {
                WorkflowState::Stopped
            })
            .stay_on_unhandled()
            .on_state_change(move |old: &WorkflowState, new: &WorkflowState, e: &Command| {
                seen.lock().push((old.clone(), new.clone(), e.clone()));
            })
    }

    #[test]
    fn registered_transition_changes_state_and_notifies() {
        let seen = Seen::default();
        let mut machine = recording_builder(&seen).build().unwrap();

        let state = machine.handle(Command::Start).unwrap();

        assert_eq!(state, &WorkflowState::Running);
        assert_eq!(
            seen.lock().as_slice(),
            &[(WorkflowState::Idle, WorkflowState::Running, Command::Start)]
        );
    }

    #[test]
    fn unregistered_event_uses_fallback_once() {
        let calls = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&calls);
        let mut machine = StateMachineBuilder::<WorkflowState, Command>::new()
            .initial(WorkflowState::Idle)
            .fallback(move |state: &WorkflowState, _: &Command| {
                *counter.lock() += 1;
                match state {
                    WorkflowState::Idle => WorkflowState::Stopped,
                    other => other.clone(),
                }
            })
            .build()
            .unwrap();

        machine.handle(Command::Resize(3)).unwrap();

        assert_eq!(*calls.lock(), 1);
        assert_eq!(machine.current_state(), &WorkflowState::Stopped);
        assert!(machine.is_final());
    }

    #[test]
    fn self_transition_is_notified() {
        let seen = Seen::default();
        let mut machine = recording_builder(&seen).build().unwrap();

        machine.handle(Command::Stop).unwrap();

        assert_eq!(machine.current_state(), &WorkflowState::Idle);
        assert_eq!(
            seen.lock().as_slice(),
            &[(WorkflowState::Idle, WorkflowState::Idle, Command::Stop)]
        );
    }

    #[test]
    fn transition_receives_event_payload() {
        let mut machine = StateMachineBuilder::<WorkflowState, Command>::new()
            .initial(WorkflowState::Idle)
            .transition(WorkflowState::Idle, CommandKind::Resize, |e| match e {
                Command::Resize(n) if *n > 0 => WorkflowState::Running,
                _ => WorkflowState::Idle,
            })
            .stay_on_unhandled()
            .build()
            .unwrap();

        machine.handle(Command::Resize(0)).unwrap();
        assert_eq!(machine.current_state(), &WorkflowState::Idle);

        machine.handle(Command::Resize(8)).unwrap();
        assert_eq!(machine.current_state(), &WorkflowState::Running);
    }

    #[test]
    fn absent_event_is_rejected_without_notification() {
        let seen = Seen::default();
        let mut machine = recording_builder(&seen).build().unwrap();

        let result = machine.handle_received(None);

        assert!(matches!(
            result,
            Err(DispatchError::NullEvent { ref state }) if state == "Idle"
        ));
        assert_eq!(machine.current_state(), &WorkflowState::Idle);
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn received_event_is_dispatched() {
        let seen = Seen::default();
        let mut machine = recording_builder(&seen).build().unwrap();

        machine.handle_received(Some(Command::Start)).unwrap();

        assert_eq!(machine.current_state(), &WorkflowState::Running);
        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn failing_transition_leaves_state_unchanged() {
        let seen = Seen::default();
        let listener_seen = Arc::clone(&seen);
        let mut machine = StateMachineBuilder::<WorkflowState, Command>::new()
            .initial(WorkflowState::Idle)
            .try_transition(WorkflowState::Idle, CommandKind::Start, |_| {
                Err("engine not warmed up".into())
            })
            .stay_on_unhandled()
            .on_state_change(move |old: &WorkflowState, new: &WorkflowState, e: &Command| {
                listener_seen
                    .lock()
                    .push((old.clone(), new.clone(), e.clone()));
            })
            .build()
            .unwrap();

        let err = machine.handle(Command::Start).unwrap_err();

        assert!(matches!(err, DispatchError::TransitionFailed { .. }));
        assert_eq!(
            err.to_string(),
            "Transition from 'Idle' on Start failed: engine not warmed up"
        );
        assert_eq!(machine.current_state(), &WorkflowState::Idle);
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn failing_fallback_is_reported() {
        let mut machine = StateMachineBuilder::<WorkflowState, Command>::new()
            .initial(WorkflowState::Running)
            .try_fallback(|state: &WorkflowState, _: &Command| {
                Err(format!("unexpected event in {}", state.name()).into())
            })
            .build()
            .unwrap();

        let err = machine.handle(Command::Start).unwrap_err();

        assert!(matches!(err, DispatchError::FallbackFailed { .. }));
        assert_eq!(machine.current_state(), &WorkflowState::Running);
    }

    #[test]
    fn panicking_listener_leaves_state_transitioned() {
        let mut machine = StateMachineBuilder::<WorkflowState, Command>::new()
            .initial(WorkflowState::Idle)
            .transition(WorkflowState::Idle, CommandKind::Start, |_| {
                WorkflowState::Running
            })
            .stay_on_unhandled()
            .on_state_change(|_: &WorkflowState, _: &WorkflowState, _: &Command| {
                panic!("listener failure");
            })
            .build()
            .unwrap();

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _ = machine.handle(Command::Start);
        }));

        assert!(result.is_err());
        assert_eq!(machine.current_state(), &WorkflowState::Running);
    }

    #[test]
    fn logging_prefix_reaches_listener() {
        let prefixes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&prefixes);

        struct PrefixListener(Arc<Mutex<Vec<String>>>);

        impl StateChangeListener<WorkflowState, Command> for PrefixListener {
            fn on_state_change(&self, change: &StateChange<'_, WorkflowState, Command>) {
                self.0.lock().push(change.logging_prefix.to_string());
            }
        }

        let mut machine = StateMachineBuilder::<WorkflowState, Command>::new()
            .initial(WorkflowState::Idle)
            .stay_on_unhandled()
            .on_state_change(PrefixListener(sink))
            .build()
            .unwrap();

        machine.handle(Command::Start).unwrap();
        machine.handle_with_prefix(Command::Stop, "worker-1").unwrap();

        assert_eq!(prefixes.lock().as_slice(), &["", "worker-1"]);
    }

    #[test]
    fn sibling_machines_share_table_but_not_state() {
        let seen = Seen::default();
        let mut first = recording_builder(&seen).build().unwrap();
        let mut second = first.with_initial_state(WorkflowState::Running);

        first.handle(Command::Start).unwrap();
        second.handle(Command::Stop).unwrap();

        assert_eq!(first.current_state(), &WorkflowState::Running);
        assert_eq!(second.current_state(), &WorkflowState::Stopped);
        assert_eq!(first.transitions().len(), second.transitions().len());
        assert_eq!(seen.lock().len(), 2);
    }
}
