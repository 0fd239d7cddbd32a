//! Transition table keys.

use super::state::State;
use std::hash::Hash;

/// Identity of a transition: the state it leaves and the event kind that
/// triggers it.
///
/// Two keys are equal when their states are equal and their kinds are the
/// same variant tag.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{State, TransitionKey};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Phase { Open, Closed }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// let a = TransitionKey::new(Phase::Open, "close");
/// let b = TransitionKey::new(Phase::Open, "close");
/// assert_eq!(a, b);
/// assert_ne!(a, TransitionKey::new(Phase::Closed, "close"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransitionKey<S: State, K> {
    pub state: S,
    pub kind: K,
}

impl<S: State, K: Copy + Eq + Hash> TransitionKey<S, K> {
    pub fn new(state: S, kind: K) -> Self {
        Self { state, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
        Running,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
            }
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Kind {
        Start,
        Stop,
    }

    #[test]
    fn keys_differ_by_state_or_kind() {
        let base = TransitionKey::new(TestState::Idle, Kind::Start);

        assert_eq!(base, TransitionKey::new(TestState::Idle, Kind::Start));
        assert_ne!(base, TransitionKey::new(TestState::Running, Kind::Start));
        assert_ne!(base, TransitionKey::new(TestState::Idle, Kind::Stop));
    }

    #[test]
    fn equal_keys_collide_in_map() {
        let mut map = HashMap::new();
        map.insert(TransitionKey::new(TestState::Idle, Kind::Start), 1);
        map.insert(TransitionKey::new(TestState::Idle, Kind::Start), 2);

        assert_eq!(map.len(), 1);
        assert_eq!(map[&TransitionKey::new(TestState::Idle, Kind::Start)], 2);
    }
}
