//! Listener that logs one line per transition.

use super::{StateChange, StateChangeListener};
use crate::core::{Event, State};
use std::fmt::Debug;

/// Render a transition as `"<prefix> <event>: <old> -> <new>"`.
///
/// # Example
///
/// ```rust
/// use switchyard::listener::format_transition;
///
/// let line = format_transition("conn-7", &"Close", &"Open", &"Closed");
/// assert_eq!(line, r#"conn-7 "Close": "Open" -> "Closed""#);
/// ```
pub fn format_transition<E, S>(prefix: &str, event: &E, from: &S, to: &S) -> String
where
    E: Debug + ?Sized,
    S: Debug + ?Sized,
{
    format!("{} {:?}: {:?} -> {:?}", prefix, event, from, to)
}

/// Emits an informational `tracing` record for every transition.
///
/// The prefix is the one given at construction followed by the per-call
/// logging prefix; empty parts are left out.
#[derive(Clone, Debug, Default)]
pub struct DebugTransitions {
    prefix: String,
}

impl DebugTransitions {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Combine the configured prefix with a per-call one.
    pub(crate) fn effective_prefix(&self, logging_prefix: &str) -> String {
        match (self.prefix.is_empty(), logging_prefix.is_empty()) {
            (_, true) => self.prefix.clone(),
            (true, false) => logging_prefix.to_string(),
            (false, false) => format!("{} {}", self.prefix, logging_prefix),
        }
    }
}

impl<S: State, E: Event> StateChangeListener<S, E> for DebugTransitions {
    fn on_state_change(&self, change: &StateChange<'_, S, E>) {
        let prefix = self.effective_prefix(change.logging_prefix);
        tracing::info!(
            "{}",
            format_transition(&prefix, change.event, change.from, change.to)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Link {
        Down,
        Up,
    }

    #[test]
    fn formats_fixed_shape() {
        let line = format_transition("link", &"Connect", &Link::Down, &Link::Up);
        assert_eq!(line, "link \"Connect\": Down -> Up");
    }

    #[test]
    fn formats_self_transition() {
        let line = format_transition("link", &7u32, &Link::Up, &Link::Up);
        assert_eq!(line, "link 7: Up -> Up");
    }

    #[test]
    fn effective_prefix_joins_non_empty_parts() {
        let configured = DebugTransitions::new("pool");
        assert_eq!(configured.effective_prefix(""), "pool");
        assert_eq!(configured.effective_prefix("conn-3"), "pool conn-3");

        let bare = DebugTransitions::default();
        assert_eq!(bare.effective_prefix("conn-3"), "conn-3");
        assert_eq!(bare.effective_prefix(""), "");
    }
}
