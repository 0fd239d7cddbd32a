//! Events and their kinds.
//!
//! An event's *kind*, not its value, selects a transition. Events are
//! expected to be closed sum types; the kind is the variant tag.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for values that drive a state machine.
///
/// Most event types are declared with [`event_enum!`](crate::event_enum),
/// which generates the `Kind` enum and this implementation.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Event;
///
/// #[derive(Debug)]
/// enum Command {
///     Start,
///     Resize(u32),
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum CommandKind {
///     Start,
///     Resize,
/// }
///
/// impl Event for Command {
///     type Kind = CommandKind;
///
///     fn kind(&self) -> CommandKind {
///         match self {
///             Self::Start => CommandKind::Start,
///             Self::Resize(_) => CommandKind::Resize,
///         }
///     }
/// }
///
/// assert_eq!(Command::Resize(4).kind(), CommandKind::Resize);
/// ```
pub trait Event: Debug {
    /// Category used as the event half of a transition key.
    type Kind: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Return the category of this event.
    fn kind(&self) -> Self::Kind;
}
