//! Macros for ergonomic state and event declaration.

/// Generate a State trait implementation for simple enums.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug` and
/// serde's `Serialize`/`Deserialize`.
///
/// # Example
///
/// ```
/// use switchyard::state_enum;
///
/// state_enum! {
///     pub enum HandshakeState {
///         Start,
///         Negotiating,
///         Established,
///         Aborted,
///     }
///     final: [Established, Aborted]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Declare an event enum together with a fieldless kind enum and the
/// [`Event`](crate::core::Event) implementation linking them.
///
/// Variants may be unit, tuple or struct variants. The kind enum has one
/// variant per event variant, with the same name, and derives `Clone`,
/// `Copy`, `PartialEq`, `Eq`, `Hash` and `Debug`. Derives on the event enum
/// itself are up to the caller; `Debug` is required.
///
/// # Example
///
/// ```
/// use switchyard::core::Event;
/// use switchyard::event_enum;
///
/// event_enum! {
///     #[derive(Debug, Clone)]
///     pub enum PeerEvent {
///         Hello { version: u8 },
///         Payload(Vec<u8>),
///         Goodbye,
///     }
///     kind: PeerEventKind
/// }
///
/// assert_eq!(PeerEvent::Payload(vec![1, 2]).kind(), PeerEventKind::Payload);
/// assert_eq!(PeerEvent::Hello { version: 2 }.kind(), PeerEventKind::Hello);
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
                $( ( $($tuple:tt)* ) )?
                $( { $($fields:tt)* } )?
            ),* $(,)?
        }

        kind: $kind:ident
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
                $( ( $($tuple)* ) )?
                $( { $($fields)* } )?
            ),*
        }

        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $kind {
            $($variant),*
        }

        impl $crate::core::Event for $name {
            type Kind = $kind;

            fn kind(&self) -> $kind {
                match self {
                    $(Self::$variant { .. } => $kind::$variant,)*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
            Failed,
        }
        final: [Complete, Failed]
    }

    event_enum! {
        #[derive(Debug, Clone, PartialEq)]
        enum TestEvent {
            Begin,
            Progress(u8),
            Fail { reason: String },
        }
        kind: TestEventKind
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        let state = TestState::Initial;
        assert_eq!(state.name(), "Initial");
        assert!(!state.is_final());

        assert_eq!(TestState::Processing.name(), "Processing");
        assert!(TestState::Complete.is_final());
        assert!(TestState::Failed.is_final());
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
            final: [B]
        }

        assert!(PublicState::B.is_final());
    }

    #[test]
    fn state_enum_works_without_final() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        assert!(!MinimalState::One.is_final());
        assert!(!MinimalState::Two.is_final());
    }

    #[test]
    fn event_enum_maps_every_variant_shape() {
        assert_eq!(TestEvent::Begin.kind(), TestEventKind::Begin);
        assert_eq!(TestEvent::Progress(40).kind(), TestEventKind::Progress);
        assert_eq!(
            TestEvent::Fail {
                reason: "disk full".to_string()
            }
            .kind(),
            TestEventKind::Fail
        );
    }

    #[test]
    fn event_enum_keeps_caller_derives() {
        let event = TestEvent::Progress(7);
        assert_eq!(event.clone(), TestEvent::Progress(7));
        assert_eq!(format!("{:?}", event), "Progress(7)");
    }
}
