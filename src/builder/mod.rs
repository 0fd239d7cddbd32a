//! Builder API for state machine construction.
//!
//! This module provides the fluent [`StateMachineBuilder`] and the
//! [`state_enum!`](crate::state_enum) and [`event_enum!`](crate::event_enum)
//! macros for declaring states and events with minimal boilerplate.
//!
//! # Example
//!
//! ```
//! use switchyard::builder::StateMachineBuilder;
//! use switchyard::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Connection {
//!         Idle,
//!         Open,
//!         Closed,
//!     }
//!     final: [Closed]
//! }
//!
//! event_enum! {
//!     #[derive(Debug)]
//!     enum ConnectionEvent {
//!         Connect { addr: String },
//!         Close(u16),
//!     }
//!     kind: ConnectionEventKind
//! }
//!
//! let mut conn = StateMachineBuilder::<Connection, ConnectionEvent>::new()
//!     .initial(Connection::Idle)
//!     .transition(Connection::Idle, ConnectionEventKind::Connect, |_| Connection::Open)
//!     .transition(Connection::Open, ConnectionEventKind::Close, |_| Connection::Closed)
//!     .stay_on_unhandled()
//!     .build()
//!     .unwrap();
//!
//! conn.handle(ConnectionEvent::Connect { addr: "10.0.0.1:80".into() }).unwrap();
//! conn.handle(ConnectionEvent::Close(1000)).unwrap();
//! assert!(conn.is_final());
//! ```

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
