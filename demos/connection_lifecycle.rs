//! Connection Lifecycle
//!
//! This example models a client connection driven by network events.
//!
//! Key concepts:
//! - Events carrying payloads, dispatched by kind
//! - Fallible transitions
//! - A fallback handler for events that do not apply
//! - Transition logging through `tracing`
//!
//! Run with: cargo run --example connection_lifecycle

use switchyard::{event_enum, state_enum, StateMachineBuilder};

state_enum! {
    enum Connection {
        Disconnected,
        Handshaking,
        Established,
        Closed,
    }
    final: [Closed]
}

event_enum! {
    #[derive(Debug)]
    enum NetEvent {
        Dial { host: String },
        HandshakeDone { protocol: u8 },
        Data(Vec<u8>),
        Hangup,
    }
    kind: NetEventKind
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Connection Lifecycle ===\n");

    let mut conn = StateMachineBuilder::<Connection, NetEvent>::new()
        .initial(Connection::Disconnected)
        .transition(Connection::Disconnected, NetEventKind::Dial, |event| {
            if let NetEvent::Dial { host } = event {
                println!("dialing {host}");
            }
            Connection::Handshaking
        })
        .try_transition(
            Connection::Handshaking,
            NetEventKind::HandshakeDone,
            |event| match event {
                NetEvent::HandshakeDone { protocol } if *protocol >= 2 => {
                    Ok(Connection::Established)
                }
                other => Err(format!("unsupported handshake: {other:?}").into()),
            },
        )
        .transition(Connection::Established, NetEventKind::Data, |event| {
            if let NetEvent::Data(bytes) = event {
                println!("received {} bytes", bytes.len());
            }
            Connection::Established
        })
        .transition(Connection::Established, NetEventKind::Hangup, |_| {
            Connection::Closed
        })
        .fallback(|state, event| {
            println!("ignoring {event:?} in {state:?}");
            *state
        })
        .debug_transitions("client")
        .build()
        .expect("connection machine is fully configured");

    let events = vec![
        NetEvent::Data(vec![0; 4]),
        NetEvent::Dial {
            host: "example.net:443".to_string(),
        },
        NetEvent::HandshakeDone { protocol: 1 },
        NetEvent::HandshakeDone { protocol: 3 },
        NetEvent::Data(vec![1, 2, 3]),
        NetEvent::Hangup,
        NetEvent::Data(vec![9]),
    ];

    for (i, event) in events.into_iter().enumerate() {
        let prefix = format!("#{i}");
        match conn.handle_with_prefix(event, &prefix) {
            Ok(state) => println!("{prefix}: now {state:?}"),
            Err(err) => println!("{prefix}: {err}"),
        }
    }

    println!("\nFinal state: {:?}", conn.current_state());
    println!("Terminal: {}", conn.is_final());
    println!("\n=== Example Complete ===");
}
