//! Minimal start/stop machine.
//!
//! Key concepts:
//! - Declaring a transition table as a plain `Vec`
//! - Processing events and branching on the result
//! - The diagnostic label attached to every result kind
//!
//! Run with: cargo run --example simple

use gearbox::builder::transition;
use gearbox::{state_set, EventResult, Machine, StateId, Transition};

const INIT: StateId = 0;
const RUN: StateId = 1;
const STOP: StateId = 2;

const START: u8 = 0;
const HALT: u8 = 1;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let rules: Vec<Transition> = vec![
        transition(START, state_set![INIT, STOP], RUN),
        transition(HALT, state_set![RUN], STOP),
    ];

    let mut machine = Machine::new(INIT, &rules).expect("valid table");
    println!("Initial state: {}", machine.current_state());

    for event in [START, HALT, HALT, START] {
        let result = machine.process_event(event, None);
        println!(
            "event {} -> {} (state {})",
            event,
            result.as_str(),
            machine.current_state()
        );
    }

    // The second HALT found no rule sourced at STOP; the label for that
    // outcome is stable and suitable for logs.
    assert_eq!(
        EventResult::NoTransitionForState.as_str(),
        "No transition for state"
    );
}
