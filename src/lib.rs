//! Gearbox: a table-driven finite state machine engine.
//!
//! A machine is a current state advanced over an immutable, caller-owned
//! table of transition rules. Each rule names a triggering event, a
//! bitmask of source states, a target state, and optionally a guard
//! predicate and an action callback. Processing an event is a linear
//! scan for the first matching rule: the guard (if any) decides, the
//! state commits, the action (if any) runs with the new state already
//! visible.
//!
//! # Core Concepts
//!
//! - **States and events**: small integer identifiers ([`StateId`],
//!   [`EventId`]); up to [`MAX_STATES`] states per machine
//! - **StateSet**: bit-per-state source masks with O(1) membership
//! - **First-match policy**: rule order in the table is significant
//! - **User context**: a typed value threaded untouched to guards and
//!   actions
//!
//! The engine is synchronous and single-threaded: no queuing, no
//! locking, no allocation during dispatch.
//!
//! # Example
//!
//! ```rust
//! use gearbox::builder::transition;
//! use gearbox::{state_set, EventResult, Machine, Transition};
//!
//! const RED: u8 = 0;
//! const GREEN: u8 = 1;
//! const YELLOW: u8 = 2;
//! const TIMEOUT: u8 = 0;
//!
//! let rules: Vec<Transition> = vec![
//!     transition(TIMEOUT, state_set![RED], GREEN),
//!     transition(TIMEOUT, state_set![GREEN], YELLOW),
//!     transition(TIMEOUT, state_set![YELLOW], RED),
//! ];
//!
//! let mut light = Machine::new(RED, &rules).expect("valid table");
//!
//! assert_eq!(light.process_event(TIMEOUT, None), EventResult::Success);
//! assert_eq!(light.current_state(), GREEN);
//! assert_eq!(light.process_event(TIMEOUT, None), EventResult::Success);
//! assert_eq!(light.current_state(), YELLOW);
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use self::core::{
    ActionFn, EventId, EventResult, GuardFn, InitError, Machine, MachineHandle, StateId, StateSet,
    Transition, MAX_STATES,
};
