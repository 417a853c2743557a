//! Core engine types.
//!
//! This module contains the whole dispatch engine:
//! - State/event identifiers and bitmask state sets
//! - Transition rules with optional guard and action callbacks
//! - The [`Machine`] that advances a current state over a borrowed table
//! - The [`EventResult`] taxonomy and [`InitError`] validation failures
//!
//! Dispatch is a pure linear scan plus two optional callback calls; the
//! engine performs no allocation, no locking, and no I/O of its own.

mod error;
mod machine;
mod outcome;
mod state;
mod transition;

pub use error::InitError;
pub use machine::{Machine, MachineHandle};
pub use outcome::EventResult;
pub use state::{EventId, StateId, StateSet, MAX_STATES};
pub use transition::{ActionFn, GuardFn, Transition};
