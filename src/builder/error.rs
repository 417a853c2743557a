//! Build errors for the transition builder.

use thiserror::Error;

use crate::core::{StateId, MAX_STATES};

/// Errors that can occur when building a transition rule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Triggering event not specified. Call .on(event) before .build()")]
    MissingEvent,

    #[error("Source states not specified. Call .from(states) with a non-empty set")]
    MissingSourceStates,

    #[error("Target state not specified. Call .to(state) before .build()")]
    MissingTargetState,

    #[error("Target state {0} is outside the {MAX_STATES}-state range")]
    TargetOutOfRange(StateId),
}
