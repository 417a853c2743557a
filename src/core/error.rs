//! Construction-time validation failures.

use thiserror::Error;

use super::outcome::EventResult;
use super::state::{StateId, MAX_STATES};

/// Errors detected while validating a transition table.
///
/// These are fatal to construction: no [`Machine`](crate::core::Machine)
/// is produced, and no guard or action has run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InitError {
    #[error("transition table must contain at least one rule")]
    EmptyTable,

    #[error("rule {index} targets state {target}, which is outside the {MAX_STATES}-state range")]
    TargetOutOfRange { index: usize, target: StateId },
}

impl InitError {
    /// Map this error onto the result taxonomy.
    ///
    /// Callers that log numeric result codes can fold construction
    /// failures into the same stream as per-event outcomes.
    pub const fn result(&self) -> EventResult {
        EventResult::InvalidParams
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_init_error_maps_to_invalid_params() {
        assert_eq!(InitError::EmptyTable.result(), EventResult::InvalidParams);
        assert_eq!(
            InitError::TargetOutOfRange { index: 0, target: 40 }.result(),
            EventResult::InvalidParams
        );
    }

    #[test]
    fn messages_name_the_offending_rule() {
        let err = InitError::TargetOutOfRange { index: 2, target: 33 };
        let msg = err.to_string();
        assert!(msg.contains("rule 2"));
        assert!(msg.contains("state 33"));
    }
}
