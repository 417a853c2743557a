//! Result taxonomy for event dispatch.
//!
//! Every call to [`Machine::process_event`](crate::core::Machine::process_event)
//! yields exactly one [`EventResult`]. The non-success kinds are ordinary,
//! expected outcomes, not errors: they tell the caller *why* an event
//! produced no state change.
//!
//! Each kind has a stable numeric code and a fixed human-readable label,
//! both part of the observable contract so callers can log and serialize
//! results without drift.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Outcome of processing a single event.
///
/// # Example
///
/// ```rust
/// use gearbox::EventResult;
///
/// assert_eq!(EventResult::Success.code(), 0x00);
/// assert_eq!(EventResult::GuardDenied.as_str(), "Guard denied");
/// assert_eq!(EventResult::from_code(0x02), Some(EventResult::NoTransitionForState));
/// assert_eq!(EventResult::describe(0xff), "Unknown");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EventResult {
    /// The event matched a rule and the state transitioned.
    Success = 0x00,

    /// A rule matched but its guard refused the transition.
    GuardDenied = 0x01,

    /// No rule matches this event in the current state.
    NoTransitionForState = 0x02,

    /// Reserved: the event identifier is out of range.
    ///
    /// Dispatch never produces this today; the code is kept stable for
    /// callers that already branch on the full taxonomy.
    EventOutOfBounds = 0x03,

    /// Reserved: the machine state is out of range.
    ///
    /// Dispatch never produces this today. Out-of-range states cannot
    /// arise from committed transitions, since every rule target is
    /// validated at machine construction.
    StateOutOfBounds = 0x04,

    /// Construction-time validation failed.
    ///
    /// Produced via [`InitError::result`](crate::core::InitError::result)
    /// rather than by dispatch itself.
    InvalidParams = 0x05,
}

impl EventResult {
    const ALL: [EventResult; 6] = [
        EventResult::Success,
        EventResult::GuardDenied,
        EventResult::NoTransitionForState,
        EventResult::EventOutOfBounds,
        EventResult::StateOutOfBounds,
        EventResult::InvalidParams,
    ];

    /// The stable numeric code of this result kind.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a result kind by its numeric code.
    pub fn from_code(code: u8) -> Option<EventResult> {
        EventResult::ALL.into_iter().find(|r| r.code() == code)
    }

    /// The fixed diagnostic label for this result kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            EventResult::Success => "Success",
            EventResult::GuardDenied => "Guard denied",
            EventResult::NoTransitionForState => "No transition for state",
            EventResult::EventOutOfBounds => "Event out of bounds",
            EventResult::StateOutOfBounds => "State out of bounds",
            EventResult::InvalidParams => "Invalid parameters",
        }
    }

    /// Total diagnostic mapping over raw codes.
    ///
    /// Codes outside the taxonomy map to `"Unknown"` rather than
    /// panicking, so the function is safe to feed with logged or
    /// deserialized values.
    pub fn describe(code: u8) -> &'static str {
        match EventResult::from_code(code) {
            Some(result) => result.as_str(),
            None => "Unknown",
        }
    }

    /// Check whether this result committed a transition.
    pub const fn is_success(self) -> bool {
        matches!(self, EventResult::Success)
    }
}

impl fmt::Display for EventResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized as the stable numeric code, not the variant name.
impl Serialize for EventResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for EventResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        EventResult::from_code(code)
            .ok_or_else(|| D::Error::custom(format!("unknown event result code {code}")))
    }
}
