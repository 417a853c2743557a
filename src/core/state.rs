//! State and event identifiers, and bitmask state sets.
//!
//! States and events are small integer identifiers supplied by the
//! consumer, typically as `const` bindings or `enum` discriminants cast
//! to [`StateId`]/[`EventId`]. A [`StateSet`] packs up to [`MAX_STATES`]
//! states into a single 32-bit mask for O(1) membership tests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Identifier of a single state. Valid states are `0..MAX_STATES`.
pub type StateId = u8;

/// Identifier of an event presented to the machine.
pub type EventId = u8;

/// Maximum number of distinct states a machine can address.
///
/// This is the width of the [`StateSet`] mask; transition targets are
/// validated against it when a [`Machine`](crate::core::Machine) is built.
pub const MAX_STATES: usize = 32;

/// A set of states, one bit per state.
///
/// Bit *i* set means state *i* is a member. Transition rules use a
/// `StateSet` to declare the source states they may fire from.
///
/// States at or above [`MAX_STATES`] are silently outside every set:
/// inserting one is a no-op and membership tests for one return `false`.
///
/// # Example
///
/// ```rust
/// use gearbox::StateSet;
///
/// const IDLE: u8 = 0;
/// const RUNNING: u8 = 1;
/// const STOPPED: u8 = 2;
///
/// let restartable = StateSet::of(&[IDLE, STOPPED]);
///
/// assert!(restartable.contains(IDLE));
/// assert!(restartable.contains(STOPPED));
/// assert!(!restartable.contains(RUNNING));
/// assert_eq!(restartable.len(), 2);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSet(u32);

impl StateSet {
    /// The set containing no states.
    pub const EMPTY: StateSet = StateSet(0);

    /// The set containing a single state.
    pub const fn single(state: StateId) -> StateSet {
        if (state as usize) < MAX_STATES {
            StateSet(1u32 << state)
        } else {
            StateSet(0)
        }
    }

    /// The set containing every state in `states`.
    ///
    /// This is the named list constructor for building source-state
    /// masks; the [`state_set!`](crate::state_set) macro is sugar over it.
    ///
    /// ```rust
    /// use gearbox::StateSet;
    ///
    /// const TABLE: StateSet = StateSet::of(&[0, 2, 4]);
    /// assert_eq!(TABLE.bits(), 0b10101);
    /// ```
    pub const fn of(states: &[StateId]) -> StateSet {
        let mut bits = 0u32;
        let mut i = 0;
        while i < states.len() {
            if (states[i] as usize) < MAX_STATES {
                bits |= 1u32 << states[i];
            }
            i += 1;
        }
        StateSet(bits)
    }

    /// Check whether `state` is a member.
    pub const fn contains(self, state: StateId) -> bool {
        if (state as usize) < MAX_STATES {
            self.0 & (1u32 << state) != 0
        } else {
            false
        }
    }

    /// Return this set with `state` added.
    pub const fn with(self, state: StateId) -> StateSet {
        if (state as usize) < MAX_STATES {
            StateSet(self.0 | (1u32 << state))
        } else {
            self
        }
    }

    /// Add `state` to the set in place.
    pub fn insert(&mut self, state: StateId) {
        *self = self.with(state);
    }

    /// Number of states in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check whether the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The raw 32-bit mask.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Reconstruct a set from a raw mask.
    pub const fn from_bits(bits: u32) -> StateSet {
        StateSet(bits)
    }

    /// Iterate over the member states in ascending order.
    pub fn iter(self) -> impl Iterator<Item = StateId> {
        (0..MAX_STATES as StateId).filter(move |&state| self.contains(state))
    }
}

impl BitOr for StateSet {
    type Output = StateSet;

    fn bitor(self, rhs: StateSet) -> StateSet {
        StateSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for StateSet {
    fn bitor_assign(&mut self, rhs: StateSet) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> StateSet {
        let mut set = StateSet::EMPTY;
        for state in iter {
            set.insert(state);
        }
        set
    }
}

impl Extend<StateId> for StateSet {
    fn extend<I: IntoIterator<Item = StateId>>(&mut self, iter: I) {
        for state in iter {
            self.insert(state);
        }
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateSet")?;
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_contains_nothing() {
        for state in 0..MAX_STATES as StateId {
            assert!(!StateSet::EMPTY.contains(state));
        }
        assert!(StateSet::EMPTY.is_empty());
        assert_eq!(StateSet::EMPTY.len(), 0);
    }

    #[test]
    fn single_sets_exactly_one_bit() {
        let set = StateSet::single(3);
        assert_eq!(set.bits(), 0b1000);
        assert!(set.contains(3));
        assert!(!set.contains(2));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn of_collects_all_listed_states() {
        let set = StateSet::of(&[0, 1, 5]);
        assert!(set.contains(0));
        assert!(set.contains(1));
        assert!(set.contains(5));
        assert!(!set.contains(4));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn out_of_range_states_are_ignored() {
        let set = StateSet::of(&[0, 32, 255]);
        assert_eq!(set.bits(), 0b1);
        assert!(!set.contains(32));
        assert!(!set.contains(255));

        let same = StateSet::single(0).with(40);
        assert_eq!(same, StateSet::single(0));
    }

    #[test]
    fn highest_valid_state_is_representable() {
        let set = StateSet::single(31);
        assert!(set.contains(31));
        assert_eq!(set.bits(), 1 << 31);
    }

    #[test]
    fn union_combines_members() {
        let set = StateSet::single(1) | StateSet::single(4);
        assert!(set.contains(1));
        assert!(set.contains(4));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn from_iterator_builds_set() {
        let set: StateSet = [2u8, 7, 2].into_iter().collect();
        assert_eq!(set, StateSet::of(&[2, 7]));
    }

    #[test]
    fn iter_yields_members_in_order() {
        let set = StateSet::of(&[9, 0, 4]);
        let members: Vec<StateId> = set.iter().collect();
        assert_eq!(members, vec![0, 4, 9]);
    }

    #[test]
    fn serializes_as_raw_mask() {
        let set = StateSet::of(&[0, 3]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "9");

        let back: StateSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
