//! Macros for ergonomic table construction.

/// Build a [`StateSet`](crate::StateSet) from a list of states.
///
/// Sugar over [`StateSet::of`](crate::StateSet::of); usable in `const`
/// context.
///
/// # Example
///
/// ```rust
/// use gearbox::{state_set, StateSet};
///
/// const IDLE: u8 = 0;
/// const ACCEPTING: u8 = 1;
///
/// let sources = state_set![IDLE, ACCEPTING];
/// assert_eq!(sources, StateSet::of(&[IDLE, ACCEPTING]));
/// assert_eq!(state_set![], StateSet::EMPTY);
/// ```
#[macro_export]
macro_rules! state_set {
    () => {
        $crate::core::StateSet::EMPTY
    };
    ($($state:expr),+ $(,)?) => {
        $crate::core::StateSet::of(&[$($state),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::StateSet;

    #[test]
    fn macro_matches_list_constructor() {
        assert_eq!(state_set![0, 2, 5], StateSet::of(&[0, 2, 5]));
        assert_eq!(state_set![3], StateSet::single(3));
        assert_eq!(state_set![1, 2,], StateSet::of(&[1, 2]));
    }

    #[test]
    fn empty_invocation_is_the_empty_set() {
        assert!(state_set![].is_empty());
    }

    #[test]
    fn macro_works_in_const_context() {
        const SOURCES: StateSet = state_set![0, 31];
        assert!(SOURCES.contains(0));
        assert!(SOURCES.contains(31));
    }
}
