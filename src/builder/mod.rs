//! Fluent construction of transition rules.
//!
//! Tables are plain `Vec<Transition>` values owned by the caller; this
//! module only helps build the individual rules with minimal
//! boilerplate.

pub mod error;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use transition::TransitionBuilder;

use crate::core::{EventId, MachineHandle, StateId, StateSet, Transition};

/// Create a plain rule with no guard and no action.
///
/// # Panics
///
/// Panics if `sources` is empty or `target` is out of range; use
/// [`TransitionBuilder`] directly to handle those as errors.
///
/// # Example
///
/// ```rust
/// use gearbox::builder::transition;
/// use gearbox::{state_set, Transition};
///
/// const INIT: u8 = 0;
/// const RUN: u8 = 1;
/// const START: u8 = 0;
///
/// let rule: Transition = transition(START, state_set![INIT], RUN);
/// assert!(rule.matches(START, INIT));
/// ```
pub fn transition<C, D>(event: EventId, sources: StateSet, target: StateId) -> Transition<C, D> {
    TransitionBuilder::new()
        .on(event)
        .from(sources)
        .to(target)
        .build()
        .expect("plain transition rule should always build")
}

/// Create a rule gated by a guard predicate.
///
/// # Panics
///
/// Panics under the same conditions as [`transition`].
///
/// # Example
///
/// ```rust
/// use gearbox::builder::guarded;
/// use gearbox::{state_set, Transition};
///
/// const IDLE: u8 = 0;
/// const ARMED: u8 = 1;
/// const ARM: u8 = 0;
///
/// let rule: Transition<bool> = guarded(ARM, state_set![IDLE], ARMED, |handle, _| {
///     handle.context().copied().unwrap_or(false)
/// });
/// assert!(rule.has_guard());
/// ```
pub fn guarded<C, D, F>(
    event: EventId,
    sources: StateSet,
    target: StateId,
    guard: F,
) -> Transition<C, D>
where
    F: Fn(&mut MachineHandle<'_, C>, Option<&D>) -> bool + Send + Sync + 'static,
{
    TransitionBuilder::new()
        .on(event)
        .from(sources)
        .to(target)
        .when(guard)
        .build()
        .expect("guarded transition rule should always build")
}
