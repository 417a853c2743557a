//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{
    ActionFn, EventId, GuardFn, MachineHandle, StateId, StateSet, Transition, MAX_STATES,
};

/// Builder for constructing transition rules with a fluent API.
///
/// Event, source set, and target state are required; guard and action
/// are optional. The target is validated against [`MAX_STATES`] here as
/// well, so a malformed rule is caught as early as possible.
///
/// # Example
///
/// ```rust
/// use gearbox::builder::TransitionBuilder;
/// use gearbox::state_set;
///
/// const ACCEPTING: u8 = 1;
/// const DISPENSING: u8 = 2;
/// const SELECT_ITEM: u8 = 1;
///
/// let rule = TransitionBuilder::<u32>::new()
///     .on(SELECT_ITEM)
///     .from(state_set![ACCEPTING])
///     .to(DISPENSING)
///     .when(|handle, _| handle.context().copied().unwrap_or(0) >= 10)
///     .run(|handle, _| {
///         if let Some(balance) = handle.context_mut() {
///             *balance -= 10;
///         }
///     })
///     .build()
///     .unwrap();
///
/// assert!(rule.has_guard());
/// assert!(rule.has_action());
/// ```
pub struct TransitionBuilder<C = (), D = ()> {
    event: Option<EventId>,
    sources: StateSet,
    target: Option<StateId>,
    guard: Option<Box<GuardFn<C, D>>>,
    action: Option<Box<ActionFn<C, D>>>,
}

impl<C, D> TransitionBuilder<C, D> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            event: None,
            sources: StateSet::EMPTY,
            target: None,
            guard: None,
            action: None,
        }
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: EventId) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the source state set (required, must be non-empty).
    pub fn from(mut self, sources: StateSet) -> Self {
        self.sources = sources;
        self
    }

    /// Set the source states from a list of state identifiers.
    pub fn from_states(self, states: &[StateId]) -> Self {
        self.from(StateSet::of(states))
    }

    /// Set the target state (required).
    pub fn to(mut self, target: StateId) -> Self {
        self.target = Some(target);
        self
    }

    /// Attach a guard predicate (optional).
    ///
    /// The guard returns `true` to allow the transition.
    pub fn when<F>(mut self, guard: F) -> Self
    where
        F: Fn(&mut MachineHandle<'_, C>, Option<&D>) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Box::new(guard));
        self
    }

    /// Attach an action callback (optional).
    ///
    /// The action runs after the transition commits.
    pub fn run<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut MachineHandle<'_, C>, Option<&D>) + Send + Sync + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    /// Build the transition rule.
    pub fn build(self) -> Result<Transition<C, D>, BuildError> {
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        if self.sources.is_empty() {
            return Err(BuildError::MissingSourceStates);
        }
        let target = self.target.ok_or(BuildError::MissingTargetState)?;
        if target as usize >= MAX_STATES {
            return Err(BuildError::TargetOutOfRange(target));
        }

        Ok(Transition {
            event,
            sources: self.sources,
            target,
            guard: self.guard,
            action: self.action,
        })
    }
}

impl<C, D> Default for TransitionBuilder<C, D> {
    fn default() -> Self {
        Self::new()
    }
}
