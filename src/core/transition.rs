//! Transition rules and their guard/action callbacks.

use super::machine::MachineHandle;
use super::state::{EventId, StateId, StateSet};

/// Guard predicate consulted before a matched rule commits.
///
/// Receives a [`MachineHandle`] (state still the *source* state) and the
/// event payload. Returns `true` to allow the transition, `false` to
/// deny it. A denying guard may record a reason in the user context; the
/// engine itself never interprets the context.
pub type GuardFn<C, D> = dyn Fn(&mut MachineHandle<'_, C>, Option<&D>) -> bool + Send + Sync;

/// Action callback run after a transition commits.
///
/// Receives a [`MachineHandle`] whose state is already the *target*
/// state, plus the event payload.
pub type ActionFn<C, D> = dyn Fn(&mut MachineHandle<'_, C>, Option<&D>) + Send + Sync;

/// A single transition rule: on `event`, from any state in `sources`,
/// move to `target`, subject to an optional guard and followed by an
/// optional action.
///
/// Rules are immutable once built. Tables are ordered sequences of
/// rules; dispatch selects the first rule matching the event and the
/// current state, so rule order is significant when rules overlap.
///
/// `C` is the machine's user-context type, `D` the event payload type.
///
/// # Example
///
/// ```rust
/// use gearbox::{state_set, Transition};
///
/// const STOPPED: u8 = 0;
/// const RUNNING: u8 = 1;
/// const START: u8 = 0;
///
/// let rule: Transition = Transition::new(START, state_set![STOPPED], RUNNING);
/// assert!(rule.matches(START, STOPPED));
/// assert!(!rule.matches(START, RUNNING));
/// ```
pub struct Transition<C = (), D = ()> {
    pub(crate) event: EventId,
    pub(crate) sources: StateSet,
    pub(crate) target: StateId,
    pub(crate) guard: Option<Box<GuardFn<C, D>>>,
    pub(crate) action: Option<Box<ActionFn<C, D>>>,
}

impl<C, D> Transition<C, D> {
    /// Build a bare rule with no guard and no action.
    ///
    /// Use [`TransitionBuilder`](crate::builder::TransitionBuilder) to
    /// attach callbacks.
    pub fn new(event: EventId, sources: StateSet, target: StateId) -> Self {
        Transition {
            event,
            sources,
            target,
            guard: None,
            action: None,
        }
    }

    /// The event that triggers this rule.
    pub fn event(&self) -> EventId {
        self.event
    }

    /// The set of states this rule may fire from.
    pub fn sources(&self) -> StateSet {
        self.sources
    }

    /// The state the machine moves to when this rule fires.
    pub fn target(&self) -> StateId {
        self.target
    }

    /// Whether a guard is attached.
    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }

    /// Whether an action is attached.
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Check whether this rule applies to `event` in `state`.
    ///
    /// Pure membership test; the guard, if any, is not consulted.
    pub fn matches(&self, event: EventId, state: StateId) -> bool {
        self.event == event && self.sources.contains(state)
    }
}

impl<C, D> std::fmt::Debug for Transition<C, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("event", &self.event)
            .field("sources", &self.sources)
            .field("target", &self.target)
            .field("guard", &self.guard.as_ref().map(|_| ".."))
            .field("action", &self.action.as_ref().map(|_| ".."))
            .finish()
    }
}
