//! The dispatch engine: a current state advanced over a borrowed
//! transition table.

use tracing::{debug, trace};

use super::error::InitError;
use super::outcome::EventResult;
use super::state::{EventId, StateId, MAX_STATES};
use super::transition::Transition;

/// The view of a machine passed to guards and actions.
///
/// Callbacks never receive the machine itself; they receive this handle,
/// which exposes the current state and the user context. For a guard the
/// state is still the source state; for an action it is already the
/// committed target state.
pub struct MachineHandle<'m, C> {
    pub(crate) state: StateId,
    pub(crate) context: &'m mut Option<C>,
}

impl<C> MachineHandle<'_, C> {
    /// The machine's current state as seen by this callback.
    pub fn state(&self) -> StateId {
        self.state
    }

    /// Shared access to the user context, if one was set.
    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }

    /// Mutable access to the user context, if one was set.
    ///
    /// Guards conventionally use this to report *why* they denied a
    /// transition; actions use it to apply their side effects.
    pub fn context_mut(&mut self) -> Option<&mut C> {
        self.context.as_mut()
    }
}

/// A finite state machine over a borrowed transition table.
///
/// The machine owns none of the table: it holds a reference for its own
/// lifetime, never copies or mutates the rules, and cannot outlive them.
/// The only mutable engine state is the current state identifier and the
/// optional user context `C`, which is threaded through to guards and
/// actions untouched.
///
/// Dispatch is synchronous and single-threaded; a machine shared across
/// threads must be serialized externally.
///
/// # Example
///
/// ```rust
/// use gearbox::builder::transition;
/// use gearbox::{state_set, EventResult, Machine, Transition};
///
/// const RED: u8 = 0;
/// const GREEN: u8 = 1;
/// const YELLOW: u8 = 2;
/// const TIMEOUT: u8 = 0;
///
/// let rules: Vec<Transition> = vec![
///     transition(TIMEOUT, state_set![RED], GREEN),
///     transition(TIMEOUT, state_set![GREEN], YELLOW),
///     transition(TIMEOUT, state_set![YELLOW], RED),
/// ];
///
/// let mut light = Machine::new(RED, &rules).unwrap();
/// assert_eq!(light.process_event(TIMEOUT, None), EventResult::Success);
/// assert_eq!(light.current_state(), GREEN);
/// ```
pub struct Machine<'t, C = (), D = ()> {
    current: StateId,
    rules: &'t [Transition<C, D>],
    context: Option<C>,
}

impl<'t, C, D> Machine<'t, C, D> {
    /// Create a machine over `rules`, starting in `initial`.
    ///
    /// The table must be non-empty and every rule's target state must be
    /// below [`MAX_STATES`]. The initial state is deliberately *not*
    /// validated against the table: a machine may legitimately start in
    /// a state no rule leads back to, or one outside the mask range that
    /// only ever acts as a source of nothing.
    ///
    /// No guard or action runs during construction, and the context
    /// starts unset.
    pub fn new(initial: StateId, rules: &'t [Transition<C, D>]) -> Result<Self, InitError> {
        if rules.is_empty() {
            return Err(InitError::EmptyTable);
        }
        for (index, rule) in rules.iter().enumerate() {
            if rule.target as usize >= MAX_STATES {
                return Err(InitError::TargetOutOfRange {
                    index,
                    target: rule.target,
                });
            }
        }

        trace!(initial, rules = rules.len(), "machine initialized");
        Ok(Machine {
            current: initial,
            rules,
            context: None,
        })
    }

    /// Process one event against the table.
    ///
    /// Scans the rules in declaration order and selects the **first**
    /// rule whose event matches and whose source set contains the
    /// current state; later overlapping rules are unreachable, which is
    /// the caller's responsibility to avoid. If the selected rule has a
    /// guard, the guard decides; on denial the state is unchanged and
    /// the action is skipped. Otherwise the state is committed to the
    /// rule's target *before* the action runs, so an action querying the
    /// handle observes the new state.
    ///
    /// Runs in O(table length) with no allocation and returns after any
    /// callbacks have completed.
    pub fn process_event(&mut self, event: EventId, data: Option<&D>) -> EventResult {
        let rules = self.rules;
        for rule in rules {
            if !rule.matches(event, self.current) {
                continue;
            }

            if let Some(guard) = &rule.guard {
                let mut handle = MachineHandle {
                    state: self.current,
                    context: &mut self.context,
                };
                if !guard(&mut handle, data) {
                    debug!(event, state = self.current, "guard denied transition");
                    return EventResult::GuardDenied;
                }
            }

            let from = self.current;
            self.current = rule.target;
            if let Some(action) = &rule.action {
                let mut handle = MachineHandle {
                    state: self.current,
                    context: &mut self.context,
                };
                action(&mut handle, data);
            }
            debug!(event, from, to = self.current, "transition committed");
            return EventResult::Success;
        }

        trace!(event, state = self.current, "no transition for state");
        EventResult::NoTransitionForState
    }

    /// The machine's current state.
    pub fn current_state(&self) -> StateId {
        self.current
    }

    /// Install a user context, returning the previous one if any.
    ///
    /// The engine never reads or interprets the context; it exists
    /// purely to be handed to guards and actions.
    pub fn set_context(&mut self, context: C) -> Option<C> {
        self.context.replace(context)
    }

    /// Shared access to the user context, if one was set.
    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }

    /// Mutable access to the user context, if one was set.
    pub fn context_mut(&mut self) -> Option<&mut C> {
        self.context.as_mut()
    }
}
