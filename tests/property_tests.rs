//! Property-based tests for the dispatch engine.
//!
//! These tests use proptest to verify dispatch properties hold across
//! many randomly generated tables and event sequences.

use gearbox::{EventId, EventResult, Machine, StateId, StateSet, Transition, MAX_STATES};
use proptest::prelude::*;

/// Plain description of a rule, kept separate from `Transition` so the
/// oracle below can re-derive expected outcomes without the engine.
#[derive(Clone, Debug)]
struct RuleSpec {
    event: EventId,
    sources: u32,
    target: StateId,
}

fn build_table(specs: &[RuleSpec]) -> Vec<Transition> {
    specs
        .iter()
        .map(|spec| Transition::new(spec.event, StateSet::from_bits(spec.sources), spec.target))
        .collect()
}

/// Reference first-match scan: the earliest rule whose event matches
/// and whose mask contains `state`.
fn first_match(specs: &[RuleSpec], event: EventId, state: StateId) -> Option<&RuleSpec> {
    specs
        .iter()
        .find(|spec| spec.event == event && StateSet::from_bits(spec.sources).contains(state))
}

prop_compose! {
    fn arbitrary_rule()(
        event in 0..8u8,
        sources in any::<u32>(),
        target in 0..MAX_STATES as StateId,
    ) -> RuleSpec {
        RuleSpec { event, sources, target }
    }
}

prop_compose! {
    fn arbitrary_table()(specs in prop::collection::vec(arbitrary_rule(), 1..12)) -> Vec<RuleSpec> {
        specs
    }
}

proptest! {
    #[test]
    fn dispatch_matches_reference_scan(
        specs in arbitrary_table(),
        initial in 0..MAX_STATES as StateId,
        events in prop::collection::vec(0..8u8, 0..20),
    ) {
        let table = build_table(&specs);
        let mut machine = Machine::new(initial, &table).unwrap();
        let mut expected_state = initial;

        for event in events {
            let result = machine.process_event(event, None);

            match first_match(&specs, event, expected_state) {
                Some(rule) => {
                    prop_assert_eq!(result, EventResult::Success);
                    expected_state = rule.target;
                }
                None => prop_assert_eq!(result, EventResult::NoTransitionForState),
            }
            prop_assert_eq!(machine.current_state(), expected_state);
        }
    }

    #[test]
    fn dispatch_is_deterministic(
        specs in arbitrary_table(),
        initial in 0..MAX_STATES as StateId,
        events in prop::collection::vec(0..8u8, 0..20),
    ) {
        let table = build_table(&specs);

        let mut first = Machine::new(initial, &table).unwrap();
        let mut second = Machine::new(initial, &table).unwrap();

        for event in events {
            let a = first.process_event(event, None);
            let b = second.process_event(event, None);
            prop_assert_eq!(a, b);
            prop_assert_eq!(first.current_state(), second.current_state());
        }
    }

    #[test]
    fn earlier_rule_shadows_later_duplicate(
        specs in arbitrary_table(),
        event in 0..8u8,
        source in 0..MAX_STATES as StateId,
        first_target in 0..MAX_STATES as StateId,
        second_target in 0..MAX_STATES as StateId,
    ) {
        // Two rules with the same (event, source) pair, front of table:
        // only the earlier one is ever reachable, whatever follows.
        let mut full = vec![
            RuleSpec { event, sources: StateSet::single(source).bits(), target: first_target },
            RuleSpec { event, sources: StateSet::single(source).bits(), target: second_target },
        ];
        full.extend(specs);

        let table = build_table(&full);
        let mut machine = Machine::new(source, &table).unwrap();

        prop_assert_eq!(machine.process_event(event, None), EventResult::Success);
        prop_assert_eq!(machine.current_state(), first_target);
    }

    #[test]
    fn no_match_leaves_state_unchanged(
        specs in arbitrary_table(),
        initial in 0..MAX_STATES as StateId,
        event in 0..8u8,
    ) {
        prop_assume!(first_match(&specs, event, initial).is_none());

        let table = build_table(&specs);
        let mut machine = Machine::new(initial, &table).unwrap();

        prop_assert_eq!(machine.process_event(event, None), EventResult::NoTransitionForState);
        prop_assert_eq!(machine.current_state(), initial);
    }

    #[test]
    fn committed_state_is_always_in_range(
        specs in arbitrary_table(),
        initial in 0..MAX_STATES as StateId,
        events in prop::collection::vec(0..8u8, 1..20),
    ) {
        let table = build_table(&specs);
        let mut machine = Machine::new(initial, &table).unwrap();

        for event in events {
            machine.process_event(event, None);
            prop_assert!((machine.current_state() as usize) < MAX_STATES);
        }
    }

    #[test]
    fn result_codes_survive_serialization(result_code in 0..3u8) {
        let result = EventResult::from_code(result_code).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: EventResult = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, result);
        prop_assert_eq!(json, result_code.to_string());
    }
}
