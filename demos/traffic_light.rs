//! Traffic light with an emergency mode.
//!
//! Key concepts:
//! - Cyclic transitions driven by a single timeout event
//! - A guard that consults the user context to limit emergency mode
//! - Actions reprogramming the timer stored in the context
//!
//! Run with: cargo run --example traffic_light

use gearbox::builder::{transition, TransitionBuilder};
use gearbox::{state_set, EventResult, Machine, MachineHandle, StateId, Transition};

const RED: StateId = 0;
const GREEN: StateId = 1;
const YELLOW: StateId = 2;
const EMERGENCY: StateId = 3;

const TIMEOUT: u8 = 0;
const ALARM: u8 = 1;
const RESET: u8 = 2;

struct LightContext {
    red_duration: u32,
    green_duration: u32,
    yellow_duration: u32,
    current_timer: u32,
    emergency_count: u32,
}

fn name(state: StateId) -> &'static str {
    match state {
        RED => "RED",
        GREEN => "GREEN",
        YELLOW => "YELLOW",
        EMERGENCY => "EMERGENCY",
        _ => "?",
    }
}

fn rules() -> Vec<Transition<LightContext>> {
    vec![
        TransitionBuilder::new()
            .on(TIMEOUT)
            .from(state_set![RED])
            .to(GREEN)
            .run(|handle: &mut MachineHandle<'_, LightContext>, _| {
                if let Some(ctx) = handle.context_mut() {
                    ctx.current_timer = ctx.green_duration;
                    println!("+ Green light on, you may proceed for {}s.", ctx.current_timer);
                }
            })
            .build()
            .unwrap(),
        TransitionBuilder::new()
            .on(TIMEOUT)
            .from(state_set![GREEN])
            .to(YELLOW)
            .run(|handle: &mut MachineHandle<'_, LightContext>, _| {
                if let Some(ctx) = handle.context_mut() {
                    ctx.current_timer = ctx.yellow_duration;
                    println!("+ Yellow light on, slow down for {}s.", ctx.current_timer);
                }
            })
            .build()
            .unwrap(),
        TransitionBuilder::new()
            .on(TIMEOUT)
            .from(state_set![YELLOW])
            .to(RED)
            .run(|handle: &mut MachineHandle<'_, LightContext>, _| {
                if let Some(ctx) = handle.context_mut() {
                    ctx.current_timer = ctx.red_duration;
                    println!("+ Red light on, wait {}s.", ctx.current_timer);
                }
            })
            .build()
            .unwrap(),
        TransitionBuilder::new()
            .on(ALARM)
            .from(state_set![RED, GREEN, YELLOW])
            .to(EMERGENCY)
            .when(|handle, _| {
                let allowed = handle
                    .context()
                    .is_some_and(|ctx: &LightContext| ctx.emergency_count < 3);
                if !allowed {
                    println!("x Emergency limit reached, staying in normal operation.");
                }
                allowed
            })
            .run(|handle, _| {
                if let Some(ctx) = handle.context_mut() {
                    ctx.emergency_count += 1;
                    println!("! Entering emergency mode (count {}).", ctx.emergency_count);
                }
            })
            .build()
            .unwrap(),
        transition(RESET, state_set![EMERGENCY], RED),
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let table = rules();
    let mut light = Machine::new(RED, &table).expect("valid table");
    light.set_context(LightContext {
        red_duration: 30,
        green_duration: 25,
        yellow_duration: 5,
        current_timer: 30,
        emergency_count: 0,
    });

    println!("=== Traffic Light ===");
    println!("Initial state: {}\n", name(light.current_state()));

    println!("Normal cycle:");
    for _ in 0..4 {
        light.process_event(TIMEOUT, None);
    }

    println!("\nEmergency handling:");
    for round in 1..=4 {
        let result = light.process_event(ALARM, None);
        println!(
            "  alarm {} -> {} (state {})",
            round,
            result.as_str(),
            name(light.current_state())
        );
        if result == EventResult::Success {
            light.process_event(RESET, None);
        }
    }
}
