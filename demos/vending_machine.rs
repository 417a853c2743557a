//! Vending machine with a stock/balance guard.
//!
//! Key concepts:
//! - A typed event payload (coin value or item index)
//! - A guard that denies selection and reports the reason through the
//!   user context
//! - Actions updating balance, stock, and the display message
//!
//! Run with: cargo run --example vending_machine

use gearbox::builder::TransitionBuilder;
use gearbox::{state_set, Machine, MachineHandle, StateId, Transition};

const IDLE: StateId = 0;
const ACCEPTING: StateId = 1;
const DISPENSING: StateId = 2;

const INSERT_COIN: u8 = 0;
const SELECT_ITEM: u8 = 1;
const DISPENSE_DONE: u8 = 2;
const CANCEL: u8 = 3;

struct Item {
    name: &'static str,
    price: i32,
    stock: u32,
}

struct VendingContext {
    balance: i32,
    selected: Option<usize>,
    items: Vec<Item>,
    message: String,
}

/// Payload attached to events: the inserted coin or the chosen item.
enum Input {
    Coin(i32),
    Item(usize),
}

fn rules() -> Vec<Transition<VendingContext, Input>> {
    vec![
        TransitionBuilder::new()
            .on(INSERT_COIN)
            .from(state_set![IDLE, ACCEPTING])
            .to(ACCEPTING)
            .run(|handle: &mut MachineHandle<'_, VendingContext>, data| {
                let Some(ctx) = handle.context_mut() else { return };
                if let Some(Input::Coin(value)) = data {
                    ctx.balance += value;
                    ctx.message = format!("balance is now {}", ctx.balance);
                }
            })
            .build()
            .unwrap(),
        TransitionBuilder::new()
            .on(SELECT_ITEM)
            .from(state_set![ACCEPTING])
            .to(DISPENSING)
            .when(|handle: &mut MachineHandle<'_, VendingContext>, data| {
                let Some(ctx) = handle.context_mut() else {
                    return false;
                };
                let Some(Input::Item(id)) = data else {
                    ctx.message = "no item selected".into();
                    return false;
                };
                let Some(item) = ctx.items.get(*id) else {
                    ctx.message = "unknown item".into();
                    return false;
                };
                if item.stock == 0 {
                    ctx.message = format!("{} is sold out", item.name);
                    return false;
                }
                if ctx.balance < item.price {
                    ctx.message = format!(
                        "{} costs {}, balance is {}",
                        item.name, item.price, ctx.balance
                    );
                    return false;
                }
                ctx.selected = Some(*id);
                true
            })
            .run(|handle: &mut MachineHandle<'_, VendingContext>, _| {
                let Some(ctx) = handle.context_mut() else { return };
                if let Some(id) = ctx.selected {
                    ctx.balance -= ctx.items[id].price;
                    ctx.items[id].stock -= 1;
                    ctx.message = format!("dispensing {}", ctx.items[id].name);
                }
            })
            .build()
            .unwrap(),
        TransitionBuilder::new()
            .on(DISPENSE_DONE)
            .from(state_set![DISPENSING])
            .to(IDLE)
            .run(|handle: &mut MachineHandle<'_, VendingContext>, _| {
                let Some(ctx) = handle.context_mut() else { return };
                if ctx.balance > 0 {
                    ctx.message = format!("returning change: {}", ctx.balance);
                } else {
                    ctx.message = "thank you".into();
                }
                ctx.balance = 0;
                ctx.selected = None;
            })
            .build()
            .unwrap(),
        TransitionBuilder::new()
            .on(CANCEL)
            .from(state_set![ACCEPTING])
            .to(IDLE)
            .run(|handle: &mut MachineHandle<'_, VendingContext>, _| {
                let Some(ctx) = handle.context_mut() else { return };
                ctx.message = format!("refunding {}", ctx.balance);
                ctx.balance = 0;
            })
            .build()
            .unwrap(),
    ]
}

fn name(state: StateId) -> &'static str {
    match state {
        IDLE => "IDLE",
        ACCEPTING => "ACCEPTING",
        DISPENSING => "DISPENSING",
        _ => "?",
    }
}

fn step(machine: &mut Machine<'_, VendingContext, Input>, label: &str, event: u8, data: Option<&Input>) {
    let result = machine.process_event(event, data);
    let message = machine
        .context()
        .map(|ctx| ctx.message.as_str())
        .unwrap_or("");
    println!(
        "{label:<24} -> {:<24} state={:<10} [{}]",
        result.as_str(),
        name(machine.current_state()),
        message
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let table = rules();
    let mut machine = Machine::new(IDLE, &table).expect("valid table");
    machine.set_context(VendingContext {
        balance: 0,
        selected: None,
        items: vec![
            Item { name: "Water", price: 10, stock: 5 },
            Item { name: "Soda", price: 15, stock: 3 },
            Item { name: "Juice", price: 20, stock: 0 },
        ],
        message: "welcome, please insert coins".into(),
    });

    println!("=== Vending Machine ===\n");

    step(&mut machine, "select before paying", SELECT_ITEM, Some(&Input::Item(0)));
    step(&mut machine, "insert 10", INSERT_COIN, Some(&Input::Coin(10)));
    step(&mut machine, "select Soda (15)", SELECT_ITEM, Some(&Input::Item(1)));
    step(&mut machine, "insert 10", INSERT_COIN, Some(&Input::Coin(10)));
    step(&mut machine, "select Juice (sold out)", SELECT_ITEM, Some(&Input::Item(2)));
    step(&mut machine, "select Soda (15)", SELECT_ITEM, Some(&Input::Item(1)));
    step(&mut machine, "dispense done", DISPENSE_DONE, None);
    step(&mut machine, "insert 5", INSERT_COIN, Some(&Input::Coin(5)));
    step(&mut machine, "cancel", CANCEL, None);
}
