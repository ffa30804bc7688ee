//! Chained Transitions
//!
//! This example demonstrates handlers that chain into further transitions
//! before resolving, producing one history record per step.
//!
//! Key concepts:
//! - Handlers receive a scope view and can re-enter the machine
//! - Each chained step appends and resolves its own record
//! - The outer record resolves after every nested step finished
//!
//! Run with: cargo run --example chained_transitions

use hindsight::{HistoryMachine, Registry, State};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
enum Order {
    Received,
    Validated,
    Shipped,
}

impl State for Order {
    fn name(&self) -> &str {
        match self {
            Self::Received => "received",
            Self::Validated => "validated",
            Self::Shipped => "shipped",
        }
    }
}

fn main() {
    println!("=== Chained Transitions Example ===\n");

    // Receiving an order immediately chains into validation, and
    // validation chains into shipping.
    let registry: Registry<Order, String> = Registry::new()
        .register(Order::Received, |scope, payload: Option<String>| {
            let order = payload.unwrap_or_default();
            scope
                .transition(Order::Validated, Some(order.clone()))
                .expect("validated is registered");
            Some(format!("{order}: received"))
        })
        .register(Order::Validated, |scope, payload: Option<String>| {
            let order = payload.unwrap_or_default();
            scope
                .transition(Order::Shipped, Some(order.clone()))
                .expect("shipped is registered");
            Some(format!("{order}: validated"))
        })
        .register(Order::Shipped, |_scope, payload: Option<String>| {
            payload.map(|order| format!("{order}: shipped"))
        });

    let mut machine = HistoryMachine::new(registry);
    machine
        .transition(Order::Received, Some("order-42".to_string()))
        .unwrap();

    println!("One call, {} records:", machine.history().len());
    for record in machine.history().records() {
        println!(
            "  [{}] {} -> {:?}",
            record.index,
            record.name(),
            record.result
        );
    }

    println!("\n=== Example Complete ===");
}
