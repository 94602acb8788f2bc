//! Demonstrates `traced` stages inside a pipeline
//!
//! Run with: cargo run --example tracing_demo

use transducers::prelude::*;

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let xform = comp!(
        traced("raw"),
        filter(|x: &i32| x % 3 != 0),
        traced("filtered"),
        take(4),
    );
    let res = into(Vec::new(), &xform, 1..=20);
    tracing::info!("Collected: {:?}", res);

    // Generator mode reports its start at DEBUG
    let xform: BoxedTransducer<(), usize> = comp(take(3), comp(traced("indices"), enumerate())).boxed();
    let total = transduce(&xform, |acc: usize, i: usize| acc + i, 0, ());
    tracing::info!("Sum of first three indices: {}", total);
}
