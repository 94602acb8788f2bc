//! One pipeline, many reductions
//!
//! Run with: cargo run --example pipelines

use std::collections::BTreeMap;
use std::num::ParseIntError;

use transducers::prelude::*;

#[derive(Debug)]
enum Mode {
    Evens,
    FirstThree,
    Everything,
}

fn pipeline(mode: &Mode) -> BoxedTransducer<i32> {
    match mode {
        Mode::Evens => filter(|x: &i32| x % 2 == 0).boxed(),
        Mode::FirstThree => take(3).boxed(),
        Mode::Everything => BoxedTransducer::default(),
    }
}

fn main() {
    let data = vec![5, 8, 13, 21, 34, 55];

    println!("=== Erased pipelines chosen at runtime ===");
    for mode in [Mode::Evens, Mode::FirstThree, Mode::Everything] {
        let xform = pipeline(&mode);
        println!("{:?}: {:?}", mode, into(Vec::new(), &xform, data.clone()));
    }

    println!("\n=== Same transducer, different sinks ===");
    let xform = comp(map(|x: i32| x * 10), take(4));
    let sum = transduce(&xform, |acc: i32, x: i32| acc + x, 0, data.clone());
    let text = into(String::new(), comp(&xform, map(|x: i32| format!("[{x}]"))), data.clone());
    let keyed: BTreeMap<i32, i32> = into(
        BTreeMap::new(),
        comp(&xform, map(|x: i32| (x % 3, x))),
        data.clone(),
    );
    println!("sum:   {}", sum);
    println!("text:  {}", text);
    println!("keyed: {:?}", keyed);

    println!("\n=== Lockstep over two sequences ===");
    let names = vec!["ada", "grace", "edsger"];
    let years = vec![1815, 1906, 1930];
    let lines = into(
        Vec::new(),
        map(|(name, year): (&str, i32)| format!("{name} ({year})")),
        (names, years),
    );
    println!("{:?}", lines);

    println!("\n=== Fallible stages ===");
    let parse = try_map(|s: &str| s.parse::<i32>());
    let ok: Result<Vec<i32>, ParseIntError> = try_into(Vec::new(), &parse, vec!["1", "2", "3"]);
    let err: Result<Vec<i32>, ParseIntError> = try_into(Vec::new(), &parse, vec!["1", "two"]);
    println!("ok:  {:?}", ok);
    println!("err: {:?}", err);

    println!("\n=== Generator ===");
    let squares = into(Vec::new(), comp!(take(5), enumerate(), map(|i: usize| i * i)), ());
    println!("{:?}", squares);
}
