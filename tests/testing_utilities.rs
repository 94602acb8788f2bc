//! Tests and examples for the testing utilities
//!
//! This suite demonstrates patterns for testing custom reducers and
//! transducers with the helpers in `transducers::testing`.

use std::convert::Infallible;

use transducers::prelude::*;
use transducers::reducer::first;
use transducers::testing::{CloneCounter, CountedValue};
use transducers::{assert_continue, assert_reduced, assert_reduced_with};

// A custom stateful transducer: forwards every other input
#[derive(Debug, Clone, Copy)]
struct EveryOther;

#[derive(Debug)]
struct EveryOtherRf<R> {
    inner: R,
    odd: bool,
}

impl<R: Reducer<T>, T> Reducer<T> for EveryOtherRf<R> {
    type Acc = R::Acc;
    type Error = R::Error;

    fn step(&mut self, acc: R::Acc, input: T) -> Result<Step<R::Acc>, R::Error> {
        self.odd = !self.odd;
        if self.odd {
            self.inner.step(acc, input)
        } else {
            Ok(Step::Continue(acc))
        }
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.inner.complete(acc)
    }

    fn is_bounded(&self) -> bool {
        self.inner.is_bounded()
    }
}

impl<T, E> Transducer<T, T, E> for EveryOther {
    type Applied<'a, R>
        = EveryOtherRf<R>
    where
        Self: 'a,
        R: Reducer<T, Error = E> + 'a;

    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<T, Error = E> + 'a,
    {
        EveryOtherRf {
            inner: rf,
            odd: false,
        }
    }
}

// A custom reducer: counts inputs, stops at a limit
struct CountUpTo(usize);

impl<T> Reducer<T> for CountUpTo {
    type Acc = usize;
    type Error = Infallible;

    fn step(&mut self, acc: usize, _: T) -> Result<Step<usize>, Infallible> {
        let acc = acc + 1;
        if acc >= self.0 {
            Ok(Step::Reduced(acc))
        } else {
            Ok(Step::Continue(acc))
        }
    }
}

#[test]
fn custom_transducer_composes_with_builtins() {
    let xf = comp!(EveryOther, map(|x: i32| x * 10), take(2));
    assert_eq!(into(Vec::new(), &xf, 1..=10), vec![10, 30]);
}

#[test]
fn custom_transducer_erases() {
    let xf: BoxedTransducer<char> = EveryOther.boxed();
    assert_eq!(into(String::new(), &xf, each("abcde".chars())), "ace");
}

#[test]
fn custom_transducer_forwards_reduced() {
    let mut rf = Transducer::<i32>::apply(&EveryOther, CountUpTo(1));
    assert_reduced_with!(rf.step(0, 42).unwrap(), 1);
}

#[test]
fn custom_transducer_swallows_skipped_inputs() {
    let mut rf = Transducer::<i32>::apply(&EveryOther, CountUpTo(10));
    assert_continue!(rf.step(0, 1).unwrap());
    assert_eq!(rf.step(5, 2), Ok(Step::Continue(5)));
}

#[test]
fn custom_reducer_terminates_reduction() {
    let count = reduce(CountUpTo(3), 0, 0..);
    assert_eq!(count, Ok(3));
}

#[test]
fn custom_reducer_bounds_a_generator_through_take() {
    let count = reduce(Transducer::<()>::apply(&take(4), CountUpTo(100)), 0, ());
    assert_eq!(count, Ok(4));
}

#[test]
fn assertion_macros_on_live_steps() {
    let xf = take(2);
    let mut rf = Transducer::<u8>::apply(&xf, first::<u8>());
    assert_continue!(rf.step(0, 1).unwrap());
    assert_reduced!(rf.step(0, 2).unwrap());
}

#[test]
fn clone_counter_catches_a_cloning_stage() {
    let counter = CloneCounter::new();
    let inputs: Vec<CountedValue<i32>> = (0..4).map(|i| counter.value(i)).collect();

    // Cloning every input is visible to the counter.
    let xf = map(|x: CountedValue<i32>| x.clone());
    let out = into(Vec::new(), &xf, inputs);
    assert_eq!(out.len(), 4);
    assert_eq!(counter.clones(), 4);

    counter.reset();
    let inputs: Vec<CountedValue<i32>> = (0..4).map(|i| counter.value(i)).collect();
    let out = into(Vec::new(), identity(), inputs);
    assert_eq!(out[3], counter.value(3));
    assert_eq!(counter.clones(), 0);
}

#[test]
fn clone_counter_through_lockstep_packs() {
    let counter = CloneCounter::new();
    let left: Vec<_> = (0..3).map(|i| counter.value(i)).collect();
    let right: Vec<_> = (0..2).map(|i| counter.value(i * 2)).collect();

    let xf = map(|(a, b): (CountedValue<i32>, CountedValue<i32>)| a.into_inner() + b.into_inner());
    assert_eq!(into(Vec::new(), xf, (left, right)), vec![0, 3]);
    assert_eq!(counter.clones(), 0);
}
