//! Driving functions
//!
//! These pull inputs from an [`Inputs`] source and push them through a
//! reducing function until the source runs dry or a step answers
//! [`Step::Reduced`]. Completion runs exactly once, on the final
//! accumulator, either way.
//!
//! Transducers are taken by value; pass `&xf` to keep using a template.
//!
//! # Generator mode
//!
//! With `()` as the input source, or a lockstep pack made only of `()`,
//! there is nothing to run dry: the chain itself must stop the reduction,
//! typically with [`take`](crate::transducer::take). Before the first step
//! the driving functions check [`Reducer::is_bounded`] on the applied
//! reducing function and panic if no stage in the chain bounds it.
//!
//! The check is structural. A bounding stage placed after a predicate stage
//! (`filter`, `skip_while`, `take_while`) only counts the inputs the
//! predicate lets through, so a predicate that rejects every input still
//! loops forever.
//!
//! ```
//! use transducers::prelude::*;
//!
//! let squares = into(Vec::new(), comp!(take(4), enumerate(), map(|i: usize| i * i)), ());
//! assert_eq!(squares, vec![0, 1, 4, 9]);
//! ```

use std::convert::Infallible;

use crate::inputs::Inputs;
use crate::reducer::{Collecting, FromFn, Reducer};
use crate::step::Step;
use crate::transducer::Transducer;

/// Fold `inputs` with `rf`, starting from `init`.
///
/// Returns the completed accumulator, or the first error a step reports.
///
/// # Panics
///
/// Panics in generator mode (`inputs` is `()` or a pack of `()`) if `rf`
/// is not bounded. A bounded `rf` whose bound sits behind a predicate that
/// never lets an input through is not caught and never returns.
///
/// # Example
///
/// ```
/// use transducers::reducer::from_fn;
/// use transducers::reduce;
///
/// let longest = reduce(
///     from_fn(|acc: usize, (a, b): (&str, &str)| acc.max(a.len() + b.len())),
///     0,
///     (vec!["ab", "c"], vec!["d", "efgh"]),
/// );
/// assert_eq!(longest, Ok(5));
/// ```
pub fn reduce<R, S>(mut rf: R, init: R::Acc, inputs: S) -> Result<R::Acc, R::Error>
where
    S: Inputs,
    R: Reducer<S::Item>,
{
    if S::GENERATOR {
        assert!(
            rf.is_bounded(),
            "generator-mode reduction without a terminating stage: \
             compose the chain with `take` or another bounding transducer"
        );
        tracing::debug!("starting generator-mode reduction");
    }

    let mut acc = init;
    for (index, input) in inputs.into_inputs().enumerate() {
        match rf.step(acc, input)? {
            Step::Continue(next) => acc = next,
            Step::Reduced(done) => {
                tracing::trace!(steps = index + 1, "reduction terminated early");
                return Ok(rf.complete(done));
            }
        }
    }
    Ok(rf.complete(acc))
}

/// Run `inputs` through `xf` and fold the results with `f`.
///
/// # Panics
///
/// Panics in generator mode if no stage of `xf` bounds the reduction. See
/// [`reduce`] for the predicate-before-bound hazard.
///
/// # Example
///
/// ```
/// use transducers::prelude::*;
///
/// let xf = comp(filter(|x: &i32| x % 2 == 0), map(|x: i32| x * 2));
/// assert_eq!(transduce(&xf, |acc: i32, x: i32| acc + x, 0, vec![1, 2, 3, 4]), 12);
/// ```
pub fn transduce<X, F, S, A, Out>(xf: X, f: F, init: A, inputs: S) -> A
where
    S: Inputs,
    X: Transducer<S::Item, Out>,
    F: FnMut(A, Out) -> A,
{
    infallible(reduce(xf.apply(FromFn::<F, A>::new(f)), init, inputs))
}

/// Like [`transduce`], for pipelines whose stages can fail.
///
/// ```
/// use transducers::prelude::*;
/// use std::num::ParseIntError;
///
/// let parse = try_map(|s: &str| s.parse::<i32>());
/// let ok: Result<i32, ParseIntError> =
///     try_transduce(&parse, |acc: i32, x: i32| acc + x, 0, vec!["1", "2"]);
/// assert_eq!(ok, Ok(3));
///
/// let bad: Result<i32, ParseIntError> =
///     try_transduce(&parse, |acc: i32, x: i32| acc + x, 0, vec!["1", "x"]);
/// assert!(bad.is_err());
/// ```
pub fn try_transduce<X, F, S, A, Out, E>(xf: X, f: F, init: A, inputs: S) -> Result<A, E>
where
    S: Inputs,
    X: Transducer<S::Item, Out, E>,
    F: FnMut(A, Out) -> A,
{
    reduce(xf.apply(FromFn::<F, A, E>::new(f)), init, inputs)
}

/// Run `inputs` through `xf` and append the results to `coll`.
///
/// `coll` can be any `Extend` collection and need not be empty.
///
/// # Panics
///
/// Panics in generator mode if no stage of `xf` bounds the reduction. See
/// [`reduce`] for the predicate-before-bound hazard.
///
/// # Example
///
/// ```
/// use transducers::prelude::*;
/// use std::collections::HashSet;
///
/// let evens: HashSet<i32> = into(HashSet::new(), filter(|x: &i32| x % 2 == 0), vec![2, 3, 2, 4]);
/// assert_eq!(evens.len(), 2);
///
/// let text = into(String::from("x"), map(|c: char| c.to_ascii_uppercase()), each("yz".chars()));
/// assert_eq!(text, "xYZ");
/// ```
pub fn into<C, X, S, Out>(coll: C, xf: X, inputs: S) -> C
where
    S: Inputs,
    X: Transducer<S::Item, Out>,
    C: Extend<Out>,
{
    infallible(reduce(xf.apply(Collecting::<C>::new()), coll, inputs))
}

/// Like [`into`], for pipelines whose stages can fail.
pub fn try_into<C, X, S, Out, E>(coll: C, xf: X, inputs: S) -> Result<C, E>
where
    S: Inputs,
    X: Transducer<S::Item, Out, E>,
    C: Extend<Out>,
{
    reduce(xf.apply(Collecting::<C, E>::new()), coll, inputs)
}

#[inline]
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
