//! The reducing-function protocol
//!
//! A [`Reducer`] is the step + completion pair that drives a fold. It never
//! owns input data: every input and every accumulator is moved through
//! [`Reducer::step`] by value.
//!
//! Transducers wrap one reducer into another; the driving functions in
//! [`crate::drive`] feed inputs into the outermost reducer until the inputs
//! run dry or a step comes back [`Step::Reduced`].
//!
//! # Example
//!
//! ```
//! use transducers::reducer::{from_fn, Reducer};
//! use transducers::{reduce, Step};
//!
//! let mut sum = from_fn(|acc: i32, x: i32| acc + x);
//! assert_eq!(sum.step(1, 2), Ok(Step::Continue(3)));
//!
//! let total = reduce(sum, 0, vec![1, 2, 3]);
//! assert_eq!(total, Ok(6));
//! ```

mod base;

pub use base::{collecting, first, from_fn, last, Collecting, First, FromFn, Last};

use crate::step::Step;

/// A reducing function over inputs of type `In`.
///
/// `In` is a single value or a tuple *pack* when several sequences are
/// reduced in lockstep.
pub trait Reducer<In> {
    /// The accumulated value threaded through every step.
    type Acc;

    /// Failure a step can report. `Infallible` for pure pipelines.
    type Error;

    /// Fold one input into the accumulator.
    fn step(&mut self, acc: Self::Acc, input: In) -> Result<Step<Self::Acc>, Self::Error>;

    /// Finish the reduction. Called exactly once, on the unwrapped
    /// accumulator, after the last step.
    #[inline]
    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        acc
    }

    /// Whether this reducer is guaranteed to return [`Step::Reduced`] by
    /// itself after finitely many steps.
    ///
    /// Generator-mode reductions refuse to start unless this holds.
    #[inline]
    fn is_bounded(&self) -> bool {
        false
    }
}

impl<In, R> Reducer<In> for Box<R>
where
    R: Reducer<In> + ?Sized,
{
    type Acc = R::Acc;
    type Error = R::Error;

    #[inline]
    fn step(&mut self, acc: Self::Acc, input: In) -> Result<Step<Self::Acc>, Self::Error> {
        (**self).step(acc, input)
    }

    #[inline]
    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        (**self).complete(acc)
    }

    #[inline]
    fn is_bounded(&self) -> bool {
        (**self).is_bounded()
    }
}

impl<In, R> Reducer<In> for &mut R
where
    R: Reducer<In> + ?Sized,
{
    type Acc = R::Acc;
    type Error = R::Error;

    #[inline]
    fn step(&mut self, acc: Self::Acc, input: In) -> Result<Step<Self::Acc>, Self::Error> {
        (**self).step(acc, input)
    }

    #[inline]
    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        (**self).complete(acc)
    }

    #[inline]
    fn is_bounded(&self) -> bool {
        (**self).is_bounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    struct Halting;

    impl Reducer<i32> for Halting {
        type Acc = i32;
        type Error = Infallible;

        fn step(&mut self, acc: i32, input: i32) -> Result<Step<i32>, Infallible> {
            Ok(Step::Reduced(acc + input))
        }

        fn complete(&mut self, acc: i32) -> i32 {
            -acc
        }

        fn is_bounded(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_default_complete_is_identity() {
        let mut rf = from_fn(|acc: i32, x: i32| acc + x);
        assert_eq!(rf.complete(42), 42);
        assert!(!rf.is_bounded());
    }

    #[test]
    fn test_boxed_reducer_forwards() {
        let mut rf: Box<dyn Reducer<i32, Acc = i32, Error = Infallible>> = Box::new(Halting);
        assert_eq!(rf.step(1, 2), Ok(Step::Reduced(3)));
        assert_eq!(rf.complete(3), -3);
        assert!(rf.is_bounded());
    }

    fn run_once<R>(mut rf: R, acc: i32, input: i32) -> (Step<i32>, bool)
    where
        R: Reducer<i32, Acc = i32, Error = Infallible>,
    {
        let bounded = rf.is_bounded();
        (rf.step(acc, input).unwrap(), bounded)
    }

    #[test]
    fn test_borrowed_reducer_forwards() {
        let mut inner = Halting;
        assert_eq!(run_once(&mut inner, 2, 2), (Step::Reduced(4), true));
        assert_eq!(inner.complete(4), -4);
    }
}
