//! Testing utilities for transducer pipelines
//!
//! This module provides clone-counting spies, assertion macros for
//! [`Step`](crate::Step) values, and property-based testing support.
//!
//! # Examples
//!
//! ## Clone counting
//!
//! ```rust
//! use transducers::prelude::*;
//! use transducers::testing::{CloneCounter, CountedValue};
//!
//! let counter = CloneCounter::new();
//! let acc = counter.value(0);
//! let inputs: Vec<_> = (0..5).map(|i| counter.value(i)).collect();
//!
//! let xf = map(|x: CountedValue<i32>| x);
//! let _ = transduce(&xf, |acc: CountedValue<i32>, _x| acc, acc, inputs);
//! assert_eq!(counter.clones(), 0);
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use transducers::{assert_continue, assert_reduced, Step};
//!
//! assert_continue!(Step::Continue(1));
//! assert_reduced!(Step::Reduced(2));
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Shared tally of clones made of the values it hands out.
///
/// Every [`CountedValue`] created by [`value`](CloneCounter::value) bumps
/// the same counter when cloned, so one counter can watch an accumulator
/// and a whole input sequence at once.
#[derive(Debug, Clone, Default)]
pub struct CloneCounter {
    clones: Rc<Cell<usize>>,
}

impl CloneCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `inner` in a spy reporting to this counter.
    pub fn value<T>(&self, inner: T) -> CountedValue<T> {
        CountedValue {
            inner,
            clones: Rc::clone(&self.clones),
        }
    }

    /// Clones made so far.
    pub fn clones(&self) -> usize {
        self.clones.get()
    }

    /// Start over from zero.
    pub fn reset(&self) {
        self.clones.set(0);
    }
}

/// A value that reports every clone of itself to a [`CloneCounter`].
pub struct CountedValue<T> {
    inner: T,
    clones: Rc<Cell<usize>>,
}

impl<T> CountedValue<T> {
    /// The wrapped value.
    pub fn get(&self) -> &T {
        &self.inner
    }

    /// Unwrap, without counting.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Clone> Clone for CountedValue<T> {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        CountedValue {
            inner: self.inner.clone(),
            clones: Rc::clone(&self.clones),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CountedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CountedValue").field(&self.inner).finish()
    }
}

impl<T: PartialEq> PartialEq for CountedValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

/// Assert that a step terminates the reduction.
///
/// This macro will panic if the step is `Continue`.
///
/// # Example
///
/// ```rust
/// use transducers::{assert_reduced, Step};
///
/// assert_reduced!(Step::Reduced(3));
/// ```
#[macro_export]
macro_rules! assert_reduced {
    ($step:expr) => {
        match $step {
            $crate::Step::Reduced(_) => {}
            $crate::Step::Continue(acc) => {
                panic!("Expected Reduced, got Continue: {:?}", acc);
            }
        }
    };
}

/// Assert that a step lets the reduction continue.
///
/// # Example
///
/// ```rust
/// use transducers::{assert_continue, Step};
///
/// assert_continue!(Step::Continue(3));
/// ```
#[macro_export]
macro_rules! assert_continue {
    ($step:expr) => {
        match $step {
            $crate::Step::Continue(_) => {}
            $crate::Step::Reduced(acc) => {
                panic!("Expected Continue, got Reduced: {:?}", acc);
            }
        }
    };
}

/// Assert that a step is `Reduced` with a specific accumulator.
///
/// # Example
///
/// ```rust
/// use transducers::{assert_reduced_with, Step};
///
/// assert_reduced_with!(Step::Reduced(vec![1, 2]), vec![1, 2]);
/// ```
#[macro_export]
macro_rules! assert_reduced_with {
    ($step:expr, $expected:expr) => {
        match $step {
            $crate::Step::Reduced(acc) => {
                assert_eq!(acc, $expected);
            }
            $crate::Step::Continue(acc) => {
                panic!(
                    "Expected Reduced with {:?}, got Continue: {:?}",
                    $expected, acc
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<A> Arbitrary for crate::Step<A>
where
    A: Arbitrary + 'static,
{
    type Parameters = A::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        (any::<bool>(), any_with::<A>(args))
            .prop_map(|(stop, acc)| {
                if stop {
                    crate::Step::Reduced(acc)
                } else {
                    crate::Step::Continue(acc)
                }
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Step;

    #[test]
    fn counter_starts_at_zero() {
        assert_eq!(CloneCounter::new().clones(), 0);
    }

    #[test]
    fn counter_shared_across_values() {
        let counter = CloneCounter::new();
        let a = counter.value(1);
        let b = counter.value("b");
        let _ = a.clone();
        let _ = b.clone();
        let _ = b.clone();
        assert_eq!(counter.clones(), 3);
        counter.reset();
        assert_eq!(counter.clones(), 0);
    }

    #[test]
    fn moving_does_not_count() {
        let counter = CloneCounter::new();
        let v = vec![counter.value(1), counter.value(2)];
        let moved: Vec<_> = v.into_iter().collect();
        assert_eq!(moved.len(), 2);
        assert_eq!(*moved[1].get(), 2);
        assert_eq!(counter.clones(), 0);
    }

    #[test]
    fn assert_reduced_macro() {
        assert_reduced!(Step::Reduced(1));
    }

    #[test]
    fn assert_continue_macro() {
        assert_continue!(Step::Continue(1));
    }

    #[test]
    fn assert_reduced_with_macro() {
        assert_reduced_with!(Step::Reduced("done"), "done");
    }

    #[test]
    #[should_panic(expected = "Expected Reduced, got Continue")]
    fn assert_reduced_panics_on_continue() {
        assert_reduced!(Step::Continue(1));
    }

    #[test]
    #[should_panic(expected = "Expected Continue, got Reduced")]
    fn assert_continue_panics_on_reduced() {
        assert_continue!(Step::Reduced(1));
    }

    #[test]
    #[should_panic(expected = "Expected Reduced with")]
    fn assert_reduced_with_panics_on_continue() {
        assert_reduced_with!(Step::Continue(1), 1);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;

        proptest! {
            #[test]
            fn step_arbitrary_generates_valid_instances(step in any::<Step<i32>>()) {
                match step {
                    Step::Reduced(_) => prop_assert!(step.is_reduced()),
                    Step::Continue(_) => prop_assert!(step.is_continue()),
                }
            }
        }
    }
}
