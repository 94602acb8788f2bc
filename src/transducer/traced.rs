//! Diagnostic pass-through
//!
//! [`traced`] observes a pipeline without touching it: every step and the
//! completion are reported as `tracing` events under the
//! `transducers::traced` target, then forwarded unchanged.
//!
//! ```
//! use transducers::prelude::*;
//!
//! // Events go to whatever subscriber is installed; the result is the same
//! // with or without one.
//! let xf = comp(traced("before"), comp(take(2), traced("after")));
//! assert_eq!(into(Vec::new(), &xf, vec![1, 2, 3]), vec![1, 2]);
//! ```

use std::borrow::Cow;

use super::Transducer;
use crate::reducer::Reducer;
use crate::step::Step;

/// Pass-through transducer reporting each call as a `tracing` event.
///
/// Created by [`traced`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traced {
    label: Cow<'static, str>,
}

impl Traced {
    /// The label attached to every event.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Reducer produced by applying [`Traced`].
#[derive(Debug)]
pub struct Tracing<'a, R> {
    label: &'a str,
    inner: R,
    steps: usize,
}

impl<R, In> Reducer<In> for Tracing<'_, R>
where
    R: Reducer<In>,
{
    type Acc = R::Acc;
    type Error = R::Error;

    fn step(&mut self, acc: R::Acc, input: In) -> Result<Step<R::Acc>, R::Error> {
        self.steps += 1;
        match self.inner.step(acc, input) {
            Ok(step) => {
                tracing::trace!(
                    target: "transducers::traced",
                    label = self.label,
                    step = self.steps,
                    reduced = step.is_reduced(),
                    "step"
                );
                Ok(step)
            }
            Err(e) => {
                tracing::debug!(
                    target: "transducers::traced",
                    label = self.label,
                    step = self.steps,
                    "step failed"
                );
                Err(e)
            }
        }
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        tracing::debug!(
            target: "transducers::traced",
            label = self.label,
            steps = self.steps,
            "complete"
        );
        self.inner.complete(acc)
    }

    #[inline]
    fn is_bounded(&self) -> bool {
        self.inner.is_bounded()
    }
}

impl<T, E> Transducer<T, T, E> for Traced {
    type Applied<'a, R>
        = Tracing<'a, R>
    where
        Self: 'a,
        R: Reducer<T, Error = E> + 'a;

    #[inline]
    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<T, Error = E> + 'a,
    {
        Tracing {
            label: &self.label,
            inner: rf,
            steps: 0,
        }
    }
}

/// Report every step and the completion under `label`, changing nothing.
pub fn traced(label: impl Into<Cow<'static, str>>) -> Traced {
    Traced {
        label: label.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drive::{into, transduce};
    use crate::reducer::first;
    use crate::transducer::{comp, take};
    use tracing_test::traced_test;

    #[test]
    fn test_traced_is_transparent() {
        let xf = traced("noop");
        assert_eq!(into(Vec::new(), &xf, vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_traced_keeps_reduced_signal() {
        let halting = take(1);
        let xf = traced(String::from("probe"));
        let mut rf = Transducer::<i32>::apply(&xf, Transducer::<i32>::apply(&halting, first()));
        assert!(Reducer::<i32>::is_bounded(&rf));
        assert_eq!(rf.step(5, 0), Ok(Step::Reduced(5)));
        assert_eq!(Reducer::<i32>::complete(&mut rf, 5), 5);
    }

    #[traced_test]
    #[test]
    fn test_traced_emits_events() {
        let xf = comp(traced("sum"), take(2));
        let total = transduce(&xf, |acc: i32, x: i32| acc + x, 0, vec![4, 5, 6]);
        assert_eq!(total, 9);
        assert!(logs_contain("label=\"sum\""));
        assert!(logs_contain("reduced=true"));
        assert!(logs_contain("complete"));
    }

    #[test]
    fn test_label_accessor() {
        assert_eq!(traced("x").label(), "x");
    }
}
