//! Bounded prefixes: `take` and `take_while`

use std::fmt;

use super::Transducer;
use crate::reducer::Reducer;
use crate::step::Step;

/// Transducer letting through at most `n` inputs.
///
/// Created by [`take`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Take {
    n: usize,
}

/// Reducer produced by applying [`Take`]. Owns the remaining count.
#[derive(Debug)]
pub struct Taking<R> {
    inner: R,
    remaining: usize,
}

impl<R, In> Reducer<In> for Taking<R>
where
    R: Reducer<In>,
{
    type Acc = R::Acc;
    type Error = R::Error;

    fn step(&mut self, acc: R::Acc, input: In) -> Result<Step<R::Acc>, R::Error> {
        // Exhausted: halt without forwarding.
        if self.remaining == 0 {
            return Ok(Step::Reduced(acc));
        }
        self.remaining -= 1;
        let step = self.inner.step(acc, input)?;
        if self.remaining == 0 {
            Ok(step.into_reduced())
        } else {
            Ok(step)
        }
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.inner.complete(acc)
    }

    #[inline]
    fn is_bounded(&self) -> bool {
        true
    }
}

impl<T, E> Transducer<T, T, E> for Take {
    type Applied<'a, R>
        = Taking<R>
    where
        Self: 'a,
        R: Reducer<T, Error = E> + 'a;

    #[inline]
    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<T, Error = E> + 'a,
    {
        Taking {
            inner: rf,
            remaining: self.n,
        }
    }
}

/// Let through the first `n` inputs, then terminate.
///
/// The reduction stops right after the `n`-th input is accepted, so the
/// `n + 1`-th is never pulled. `take(0)` stops before consuming anything.
///
/// # Example
///
/// ```
/// use transducers::prelude::*;
///
/// assert_eq!(into(Vec::new(), take(2), vec![1, 2, 3]), vec![1, 2]);
/// assert_eq!(into(Vec::new(), take(0), vec![1, 2, 3]), Vec::<i32>::new());
/// ```
pub fn take(n: usize) -> Take {
    Take { n }
}

/// Transducer letting inputs through while a predicate holds.
///
/// Created by [`take_while`].
#[derive(Clone, Copy)]
pub struct TakeWhile<P> {
    pred: P,
}

impl<P> fmt::Debug for TakeWhile<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhile")
            .field("pred", &"<function>")
            .finish()
    }
}

/// Reducer produced by applying [`TakeWhile`].
pub struct TakingWhile<'a, P, R> {
    pred: &'a P,
    inner: R,
}

impl<P, R: fmt::Debug> fmt::Debug for TakingWhile<'_, P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakingWhile")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<P, R, In> Reducer<In> for TakingWhile<'_, P, R>
where
    P: Fn(&In) -> bool,
    R: Reducer<In>,
{
    type Acc = R::Acc;
    type Error = R::Error;

    #[inline]
    fn step(&mut self, acc: R::Acc, input: In) -> Result<Step<R::Acc>, R::Error> {
        if (self.pred)(&input) {
            self.inner.step(acc, input)
        } else {
            Ok(Step::Reduced(acc))
        }
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.inner.complete(acc)
    }

    #[inline]
    fn is_bounded(&self) -> bool {
        self.inner.is_bounded()
    }
}

impl<P, In, E> Transducer<In, In, E> for TakeWhile<P>
where
    P: Fn(&In) -> bool,
{
    type Applied<'a, R>
        = TakingWhile<'a, P, R>
    where
        Self: 'a,
        R: Reducer<In, Error = E> + 'a;

    #[inline]
    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<In, Error = E> + 'a,
    {
        TakingWhile {
            pred: &self.pred,
            inner: rf,
        }
    }
}

/// Let inputs through until `pred` first fails, then terminate.
///
/// The failing input is not forwarded.
///
/// ```
/// use transducers::prelude::*;
///
/// let small = into(Vec::new(), take_while(|x: &i32| *x < 3), vec![1, 2, 3, 1]);
/// assert_eq!(small, vec![1, 2]);
/// ```
pub fn take_while<P>(pred: P) -> TakeWhile<P> {
    TakeWhile { pred }
}
