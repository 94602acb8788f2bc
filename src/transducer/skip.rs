//! Dropping prefixes: `skip` and `skip_while`

use std::fmt;

use super::Transducer;
use crate::reducer::Reducer;
use crate::step::Step;

/// Transducer discarding the first `n` inputs.
///
/// Created by [`skip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skip {
    n: usize,
}

/// Reducer produced by applying [`Skip`].
#[derive(Debug)]
pub struct Skipping<R> {
    inner: R,
    pending: usize,
}

impl<R, In> Reducer<In> for Skipping<R>
where
    R: Reducer<In>,
{
    type Acc = R::Acc;
    type Error = R::Error;

    #[inline]
    fn step(&mut self, acc: R::Acc, input: In) -> Result<Step<R::Acc>, R::Error> {
        if self.pending > 0 {
            self.pending -= 1;
            Ok(Step::Continue(acc))
        } else {
            self.inner.step(acc, input)
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

impl<T, E> Transducer<T, T, E> for Skip {
    type Applied<'a, R>
        = Skipping<R>
    where
        Self: 'a,
        R: Reducer<T, Error = E> + 'a;

    #[inline]
    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<T, Error = E> + 'a,
    {
        Skipping {
            inner: rf,
            pending: self.n,
        }
    }
}

/// Discard the first `n` inputs of every reduction, forward the rest.
///
/// ```
/// use transducers::prelude::*;
///
/// assert_eq!(into(Vec::new(), skip(2), vec![1, 2, 3, 4]), vec![3, 4]);
/// ```
pub fn skip(n: usize) -> Skip {
    Skip { n }
}

/// Transducer discarding inputs while a predicate holds.
///
/// Created by [`skip_while`].
#[derive(Clone, Copy)]
pub struct SkipWhile<P> {
    pred: P,
}

impl<P> fmt::Debug for SkipWhile<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipWhile")
            .field("pred", &"<function>")
            .finish()
    }
}

/// Reducer produced by applying [`SkipWhile`].
pub struct SkippingWhile<'a, P, R> {
    pred: &'a P,
    inner: R,
    skipping: bool,
}

impl<P, R: fmt::Debug> fmt::Debug for SkippingWhile<'_, P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkippingWhile")
            .field("inner", &self.inner)
            .field("skipping", &self.skipping)
            .finish_non_exhaustive()
    }
}

impl<P, R, In> Reducer<In> for SkippingWhile<'_, P, R>
where
    P: Fn(&In) -> bool,
    R: Reducer<In>,
{
    type Acc = R::Acc;
    type Error = R::Error;

    #[inline]
    fn step(&mut self, acc: R::Acc, input: In) -> Result<Step<R::Acc>, R::Error> {
        if self.skipping && (self.pred)(&input) {
            return Ok(Step::Continue(acc));
        }
        self.skipping = false;
        self.inner.step(acc, input)
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

impl<P, In, E> Transducer<In, In, E> for SkipWhile<P>
where
    P: Fn(&In) -> bool,
{
    type Applied<'a, R>
        = SkippingWhile<'a, P, R>
    where
        Self: 'a,
        R: Reducer<In, Error = E> + 'a;

    #[inline]
    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<In, Error = E> + 'a,
    {
        SkippingWhile {
            pred: &self.pred,
            inner: rf,
            skipping: true,
        }
    }
}

/// Discard inputs while `pred` holds; once it fails, forward everything.
///
/// ```
/// use transducers::prelude::*;
///
/// let tail = into(Vec::new(), skip_while(|x: &i32| *x < 3), vec![1, 2, 3, 1]);
/// assert_eq!(tail, vec![3, 1]);
/// ```
pub fn skip_while<P>(pred: P) -> SkipWhile<P> {
    SkipWhile { pred }
}
