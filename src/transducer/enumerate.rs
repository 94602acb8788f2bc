//! Index generator

use super::Transducer;
use crate::reducer::Reducer;
use crate::step::Step;

/// Generator transducer producing `0, 1, 2, ...`.
///
/// Created by [`enumerate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Enumerate;

/// Reducer produced by applying [`Enumerate`]. Owns the index counter.
#[derive(Debug)]
pub struct Enumerating<R> {
    inner: R,
    index: usize,
}

impl<R, In> Reducer<In> for Enumerating<R>
where
    R: Reducer<usize>,
{
    type Acc = R::Acc;
    type Error = R::Error;

    #[inline]
    fn step(&mut self, acc: R::Acc, _input: In) -> Result<Step<R::Acc>, R::Error> {
        let step = self.inner.step(acc, self.index);
        self.index += 1;
        step
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

impl<In, E> Transducer<In, usize, E> for Enumerate {
    type Applied<'a, R>
        = Enumerating<R>
    where
        Self: 'a,
        R: Reducer<usize, Error = E> + 'a;

    #[inline]
    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<usize, Error = E> + 'a,
    {
        Enumerating {
            inner: rf,
            index: 0,
        }
    }
}

/// Forward the step index instead of the input.
///
/// Meant for generator mode, where the input pack is `()` and the driving
/// loop has nothing to pull: pair it with [`take`](crate::transducer::take)
/// so the sequence ends.
///
/// # Example
///
/// ```
/// use transducers::prelude::*;
///
/// let xf: BoxedTransducer<(), usize> = comp(take(5), enumerate()).boxed();
/// let total = transduce(&xf, |acc: usize, i: usize| acc + i, 0, ());
/// assert_eq!(total, 10);
/// ```
pub fn enumerate() -> Enumerate {
    Enumerate
}
