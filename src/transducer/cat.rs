//! Flattening nested inputs

use super::Transducer;
use crate::reducer::Reducer;
use crate::step::Step;

/// Transducer forwarding every item of every input.
///
/// Created by [`cat`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cat;

/// Reducer produced by applying [`Cat`].
#[derive(Debug)]
pub struct Catting<R> {
    inner: R,
}

impl<R, In> Reducer<In> for Catting<R>
where
    In: IntoIterator,
    R: Reducer<In::Item>,
{
    type Acc = R::Acc;
    type Error = R::Error;

    fn step(&mut self, mut acc: R::Acc, input: In) -> Result<Step<R::Acc>, R::Error> {
        for item in input {
            match self.inner.step(acc, item)? {
                Step::Continue(next) => acc = next,
                done @ Step::Reduced(_) => return Ok(done),
            }
        }
        Ok(Step::Continue(acc))
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

impl<In, E> Transducer<In, In::Item, E> for Cat
where
    In: IntoIterator,
{
    type Applied<'a, R>
        = Catting<R>
    where
        Self: 'a,
        R: Reducer<In::Item, Error = E> + 'a;

    #[inline]
    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<In::Item, Error = E> + 'a,
    {
        Catting { inner: rf }
    }
}

/// Forward every item of every input, one at a time.
///
/// Early termination from downstream stops in the middle of an input; the
/// rest of its items are never touched.
///
/// ```
/// use transducers::prelude::*;
///
/// let flat = into(Vec::new(), cat(), vec![vec![1, 2], vec![], vec![3]]);
/// assert_eq!(flat, vec![1, 2, 3]);
/// ```
pub fn cat() -> Cat {
    Cat
}
