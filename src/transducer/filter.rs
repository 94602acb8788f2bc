//! Predicate-based selection

use std::fmt;

use super::Transducer;
use crate::reducer::Reducer;
use crate::step::Step;

/// Transducer keeping the inputs that satisfy a predicate.
///
/// Created by [`filter`].
#[derive(Clone, Copy)]
pub struct Filter<P> {
    pred: P,
}

impl<P> fmt::Debug for Filter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("pred", &"<function>").finish()
    }
}

/// Reducer produced by applying [`Filter`].
pub struct Filtering<'a, P, R> {
    pred: &'a P,
    inner: R,
}

impl<P, R: fmt::Debug> fmt::Debug for Filtering<'_, P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filtering")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<P, R, In> Reducer<In> for Filtering<'_, P, R>
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
            Ok(Step::Continue(acc))
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

impl<P, In, E> Transducer<In, In, E> for Filter<P>
where
    P: Fn(&In) -> bool,
{
    type Applied<'a, R>
        = Filtering<'a, P, R>
    where
        Self: 'a,
        R: Reducer<In, Error = E> + 'a;

    #[inline]
    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<In, Error = E> + 'a,
    {
        Filtering {
            pred: &self.pred,
            inner: rf,
        }
    }
}

/// Keep only the inputs for which `pred` returns `true`.
///
/// Rejected inputs are dropped on the spot; the inner reducer never sees
/// them.
///
/// # Example
///
/// ```
/// use transducers::prelude::*;
///
/// let odds = into(Vec::new(), filter(|x: &i32| x % 2 == 1), vec![1, 2, 3, 4]);
/// assert_eq!(odds, vec![1, 3]);
///
/// // Lockstep inputs are filtered as whole tuples.
/// let pairs = into(Vec::new(), filter(|_: &(i32, i32)| true), (vec![1, 2, 3], vec![2, 3, 4]));
/// assert_eq!(pairs, vec![(1, 2), (2, 3), (3, 4)]);
/// ```
pub fn filter<P>(pred: P) -> Filter<P> {
    Filter { pred }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drive::into;
    use crate::reducer::from_fn;

    #[test]
    fn test_filter_keeps_order() {
        let res = into(Vec::new(), filter(|x: &i32| *x > 2), vec![5, 1, 4, 2, 3]);
        assert_eq!(res, vec![5, 4, 3]);
    }

    #[test]
    fn test_filter_skips_inner_step() {
        let calls = std::cell::Cell::new(0);
        let xf = filter(|x: &i32| *x < 0);
        let mut rf = Transducer::<i32>::apply(
            &xf,
            from_fn(|acc: i32, x: i32| {
                calls.set(calls.get() + 1);
                acc + x
            }),
        );
        assert_eq!(rf.step(10, 3), Ok(Step::Continue(10)));
        assert_eq!(rf.step(10, -3), Ok(Step::Continue(7)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_filter_rejecting_everything() {
        let res: Vec<String> = into(Vec::new(), filter(|_: &String| false), vec!["a".to_string()]);
        assert!(res.is_empty());
    }
}
