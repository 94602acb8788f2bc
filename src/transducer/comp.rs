//! Sequential composition

use std::fmt;
use std::marker::PhantomData;

use super::Transducer;
use crate::reducer::Reducer;

/// Two transducers chained: inputs go through `first`, then `second`.
///
/// `Mid` is the type flowing between the two stages. Created by [`comp`],
/// [`comp!`](crate::comp!) or [`TransducerExt::comp`](super::TransducerExt::comp).
pub struct Comp<A, B, Mid> {
    first: A,
    second: B,
    _mid: PhantomData<fn(Mid) -> Mid>,
}

impl<A: Clone, B: Clone, Mid> Clone for Comp<A, B, Mid> {
    fn clone(&self) -> Self {
        Comp {
            first: self.first.clone(),
            second: self.second.clone(),
            _mid: PhantomData,
        }
    }
}

impl<A: fmt::Debug, B: fmt::Debug, Mid> fmt::Debug for Comp<A, B, Mid> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comp")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<A, B, Mid> Comp<A, B, Mid> {
    /// The stage inputs reach first.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The stage closest to the reducer.
    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A, B, In, Mid, Out, E> Transducer<In, Out, E> for Comp<A, B, Mid>
where
    A: Transducer<In, Mid, E>,
    B: Transducer<Mid, Out, E>,
{
    type Applied<'a, R>
        = A::Applied<'a, B::Applied<'a, R>>
    where
        Self: 'a,
        R: Reducer<Out, Error = E> + 'a;

    #[inline]
    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<Out, Error = E> + 'a,
    {
        self.first.apply(self.second.apply(rf))
    }
}

/// Chain two transducers.
///
/// `comp(a, b).apply(rf)` is `a.apply(b.apply(rf))`: during a reduction each
/// input passes through `a` and then `b`, left to right. Every stage keeps
/// its own state, even when the same template appears twice.
///
/// # Example
///
/// ```
/// use transducers::prelude::*;
///
/// // Map, then filter.
/// let xf = comp(map(|x: i32| x * 2), filter(|x: &i32| *x > 2));
/// assert_eq!(into(Vec::new(), &xf, vec![1, 2, 3]), vec![4, 6]);
///
/// // One template, two independent counters.
/// let two = take(2);
/// let res = into(Vec::new(), comp(&two, &two), vec![1, 2, 3]);
/// assert_eq!(res, vec![1, 2]);
/// ```
pub fn comp<A, B, Mid>(first: A, second: B) -> Comp<A, B, Mid> {
    Comp {
        first,
        second,
        _mid: PhantomData,
    }
}

/// Compose any number of transducers, left to right.
///
/// `comp!(a, b, c)` is `comp(a, comp(b, c))`; a single argument is returned
/// as is.
///
/// ```
/// use transducers::prelude::*;
/// use transducers::comp;
///
/// let xf = comp!(
///     filter(|x: &i32| x % 2 == 0),
///     map(|x: i32| x + 1),
///     take(2),
/// );
/// assert_eq!(into(Vec::new(), &xf, 1..=10), vec![3, 5]);
/// ```
#[macro_export]
macro_rules! comp {
    ($xf:expr $(,)?) => {
        $xf
    };
    ($xf:expr, $($rest:expr),+ $(,)?) => {
        $crate::transducer::comp($xf, $crate::comp!($($rest),+))
    };
}
