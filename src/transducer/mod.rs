//! Transducers: transformations of reducing functions
//!
//! A [`Transducer<In, Out, E>`] turns a reducer over `Out` into a reducer
//! over `In`. It knows nothing about where inputs come from or where results
//! go; the same value drives a `Vec` build, a sum or a generator.
//!
//! # Templates and state
//!
//! The transducer value itself is a read-only *template*. Every call to
//! [`Transducer::apply`] builds fresh per-invocation state (the remaining
//! count of [`take`], the index of [`enumerate`]...), so one template can be
//! applied any number of times, or composed with itself, without sharing
//! state between invocations.
//!
//! # Example
//!
//! ```
//! use transducers::prelude::*;
//!
//! let xf = comp(filter(|x: &i32| x % 2 == 0), map(|x: i32| x * 10));
//! assert_eq!(into(Vec::new(), &xf, vec![1, 2, 3, 4]), vec![20, 40]);
//!
//! // Same template, second run, fresh state.
//! assert_eq!(into(Vec::new(), &xf, vec![6]), vec![60]);
//! ```
//!
//! # Zero-cost by default, boxed on demand
//!
//! Concrete transducers are plain structs and compose into nested types
//! the compiler can inline. Call [`TransducerExt::boxed`] when you need one
//! type for many pipelines: storing them, reassigning them at runtime, or
//! returning different ones from match arms.

mod boxed;
mod cat;
mod comp;
mod enumerate;
mod filter;
mod identity;
mod map;
mod skip;
mod take;
mod traced;

pub use boxed::{BoxedTransducer, Erased};
pub use cat::{cat, Cat, Catting};
pub use comp::{comp, Comp};
pub use enumerate::{enumerate, Enumerate, Enumerating};
pub use filter::{filter, Filter, Filtering};
pub use identity::{identity, Identity};
pub use map::{map, try_map, Map, Mapping, TryMap, TryMapping};
pub use skip::{skip, skip_while, Skip, SkipWhile, Skipping, SkippingWhile};
pub use take::{take, take_while, Take, TakeWhile, Taking, TakingWhile};
pub use traced::{traced, Traced, Tracing};

use std::convert::Infallible;

use crate::reducer::Reducer;

/// A transformation from reducers over `Out` to reducers over `In`.
///
/// `In` and `Out` are single types or tuple packs; `E` is the error every
/// reducer in the chain may report.
pub trait Transducer<In, Out = In, E = Infallible> {
    /// Reducer produced by [`apply`](Transducer::apply).
    type Applied<'a, R>: Reducer<In, Acc = R::Acc, Error = E> + 'a
    where
        Self: 'a,
        R: Reducer<Out, Error = E> + 'a;

    /// Wrap `rf`, building fresh state for this invocation.
    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<Out, Error = E> + 'a;
}

impl<T, In, Out, E> Transducer<In, Out, E> for &T
where
    T: Transducer<In, Out, E> + ?Sized,
{
    type Applied<'a, R>
        = T::Applied<'a, R>
    where
        Self: 'a,
        R: Reducer<Out, Error = E> + 'a;

    #[inline]
    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<Out, Error = E> + 'a,
    {
        (**self).apply(rf)
    }
}

/// Combinator methods for every transducer.
///
/// The trait has no type parameters of its own: signatures are resolved
/// where the result is used, the same way as for [`comp`].
pub trait TransducerExt: Sized {
    /// Chain `next` after `self`: elements pass through `self` first.
    ///
    /// ```
    /// use transducers::prelude::*;
    ///
    /// let xf = map(|x: i32| x + 1).comp(take(2));
    /// assert_eq!(into(Vec::new(), &xf, vec![10, 20, 30]), vec![11, 21]);
    /// ```
    fn comp<X, Mid>(self, next: X) -> Comp<Self, X, Mid> {
        comp(self, next)
    }

    /// Erase the concrete type.
    ///
    /// ```
    /// use transducers::prelude::*;
    ///
    /// let pipelines: Vec<BoxedTransducer<i32>> = vec![
    ///     map(|x: i32| x * 2).boxed(),
    ///     take(1).boxed(),
    /// ];
    /// let results: Vec<Vec<i32>> = pipelines
    ///     .iter()
    ///     .map(|xf| into(Vec::new(), xf, vec![3, 4]))
    ///     .collect();
    /// assert_eq!(results, vec![vec![6, 8], vec![3]]);
    /// ```
    fn boxed<In, Out, E>(self) -> BoxedTransducer<In, Out, E>
    where
        Self: Transducer<In, Out, E> + 'static,
        In: 'static,
        Out: 'static,
        E: 'static,
    {
        BoxedTransducer::new(self)
    }
}

impl<X> TransducerExt for X {}
