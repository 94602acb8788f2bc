//! Element-wise transformation

use std::fmt;
use std::marker::PhantomData;

use super::Transducer;
use crate::reducer::Reducer;
use crate::step::Step;

/// Transducer applying a function to every input.
///
/// Created by [`map`].
#[derive(Clone, Copy)]
pub struct Map<F> {
    f: F,
}

impl<F> fmt::Debug for Map<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("f", &"<function>").finish()
    }
}

/// Reducer produced by applying [`Map`].
pub struct Mapping<'a, F, R> {
    f: &'a F,
    inner: R,
}

impl<F, R: fmt::Debug> fmt::Debug for Mapping<'_, F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<F, R, In, Out> Reducer<In> for Mapping<'_, F, R>
where
    F: Fn(In) -> Out,
    R: Reducer<Out>,
{
    type Acc = R::Acc;
    type Error = R::Error;

    #[inline]
    fn step(&mut self, acc: R::Acc, input: In) -> Result<Step<R::Acc>, R::Error> {
        self.inner.step(acc, (self.f)(input))
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

impl<F, In, Out, E> Transducer<In, Out, E> for Map<F>
where
    F: Fn(In) -> Out,
{
    type Applied<'a, R>
        = Mapping<'a, F, R>
    where
        Self: 'a,
        R: Reducer<Out, Error = E> + 'a;

    #[inline]
    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<Out, Error = E> + 'a,
    {
        Mapping {
            f: &self.f,
            inner: rf,
        }
    }
}

/// Transform every input with `f`.
///
/// Inputs reduced in lockstep arrive as one tuple.
///
/// # Example
///
/// ```
/// use transducers::prelude::*;
///
/// let squares = into(Vec::new(), map(|x: u32| x * x), vec![1, 2, 3]);
/// assert_eq!(squares, vec![1, 4, 9]);
///
/// let sums = into(Vec::new(), map(|(a, b): (i32, i32)| a + b), (vec![1, 2, 3], vec![2, 3, 4]));
/// assert_eq!(sums, vec![3, 5, 7]);
/// ```
pub fn map<F>(f: F) -> Map<F> {
    Map { f }
}

/// Transducer applying a fallible function to every input.
///
/// Created by [`try_map`].
pub struct TryMap<F, E2> {
    f: F,
    _phantom: PhantomData<fn() -> E2>,
}

impl<F: Clone, E2> Clone for TryMap<F, E2> {
    fn clone(&self) -> Self {
        TryMap {
            f: self.f.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<F, E2> fmt::Debug for TryMap<F, E2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryMap").field("f", &"<function>").finish()
    }
}

/// Reducer produced by applying [`TryMap`].
pub struct TryMapping<'a, F, R> {
    f: &'a F,
    inner: R,
}

impl<F, R: fmt::Debug> fmt::Debug for TryMapping<'_, F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryMapping")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<F, R, In, Out, E2> Reducer<In> for TryMapping<'_, F, R>
where
    F: Fn(In) -> Result<Out, E2>,
    R: Reducer<Out>,
    R::Error: From<E2>,
{
    type Acc = R::Acc;
    type Error = R::Error;

    #[inline]
    fn step(&mut self, acc: R::Acc, input: In) -> Result<Step<R::Acc>, R::Error> {
        let out = (self.f)(input)?;
        self.inner.step(acc, out)
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

impl<F, In, Out, E, E2> Transducer<In, Out, E> for TryMap<F, E2>
where
    F: Fn(In) -> Result<Out, E2>,
    E: From<E2>,
{
    type Applied<'a, R>
        = TryMapping<'a, F, R>
    where
        Self: 'a,
        R: Reducer<Out, Error = E> + 'a;

    #[inline]
    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<Out, Error = E> + 'a,
    {
        TryMapping {
            f: &self.f,
            inner: rf,
        }
    }
}

/// Transform every input with a fallible `f`.
///
/// The first `Err` aborts the reduction: the driving function returns it
/// (converted with `From`) and no further input is pulled.
///
/// # Example
///
/// ```
/// use std::num::ParseIntError;
/// use transducers::prelude::*;
///
/// let parse = try_map(|s: &str| s.parse::<i32>());
///
/// let ok: Result<Vec<i32>, ParseIntError> = try_into(Vec::new(), &parse, vec!["1", "2"]);
/// assert_eq!(ok, Ok(vec![1, 2]));
///
/// let bad: Result<Vec<i32>, ParseIntError> = try_into(Vec::new(), &parse, vec!["1", "x"]);
/// assert!(bad.is_err());
/// ```
pub fn try_map<F, In, Out, E2>(f: F) -> TryMap<F, E2>
where
    F: Fn(In) -> Result<Out, E2>,
{
    TryMap {
        f,
        _phantom: PhantomData,
    }
}
