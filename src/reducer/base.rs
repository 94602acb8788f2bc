//! Base reducing functions
//!
//! These sit at the bottom of a transducer chain and decide what the
//! accumulator is: a fold value, a collection, or a probe.

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use super::Reducer;
use crate::step::Step;

/// Reducer built from a combining function `(A, In) -> A`.
///
/// Created by [`from_fn`].
pub struct FromFn<F, A, E = Infallible> {
    f: F,
    _phantom: PhantomData<fn(A) -> (A, E)>,
}

impl<F, A, E> fmt::Debug for FromFn<F, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

impl<F, A, E> FromFn<F, A, E> {
    /// Create a combining reducer with an explicit error type.
    pub fn new(f: F) -> Self {
        FromFn {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F, A, E, In> Reducer<In> for FromFn<F, A, E>
where
    F: FnMut(A, In) -> A,
{
    type Acc = A;
    type Error = E;

    #[inline]
    fn step(&mut self, acc: A, input: In) -> Result<Step<A>, E> {
        Ok(Step::Continue((self.f)(acc, input)))
    }
}

/// Lift a combining function into a reducer. Completion is a no-op.
///
/// # Example
///
/// ```
/// use transducers::reducer::from_fn;
/// use transducers::reduce;
///
/// let product = reduce(from_fn(|acc: u64, x: u64| acc * x), 1, vec![2, 3, 4]);
/// assert_eq!(product, Ok(24));
/// ```
pub fn from_fn<F, A>(f: F) -> FromFn<F, A> {
    FromFn::new(f)
}

/// Reducer whose accumulator is a collection it appends to.
///
/// Created by [`collecting`].
pub struct Collecting<C, E = Infallible> {
    _phantom: PhantomData<fn(C) -> (C, E)>,
}

impl<C, E> fmt::Debug for Collecting<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collecting").finish()
    }
}

impl<C, E> Collecting<C, E> {
    /// Create a collecting reducer with an explicit error type.
    pub fn new() -> Self {
        Collecting {
            _phantom: PhantomData,
        }
    }
}

impl<C, E> Default for Collecting<C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, E, In> Reducer<In> for Collecting<C, E>
where
    C: Extend<In>,
{
    type Acc = C;
    type Error = E;

    #[inline]
    fn step(&mut self, mut acc: C, input: In) -> Result<Step<C>, E> {
        acc.extend(std::iter::once(input));
        Ok(Step::Continue(acc))
    }
}

/// Append every input to the accumulator collection.
///
/// Any `Extend` collection works: `Vec`, `String`, `HashSet`, `BTreeMap`...
///
/// ```
/// use transducers::reducer::collecting;
/// use transducers::reduce;
///
/// let text = reduce(collecting(), String::from(">"), vec!['a', 'b']);
/// assert_eq!(text, Ok(String::from(">ab")));
/// ```
pub fn collecting<C>() -> Collecting<C> {
    Collecting::new()
}

/// Reducer that keeps its accumulator and ignores every input.
///
/// Created by [`first`].
pub struct First<A, E = Infallible> {
    _phantom: PhantomData<fn(A) -> (A, E)>,
}

impl<A, E> fmt::Debug for First<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("First").finish()
    }
}

impl<A, E> First<A, E> {
    /// Create a probe reducer with an explicit error type.
    pub fn new() -> Self {
        First {
            _phantom: PhantomData,
        }
    }
}

impl<A, E> Default for First<A, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, E, In> Reducer<In> for First<A, E> {
    type Acc = A;
    type Error = E;

    #[inline]
    fn step(&mut self, acc: A, _input: In) -> Result<Step<A>, E> {
        Ok(Step::Continue(acc))
    }
}

/// Return the accumulator untouched on every step.
///
/// Useful as a probe: whatever happens to the accumulator is the doing of
/// the transducers above it.
pub fn first<A>() -> First<A> {
    First::new()
}

/// Reducer whose accumulator becomes the latest input.
///
/// Created by [`last`].
pub struct Last<E = Infallible> {
    _phantom: PhantomData<fn() -> E>,
}

impl<E> fmt::Debug for Last<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Last").finish()
    }
}

impl<E> Last<E> {
    /// Create a last-value reducer with an explicit error type.
    pub fn new() -> Self {
        Last {
            _phantom: PhantomData,
        }
    }
}

impl<E> Default for Last<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, In> Reducer<In> for Last<E> {
    type Acc = In;
    type Error = E;

    #[inline]
    fn step(&mut self, _acc: In, input: In) -> Result<Step<In>, E> {
        Ok(Step::Continue(input))
    }
}

/// Replace the accumulator with each input; the initial value is returned
/// when there is no input at all.
///
/// ```
/// use transducers::reducer::last;
/// use transducers::reduce;
///
/// assert_eq!(reduce(last(), 0, vec![4, 5, 6]), Ok(6));
/// assert_eq!(reduce(last(), 0, Vec::<i32>::new()), Ok(0));
/// ```
pub fn last() -> Last {
    Last::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_from_fn_combines() {
        let mut rf = from_fn(|acc: Vec<i32>, x: i32| {
            let mut acc = acc;
            acc.push(x * 2);
            acc
        });
        let step = rf.step(vec![1], 3).unwrap();
        assert_eq!(step, Step::Continue(vec![1, 6]));
    }

    #[test]
    fn test_collecting_appends_to_any_extend() {
        let mut rf = collecting::<BTreeSet<i32>>();
        let acc = rf.step(BTreeSet::new(), 3).unwrap().into_inner();
        let acc = rf.step(acc, 1).unwrap().into_inner();
        let acc = rf.step(acc, 3).unwrap().into_inner();
        assert_eq!(acc.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_first_ignores_input() {
        let mut rf = first::<&str>();
        assert_eq!(rf.step("keep", 99), Ok(Step::Continue("keep")));
    }

    #[test]
    fn test_last_takes_input() {
        let mut rf = last();
        assert_eq!(rf.step(1, 2), Ok(Step::Continue(2)));
    }

    #[test]
    fn test_base_reducers_are_unbounded() {
        assert!(!Reducer::<i32>::is_bounded(&first::<i32>()));
        assert!(!Reducer::<i32>::is_bounded(&last()));
        assert!(!Reducer::<i32>::is_bounded(
            &collecting::<Vec<i32>>()
        ));
    }
}
