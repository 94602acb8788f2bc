//! Input sources for the driving functions
//!
//! Anything passed as the `inputs` argument of [`reduce`](crate::reduce),
//! [`transduce`](crate::transduce) or [`into`](crate::into) implements
//! [`Inputs`]:
//!
//! - a single sequence: `Vec<T>`, `[T; N]`, `&[T]`, `&Vec<T>`, a range, or
//!   any iterator wrapped with [`each`];
//! - a tuple of sequences, traversed in lockstep and truncated to the
//!   shortest, yielding tuple packs;
//! - `()`, the generator source: no external input at all.
//!
//! ```
//! use transducers::prelude::*;
//!
//! // Lockstep over two sequences; the shorter one decides the length.
//! let sums = into(Vec::new(), map(|(a, b): (i32, i32)| a + b), (vec![1, 2, 3], [10, 20]));
//! assert_eq!(sums, vec![11, 22]);
//!
//! // Any iterator, through `each`.
//! let chars = into(String::new(), identity(), each("abc".chars().rev()));
//! assert_eq!(chars, "cba");
//! ```

use std::iter::{self, Repeat};
use std::ops::{Range, RangeFrom, RangeInclusive};

/// A source of inputs for a driving function.
pub trait Inputs {
    /// One input: a single element or a tuple pack.
    type Item;

    /// Iterator handing out the inputs, in order.
    type Iter: Iterator<Item = Self::Item>;

    /// `true` when the source never runs dry by itself: the generator, or a
    /// lockstep pack made only of generators.
    const GENERATOR: bool = false;

    /// Start traversal.
    fn into_inputs(self) -> Self::Iter;
}

/// The generator source: an endless run of empty packs.
///
/// Only sound when the reducing function eventually answers `Reduced`;
/// the driving functions check this before the first step.
impl Inputs for () {
    type Item = ();
    type Iter = Repeat<()>;
    const GENERATOR: bool = true;

    fn into_inputs(self) -> Self::Iter {
        iter::repeat(())
    }
}

impl<T> Inputs for Vec<T> {
    type Item = T;
    type Iter = std::vec::IntoIter<T>;

    fn into_inputs(self) -> Self::Iter {
        self.into_iter()
    }
}

impl<T, const N: usize> Inputs for [T; N] {
    type Item = T;
    type Iter = std::array::IntoIter<T, N>;

    fn into_inputs(self) -> Self::Iter {
        self.into_iter()
    }
}

impl<'a, T> Inputs for &'a [T] {
    type Item = &'a T;
    type Iter = std::slice::Iter<'a, T>;

    fn into_inputs(self) -> Self::Iter {
        self.iter()
    }
}

impl<'a, T> Inputs for &'a Vec<T> {
    type Item = &'a T;
    type Iter = std::slice::Iter<'a, T>;

    fn into_inputs(self) -> Self::Iter {
        self.iter()
    }
}

impl<T> Inputs for Range<T>
where
    Range<T>: Iterator<Item = T>,
{
    type Item = T;
    type Iter = Self;

    fn into_inputs(self) -> Self::Iter {
        self
    }
}

impl<T> Inputs for RangeInclusive<T>
where
    RangeInclusive<T>: Iterator<Item = T>,
{
    type Item = T;
    type Iter = Self;

    fn into_inputs(self) -> Self::Iter {
        self
    }
}

/// An endless sequence: only useful with a chain that terminates itself.
impl<T> Inputs for RangeFrom<T>
where
    RangeFrom<T>: Iterator<Item = T>,
{
    type Item = T;
    type Iter = Self;

    fn into_inputs(self) -> Self::Iter {
        self
    }
}

/// Any `IntoIterator` as a single input sequence.
///
/// Created by [`each`].
#[derive(Debug, Clone)]
pub struct Each<I>(I);

impl<I: IntoIterator> Inputs for Each<I> {
    type Item = I::Item;
    type Iter = I::IntoIter;

    fn into_inputs(self) -> Self::Iter {
        self.0.into_iter()
    }
}

/// Use any iterable as an input sequence.
///
/// ```
/// use transducers::prelude::*;
/// use std::collections::BTreeSet;
///
/// let set: BTreeSet<u8> = [3, 1, 2].into_iter().collect();
/// assert_eq!(into(Vec::<&u8>::new(), take(2), each(&set)), vec![&1, &2]);
/// ```
pub fn each<I: IntoIterator>(iter: I) -> Each<I> {
    Each(iter)
}

/// A one-sequence pack is the sequence itself.
impl<A: Inputs> Inputs for (A,) {
    type Item = A::Item;
    type Iter = A::Iter;
    const GENERATOR: bool = A::GENERATOR;

    fn into_inputs(self) -> Self::Iter {
        self.0.into_inputs()
    }
}

/// Several iterators advanced together, ending with the shortest.
#[derive(Debug, Clone)]
pub struct Lockstep<I>(I);

macro_rules! impl_inputs_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Inputs),+> Inputs for ($($T,)+) {
            type Item = ($($T::Item,)+);
            type Iter = Lockstep<($($T::Iter,)+)>;
            const GENERATOR: bool = $($T::GENERATOR)&&+;

            fn into_inputs(self) -> Self::Iter {
                Lockstep(($(self.$idx.into_inputs(),)+))
            }
        }

        impl<$($T: Iterator),+> Iterator for Lockstep<($($T,)+)> {
            type Item = ($($T::Item,)+);

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                Some(($(self.0.$idx.next()?,)+))
            }
        }
    };
}

// Lockstep packs of 2 through 6 sequences
impl_inputs_tuple!(0 T1, 1 T2);
impl_inputs_tuple!(0 T1, 1 T2, 2 T3);
impl_inputs_tuple!(0 T1, 1 T2, 2 T3, 3 T4);
impl_inputs_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5);
impl_inputs_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6);

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<S: Inputs>(inputs: S) -> Vec<S::Item> {
        inputs.into_inputs().collect()
    }

    #[test]
    fn test_single_sequences() {
        assert_eq!(collect(vec![1, 2]), vec![1, 2]);
        assert_eq!(collect([1, 2]), vec![1, 2]);
        assert_eq!(collect(&[1, 2][..]), vec![&1, &2]);
        assert_eq!(collect(&vec![1, 2]), vec![&1, &2]);
        assert_eq!(collect(1..3), vec![1, 2]);
        assert_eq!(collect(1..=3), vec![1, 2, 3]);
        assert_eq!((5..).into_inputs().take(2).collect::<Vec<_>>(), vec![5, 6]);
        assert_eq!(collect(each("ab".chars())), vec!['a', 'b']);
    }

    #[test]
    fn test_one_element_pack_is_the_sequence() {
        assert_eq!(collect((vec![7, 8],)), vec![7, 8]);
    }

    #[test]
    fn test_lockstep_stops_at_shortest() {
        let items = collect((vec![1, 2, 3], vec!["a", "b"]));
        assert_eq!(items, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn test_lockstep_six_sequences() {
        let items = collect(([1], [2], [3], [4], [5], [6]));
        assert_eq!(items, vec![(1, 2, 3, 4, 5, 6)]);
    }

    #[test]
    fn test_lockstep_with_empty_sequence_is_empty() {
        let items = collect((vec![1, 2], Vec::<i32>::new()));
        assert!(items.is_empty());
    }

    #[test]
    fn test_lockstep_with_generator_follows_the_sequence() {
        let items = collect((vec!['a', 'b'], ()));
        assert_eq!(items, vec![('a', ()), ('b', ())]);
    }

    #[test]
    fn test_generator_flag() {
        assert!(<() as Inputs>::GENERATOR);
        assert!(<((),) as Inputs>::GENERATOR);
        assert!(!<Vec<i32> as Inputs>::GENERATOR);
        assert!(!<(Vec<i32>, Vec<i32>) as Inputs>::GENERATOR);
        assert!(<((), ()) as Inputs>::GENERATOR);
        assert!(<((), (), ()) as Inputs>::GENERATOR);
        assert!(!<(Vec<i32>, ()) as Inputs>::GENERATOR);
        assert_eq!(().into_inputs().take(3).count(), 3);
    }
}
