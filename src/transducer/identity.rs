//! The do-nothing transducer

use super::Transducer;
use crate::reducer::Reducer;

/// Transducer returning its reducer untouched.
///
/// Created by [`identity`]; also what [`BoxedTransducer::default`]
/// holds.
///
/// [`BoxedTransducer::default`]: crate::transducer::BoxedTransducer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T, E> Transducer<T, T, E> for Identity {
    type Applied<'a, R>
        = R
    where
        Self: 'a,
        R: Reducer<T, Error = E> + 'a;

    #[inline]
    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<T, Error = E> + 'a,
    {
        rf
    }
}

/// The neutral element of composition.
///
/// ```
/// use transducers::prelude::*;
///
/// let v = vec![3, 1, 2];
/// assert_eq!(into(Vec::new(), identity(), v.clone()), v);
/// ```
pub fn identity() -> Identity {
    Identity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drive::into;
    use crate::transducer::{comp, map};

    #[test]
    fn test_identity_is_neutral_on_both_sides() {
        let f = |x: i32| x * 7;
        let left = into(Vec::new(), comp(identity(), map(f)), vec![1, 2]);
        let right = into(Vec::new(), comp(map(f), identity()), vec![1, 2]);
        assert_eq!(left, vec![7, 14]);
        assert_eq!(left, right);
    }
}
