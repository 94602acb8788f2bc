//! Step results and early termination
//!
//! Every call to [`Reducer::step`](crate::Reducer::step) answers with a
//! [`Step`]: either the reduction continues with a new accumulator, or the
//! accumulator is final and the driving loop must stop pulling input.
//!
//! # Propagation
//!
//! A `Reduced` result is sticky. Transducers that receive one from their
//! inner reducer hand it back unchanged; none of them may unwrap it and keep
//! going.
//!
//! ```
//! use transducers::{reduced, Step};
//!
//! let done = reduced(10);
//! assert!(done.is_reduced());
//!
//! // Mapping the accumulator keeps the variant.
//! assert_eq!(done.map(|acc| acc * 2), Step::Reduced(20));
//! assert_eq!(Step::Continue(1).map(|acc| acc + 1), Step::Continue(2));
//! ```

use std::ops::ControlFlow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a single reduction step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step<A> {
    /// Keep reducing with this accumulator.
    Continue(A),
    /// Stop: this accumulator is final.
    Reduced(A),
}

impl<A> Step<A> {
    /// Wrap an accumulator that should keep the reduction going.
    #[inline]
    pub fn cont(acc: A) -> Self {
        Step::Continue(acc)
    }

    /// Wrap an accumulator that terminates the reduction.
    #[inline]
    pub fn reduced(acc: A) -> Self {
        Step::Reduced(acc)
    }

    /// Returns `true` if this step terminates the reduction.
    #[inline]
    pub fn is_reduced(&self) -> bool {
        matches!(self, Step::Reduced(_))
    }

    /// Returns `true` if the reduction should continue.
    #[inline]
    pub fn is_continue(&self) -> bool {
        matches!(self, Step::Continue(_))
    }

    /// Extract the accumulator, discarding the termination signal.
    ///
    /// Only driving loops should call this; a transducer that unwraps a
    /// reduced accumulator and carries on breaks early termination.
    #[inline]
    pub fn into_inner(self) -> A {
        match self {
            Step::Continue(acc) | Step::Reduced(acc) => acc,
        }
    }

    /// Borrow the accumulator.
    #[inline]
    pub fn as_inner(&self) -> &A {
        match self {
            Step::Continue(acc) | Step::Reduced(acc) => acc,
        }
    }

    /// Transform the accumulator, preserving the variant.
    ///
    /// ```
    /// use transducers::Step;
    ///
    /// let step = Step::Reduced(vec![1, 2]).map(|v| v.len());
    /// assert_eq!(step, Step::Reduced(2));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Step<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Step::Continue(acc) => Step::Continue(f(acc)),
            Step::Reduced(acc) => Step::Reduced(f(acc)),
        }
    }

    /// Force termination. A step that is already reduced is returned as is.
    ///
    /// ```
    /// use transducers::Step;
    ///
    /// assert_eq!(Step::Continue(3).into_reduced(), Step::Reduced(3));
    /// assert_eq!(Step::Reduced(3).into_reduced(), Step::Reduced(3));
    /// ```
    #[inline]
    pub fn into_reduced(self) -> Self {
        Step::Reduced(self.into_inner())
    }
}

impl<A> From<Step<A>> for ControlFlow<A, A> {
    fn from(step: Step<A>) -> Self {
        match step {
            Step::Continue(acc) => ControlFlow::Continue(acc),
            Step::Reduced(acc) => ControlFlow::Break(acc),
        }
    }
}

impl<A> From<ControlFlow<A, A>> for Step<A> {
    fn from(flow: ControlFlow<A, A>) -> Self {
        match flow {
            ControlFlow::Continue(acc) => Step::Continue(acc),
            ControlFlow::Break(acc) => Step::Reduced(acc),
        }
    }
}

/// Mark an accumulator as final.
///
/// Shorthand for [`Step::reduced`].
#[inline]
pub fn reduced<A>(acc: A) -> Step<A> {
    Step::Reduced(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_is_reduced() {
        assert!(reduced(1).is_reduced());
        assert!(!reduced(1).is_continue());
        assert!(Step::cont(1).is_continue());
    }

    #[test]
    fn test_into_inner_discards_signal() {
        assert_eq!(Step::Continue("a").into_inner(), "a");
        assert_eq!(Step::Reduced("b").into_inner(), "b");
    }

    #[test]
    fn test_map_preserves_variant() {
        assert_eq!(Step::Continue(2).map(|x| x * 10), Step::Continue(20));
        assert_eq!(Step::Reduced(2).map(|x| x * 10), Step::Reduced(20));
    }

    #[test]
    fn test_into_reduced_is_idempotent() {
        let once = Step::Continue(5).into_reduced();
        assert_eq!(once, Step::Reduced(5));
        assert_eq!(once.into_reduced(), Step::Reduced(5));
    }

    #[test]
    fn test_control_flow_conversion() {
        let flow: ControlFlow<i32, i32> = reduced(7).into();
        assert_eq!(flow, ControlFlow::Break(7));
        assert_eq!(Step::from(ControlFlow::Continue(1)), Step::Continue(1));
    }

    #[test]
    fn test_as_inner_borrows() {
        let step = Step::Continue(String::from("acc"));
        assert_eq!(step.as_inner(), "acc");
        assert!(step.is_continue());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_keeps_variant() {
        let json = serde_json::to_string(&reduced(3)).unwrap();
        assert_eq!(json, r#"{"Reduced":3}"#);
        let back: Step<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Step::Reduced(3));
    }
}
