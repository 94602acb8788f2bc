//! BoxedTransducer - type-erased transducer for opt-in boxing.
//!
//! Use `BoxedTransducer` when you need to:
//! - Reassign a pipeline at runtime
//! - Store different transducer types behind one type
//! - Return different transducers from match arms
//!
//! # How erasure works
//!
//! The erased chain cannot know the accumulator type of the reducer it will
//! be applied to, so every erased stage runs with a `()` accumulator. The
//! real accumulator is parked in a per-invocation slot shared by the two
//! ends of the chain: the outer end moves it in before each step and moves
//! it back out afterwards, the inner end moves it out to call the concrete
//! reducer and back in with the result. The accumulator is only ever moved,
//! never cloned, however many erased layers it crosses.

use std::cell::Cell;
use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;

use super::{comp, Identity, Transducer};
use crate::reducer::Reducer;
use crate::step::Step;

/// An erased reducer: accumulator lives in a [`Slot`].
type DynReducer<'a, T, E> = Box<dyn Reducer<T, Acc = (), Error = E> + 'a>;

/// Object-safe face of [`Transducer`].
trait DynTransducer<In, Out, E> {
    fn apply_dyn<'a>(&'a self, rf: DynReducer<'a, Out, E>) -> DynReducer<'a, In, E>;
}

impl<X, In, Out, E> DynTransducer<In, Out, E> for X
where
    X: Transducer<In, Out, E>,
    In: 'static,
    Out: 'static,
    E: 'static,
{
    fn apply_dyn<'a>(&'a self, rf: DynReducer<'a, Out, E>) -> DynReducer<'a, In, E> {
        Box::new(self.apply(rf))
    }
}

/// Hand-off point for the accumulator between the ends of an erased chain.
struct Slot<A>(Rc<Cell<Option<A>>>);

impl<A> Slot<A> {
    fn new() -> Self {
        Slot(Rc::new(Cell::new(None)))
    }

    fn share(&self) -> Self {
        Slot(Rc::clone(&self.0))
    }

    fn put(&self, acc: A) {
        self.0.set(Some(acc));
    }

    fn take(&self) -> A {
        self.0
            .take()
            .expect("accumulator slot is filled before every erased call")
    }
}

/// Inner end: adapts a concrete reducer to the erased `()` protocol.
struct Slotted<R, A> {
    inner: R,
    slot: Slot<A>,
}

impl<R, A, T> Reducer<T> for Slotted<R, A>
where
    R: Reducer<T, Acc = A>,
{
    type Acc = ();
    type Error = R::Error;

    fn step(&mut self, (): (), input: T) -> Result<Step<()>, R::Error> {
        let acc = self.slot.take();
        let step = self.inner.step(acc, input)?;
        Ok(step.map(|acc| self.slot.put(acc)))
    }

    fn complete(&mut self, (): ()) {
        let acc = self.slot.take();
        self.slot.put(self.inner.complete(acc));
    }

    fn is_bounded(&self) -> bool {
        self.inner.is_bounded()
    }
}

/// Outer end: restores the typed accumulator around an erased chain.
///
/// Produced by applying a [`BoxedTransducer`]. Not `Send`: the slot is
/// reference-counted for single-threaded use.
pub struct Erased<'a, In, A, E> {
    chain: DynReducer<'a, In, E>,
    slot: Slot<A>,
}

impl<In, A, E> fmt::Debug for Erased<'_, In, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Erased")
            .field("chain", &"<erased>")
            .finish()
    }
}

impl<In, A, E> Reducer<In> for Erased<'_, In, A, E> {
    type Acc = A;
    type Error = E;

    fn step(&mut self, acc: A, input: In) -> Result<Step<A>, E> {
        self.slot.put(acc);
        let step = self.chain.step((), input)?;
        let acc = self.slot.take();
        Ok(step.map(|()| acc))
    }

    fn complete(&mut self, acc: A) -> A {
        self.slot.put(acc);
        self.chain.complete(());
        self.slot.take()
    }

    fn is_bounded(&self) -> bool {
        self.chain.is_bounded()
    }
}

/// A type-erased transducer.
///
/// Holds exactly one concrete transducer whose signature is `In -> Out`
/// with error type `E`. The signature is checked by the compiler when a
/// transducer is stored, so a mismatch never reaches runtime.
///
/// # Example
///
/// ```
/// use transducers::prelude::*;
///
/// let v = vec![1, 2, 3, 4];
/// let mut xf = BoxedTransducer::<i32>::default();
/// assert_eq!(into(Vec::new(), &xf, v.clone()), v);
///
/// xf.set(map(|x: i32| x + 2));
/// assert_eq!(into(Vec::new(), &xf, v.clone()), vec![3, 4, 5, 6]);
///
/// xf.set(filter(|x: &i32| x % 2 == 1));
/// assert_eq!(into(Vec::new(), &xf, v.clone()), vec![1, 3]);
///
/// xf.set(take(3));
/// assert_eq!(into(Vec::new(), &xf, v), vec![1, 2, 3]);
/// ```
///
/// # Composition
///
/// ```
/// use transducers::prelude::*;
///
/// let parse: BoxedTransducer<String, i32> = map(|s: String| s.parse::<i32>().unwrap_or(0)).boxed();
/// let halve: BoxedTransducer<i32, f32> = map(|x: i32| x as f32 / 2.0).boxed();
///
/// let both: BoxedTransducer<String, f32> = parse.comp(halve);
/// let res = into(Vec::new(), &both, vec!["1".to_string(), "2".to_string(), "3".to_string()]);
/// assert_eq!(res, vec![0.5, 1.0, 1.5]);
/// ```
pub struct BoxedTransducer<In, Out = In, E = Infallible> {
    inner: Box<dyn DynTransducer<In, Out, E>>,
}

impl<In, Out, E> fmt::Debug for BoxedTransducer<In, Out, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedTransducer")
            .field("inner", &"<transducer>")
            .finish()
    }
}

impl<In, Out, E> BoxedTransducer<In, Out, E>
where
    In: 'static,
    Out: 'static,
    E: 'static,
{
    /// Erase a concrete transducer.
    pub fn new<X>(xf: X) -> Self
    where
        X: Transducer<In, Out, E> + 'static,
    {
        BoxedTransducer {
            inner: Box::new(xf),
        }
    }

    /// Replace the held transducer. The previous one is dropped; nothing of
    /// its state carries over.
    pub fn set<X>(&mut self, xf: X)
    where
        X: Transducer<In, Out, E> + 'static,
    {
        self.inner = Box::new(xf);
    }

    /// Chain `next` after this transducer, staying erased.
    ///
    /// Both stages keep their own state in every application.
    ///
    /// ```
    /// use transducers::prelude::*;
    ///
    /// let two: BoxedTransducer<i32> = take(2).boxed();
    /// let xf = two.comp(take(3));
    /// assert_eq!(into(Vec::new(), &xf, vec![1, 2, 3, 4, 5]), vec![1, 2]);
    /// ```
    pub fn comp<X, Next>(self, next: X) -> BoxedTransducer<In, Next, E>
    where
        X: Transducer<Out, Next, E> + 'static,
        Next: 'static,
    {
        BoxedTransducer::new(comp::<_, _, Out>(self, next))
    }
}

impl<T: 'static, E: 'static> Default for BoxedTransducer<T, T, E> {
    /// The identity transducer.
    fn default() -> Self {
        BoxedTransducer::new(Identity)
    }
}

impl<In, Out, E> Transducer<In, Out, E> for BoxedTransducer<In, Out, E>
where
    In: 'static,
    Out: 'static,
    E: 'static,
{
    type Applied<'a, R>
        = Erased<'a, In, R::Acc, E>
    where
        Self: 'a,
        R: Reducer<Out, Error = E> + 'a;

    fn apply<'a, R>(&'a self, rf: R) -> Self::Applied<'a, R>
    where
        R: Reducer<Out, Error = E> + 'a,
    {
        let slot = Slot::new();
        let slotted: DynReducer<'a, Out, E> = Box::new(Slotted {
            inner: rf,
            slot: slot.share(),
        });
        Erased {
            chain: self.inner.apply_dyn(slotted),
            slot,
        }
    }
}
