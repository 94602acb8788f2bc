//! # Transducers
//!
//! Composable transformations of reducing processes.
//!
//! A transducer such as `map`, `filter` or `take` does not know where its
//! inputs come from or where its results go. It transforms one reducing
//! function into another, so the same pipeline can build a `Vec`, fold a
//! sum, zip several sequences in lockstep, or drive a generator.
//!
//! ## Building blocks
//!
//! - [`Reducer`]: the step + completion protocol, answering [`Step`] so any
//!   stage can stop the reduction early.
//! - [`Transducer`]: a reducer-to-reducer transformation. Concrete ones live
//!   in [`transducer`]; [`comp`](transducer::comp) and [`comp!`] chain them.
//! - [`BoxedTransducer`]: one type for any transducer of a given signature,
//!   reassignable at runtime.
//! - [`reduce`], [`transduce`], [`into`] and their `try_` forms drive a
//!   pipeline over an [`Inputs`] source.
//!
//! ## Quick Example
//!
//! ```rust
//! use transducers::prelude::*;
//!
//! let xf = comp!(
//!     filter(|x: &i32| x % 2 == 0),
//!     map(|x: i32| x * 2),
//!     take(2),
//! );
//!
//! // Same pipeline, three different reductions.
//! assert_eq!(into(Vec::new(), &xf, 1..=10), vec![4, 8]);
//! assert_eq!(transduce(&xf, |acc: i32, x: i32| acc + x, 0, 1..=10), 12);
//! assert_eq!(into(String::new(), comp(&xf, map(|x: i32| x.to_string())), 1..=10), "48");
//!
//! // Several sequences in lockstep.
//! let sums = into(Vec::new(), map(|(a, b): (i32, i32)| a + b), (vec![1, 2], vec![10, 20]));
//! assert_eq!(sums, vec![11, 22]);
//!
//! // A generator: no input sequence, `take` ends it.
//! let idx = into(Vec::new(), comp(take(3), enumerate()), ());
//! assert_eq!(idx, vec![0, 1, 2]);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod drive;
pub mod inputs;
pub mod reducer;
pub mod step;
pub mod testing;
pub mod transducer;

// Re-exports
pub use drive::{into, reduce, transduce, try_into, try_transduce};
pub use inputs::{each, Inputs};
pub use reducer::Reducer;
pub use step::{reduced, Step};
pub use transducer::{BoxedTransducer, Transducer, TransducerExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::comp;
    pub use crate::drive::{into, reduce, transduce, try_into, try_transduce};
    pub use crate::inputs::{each, Inputs};
    pub use crate::reducer::Reducer;
    pub use crate::step::{reduced, Step};
    pub use crate::transducer::{
        cat, comp, enumerate, filter, identity, map, skip, skip_while, take, take_while, traced,
        try_map, BoxedTransducer, Transducer, TransducerExt,
    };
}
