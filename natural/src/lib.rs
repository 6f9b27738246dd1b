//! Natural transformations between container shapes.
//!
//! A [`Transformation`] converts a frame of one [`Shape`] into a frame of another for
//! every element type at once, rearranging elements without ever looking at them.
//! Shapes are encoded as marker tokens with a generic associated type, the usual
//! trick for writing higher-kinded code in Rust:
//!
//! ```rust
//! use natural::{transformation, PartiallyApplied, Transformation};
//!
//! transformation! {
//!     Head: Vec<PartiallyApplied> => Option<PartiallyApplied> = |xs| xs.into_iter().next()
//! }
//!
//! assert_eq!(Head.apply(vec![1, 2, 3]), Some(1));
//! assert_eq!(Head.apply(vec!["a", "b"]), Some("a"));
//! ```
//!
//! Element types must be `Clone`, so that [`Transformation::and`] can hand the same
//! frame to two transformations. Elements that are not `Clone` can be transformed
//! through a frame of references instead:
//!
//! ```rust
//! # use natural::{transformation, PartiallyApplied, Transformation};
//! # transformation! {
//! #     Head: Vec<PartiallyApplied> => Option<PartiallyApplied> = |xs| xs.into_iter().next()
//! # }
//! struct Handle(u32);
//!
//! let handles = vec![Handle(7), Handle(8)];
//! let first = Head.apply(handles.iter().collect::<Vec<&Handle>>());
//! assert_eq!(first.map(|h| h.0), Some(7));
//! ```
mod combinator;
mod frame;
pub mod laws;
mod lift;
mod recursive;
mod transformation;

pub use combinator::{And, Composed, Inside, Or, PairShape, SumShape};
pub use frame::{
    clone_frame, expand_and_collapse, hoist, try_expand_and_collapse, try_hoist, Compose,
    MappableFrame, MappableFrameRef, PartiallyApplied, Shape,
};
pub use lift::{lift, FrameFn, Lift};
pub use recursive::{Collapsible, Expandable};
pub use transformation::{identity, Identity, Transformation};
