//! Checks for the laws every [`Transformation`] is expected to obey, evaluated at a
//! single input. Intended to be driven by a property testing library.
//!
//! ```rust
//! # use natural::{laws, transformation, PartiallyApplied};
//! let head = transformation!(Vec<PartiallyApplied> => Option<PartiallyApplied>, |xs| {
//!     xs.into_iter().next()
//! });
//!
//! assert!(laws::is_natural(&head, vec![1, 2, 3], |n: i32| n.to_string()));
//! ```
use crate::frame::{clone_frame, MappableFrame, MappableFrameRef, Shape};
use crate::transformation::{identity, Transformation};

/// Does the naturality square commute at `input`? That is, does transforming and then
/// mapping `f` give the same frame as mapping `f` and then transforming?
pub fn is_natural<T, A, B>(
    transformation: &T,
    input: <T::Source as Shape>::Frame<A>,
    mut f: impl FnMut(A) -> B,
) -> bool
where
    T: Transformation,
    T::Source: MappableFrameRef,
    T::Target: MappableFrame,
    A: Clone,
    B: Clone,
    <T::Target as Shape>::Frame<B>: PartialEq,
{
    let copy = clone_frame::<T::Source, A>(&input);

    let transformed_then_mapped = <T::Target as MappableFrame>::map_frame::<A, B>(
        transformation.apply::<A>(input),
        |a| f(a),
    );
    let mapped_then_transformed = transformation
        .apply::<B>(<T::Source as MappableFrame>::map_frame::<A, B>(copy, |a| f(a)));

    transformed_then_mapped == mapped_then_transformed
}

/// Do two transformations between the same shapes produce the same frame from `input`?
pub fn agree<T, U, A>(left: &T, right: &U, input: <T::Source as Shape>::Frame<A>) -> bool
where
    T: Transformation,
    T::Source: MappableFrameRef,
    U: Transformation<Source = T::Source, Target = T::Target>,
    A: Clone,
    <T::Target as Shape>::Frame<A>: PartialEq,
{
    let copy = clone_frame::<T::Source, A>(&input);
    left.apply::<A>(input) == right.apply::<A>(copy)
}

/// Does the identity transformation leave `input` unchanged?
pub fn preserves_identity<F, A>(input: F::Frame<A>) -> bool
where
    F: MappableFrameRef,
    A: Clone,
    F::Frame<A>: PartialEq,
{
    let copy = clone_frame::<F, A>(&input);
    identity::<F>().apply::<A>(input) == copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::PartiallyApplied;

    /// Peeks at its elements, which no transformation may do. Only possible here
    /// because the element type is known to be `i32`, so this is not a `Transformation`.
    fn drop_negatives(input: Vec<i32>) -> Option<i32> {
        input.into_iter().find(|x| *x >= 0)
    }

    struct Head;

    impl Transformation for Head {
        type Source = Vec<PartiallyApplied>;
        type Target = Option<PartiallyApplied>;

        fn apply<A: Clone>(&self, input: Vec<A>) -> Option<A> {
            input.into_iter().next()
        }
    }

    #[test]
    fn head_is_natural() {
        assert!(is_natural(&Head, vec![3, -1, 2], |n: i32| n * 10));
        assert!(is_natural(&Head, Vec::<i32>::new(), |n: i32| n * 10));
    }

    #[test]
    fn element_inspection_breaks_the_square() {
        // map then filter differs from filter then map when f changes the sign
        let input = vec![-1, 2];
        let f = |n: i32| -n;
        let filtered_then_mapped = drop_negatives(input.clone()).map(f);
        let mapped_then_filtered = drop_negatives(input.into_iter().map(f).collect());
        assert_ne!(filtered_then_mapped, mapped_then_filtered);
    }

    #[test]
    fn identity_leaves_frames_alone() {
        assert!(preserves_identity::<Vec<PartiallyApplied>, _>(vec!['a', 'b']));
        assert!(preserves_identity::<Option<PartiallyApplied>, _>(None::<u8>));
    }

    #[test]
    fn head_agrees_with_itself_by_reference() {
        assert!(agree(&Head, &&Head, vec![1, 2]));
    }
}
