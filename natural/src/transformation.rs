use std::fmt;
use std::marker::PhantomData;

use crate::combinator::{And, Composed, Inside, Or, PairShape, SumShape};
use crate::frame::{MappableFrame, MappableFrameRef, Shape};

/// A natural transformation from the shape `Source` to the shape `Target`: for every
/// element type `A`, a function from `Source::Frame<A>` to `Target::Frame<A>` that moves,
/// drops or duplicates elements but never looks inside them.
///
/// `apply` is generic in the element type, and the element type is chosen by whoever
/// calls it. Elements must be `Clone` so that a single frame can be shared between
/// transformations (see [`Transformation::and`]). To transform frames of non-`Clone`
/// data, transform a frame of references.
///
/// # Naturality
///
/// Implementations must commute with mapping over elements: for every `f: A -> B`,
///
/// ```text
/// Target::map_frame(t.apply(x), f) == t.apply(Source::map_frame(x, f))
/// ```
///
/// This law is not checked when a transformation is built. See [`crate::laws`].
///
/// # Implementing this trait
///
/// ```rust
/// # use natural::{PartiallyApplied, Transformation};
/// struct Head;
///
/// impl Transformation for Head {
///     type Source = Vec<PartiallyApplied>;
///     type Target = Option<PartiallyApplied>;
///
///     fn apply<A: Clone>(&self, input: Vec<A>) -> Option<A> {
///         input.into_iter().next()
///     }
/// }
///
/// assert_eq!(Head.apply(vec!['a', 'b']), Some('a'));
/// assert_eq!(Head.apply(Vec::<String>::new()), None);
/// ```
pub trait Transformation {
    /// the shape transformed from
    type Source: Shape;
    /// the shape transformed to
    type Target: Shape;

    fn apply<A: Clone>(
        &self,
        input: <Self::Source as Shape>::Frame<A>,
    ) -> <Self::Target as Shape>::Frame<A>;

    /// Apply `first`, then `self`.
    ///
    /// ```rust
    /// # use natural::{transformation, PartiallyApplied, Transformation};
    /// let reverse = transformation!(Vec<PartiallyApplied> => Vec<PartiallyApplied>, |xs| {
    ///     xs.into_iter().rev().collect()
    /// });
    /// let head = transformation!(Vec<PartiallyApplied> => Option<PartiallyApplied>, |xs| {
    ///     xs.into_iter().next()
    /// });
    ///
    /// let last = head.compose(reverse);
    /// assert_eq!(last.apply(vec![1, 2, 3]), Some(3));
    /// ```
    fn compose<T>(self, first: T) -> Composed<Self, T>
    where
        Self: Sized,
        T: Transformation<Target = Self::Source>,
    {
        Composed::new(self, first)
    }

    /// Apply `self`, then `second`. Equivalent to `second.compose(self)`.
    fn and_then<T>(self, second: T) -> Composed<T, Self>
    where
        Self: Sized,
        T: Transformation<Source = Self::Target>,
    {
        second.compose(self)
    }

    /// Combine with a transformation sharing this one's target, producing a
    /// transformation out of the sum shape `S`. Left payloads go through `self`,
    /// right payloads through `alt`.
    fn or<S, T>(self, alt: T) -> Or<Self, T, S>
    where
        Self: Sized,
        T: Transformation<Target = Self::Target>,
        S: SumShape<Left = Self::Source, Right = T::Source>,
    {
        Or::new(self, alt)
    }

    /// Combine with a transformation sharing this one's source, producing a
    /// transformation into the pair shape `P` holding both results side by side.
    fn and<P, T>(self, other: T) -> And<Self, T, P>
    where
        Self: Sized,
        Self::Source: MappableFrameRef,
        T: Transformation<Source = Self::Source>,
        P: PairShape<First = Self::Target, Second = T::Target>,
    {
        And::new(self, other)
    }

    /// Run this transformation on each inner frame of some outer shape `H`,
    /// transforming `H<Source<A>>` into `H<Target<A>>`.
    ///
    /// ```rust
    /// # use natural::{transformation, PartiallyApplied, Transformation};
    /// let head = transformation!(Vec<PartiallyApplied> => Option<PartiallyApplied>, |xs| {
    ///     xs.into_iter().next()
    /// });
    ///
    /// let heads = head.inside::<Vec<PartiallyApplied>>();
    /// assert_eq!(heads.apply(vec![vec![1, 2], vec![], vec![3]]), vec![Some(1), None, Some(3)]);
    /// ```
    fn inside<H>(self) -> Inside<Self, H>
    where
        Self: Sized,
        H: MappableFrame,
    {
        Inside::new(self)
    }
}

impl<'t, T: Transformation> Transformation for &'t T {
    type Source = T::Source;
    type Target = T::Target;

    #[inline(always)]
    fn apply<A: Clone>(
        &self,
        input: <Self::Source as Shape>::Frame<A>,
    ) -> <Self::Target as Shape>::Frame<A> {
        (**self).apply::<A>(input)
    }
}

/// The transformation from a shape to itself that leaves every frame unchanged.
pub struct Identity<F>(PhantomData<fn() -> F>);

impl<F: Shape> Transformation for Identity<F> {
    type Source = F;
    type Target = F;

    #[inline(always)]
    fn apply<A: Clone>(&self, input: F::Frame<A>) -> F::Frame<A> {
        input
    }
}

/// Build the [`Identity`] transformation for the shape `F`, the unit of [`Transformation::compose`].
///
/// ```rust
/// # use natural::{identity, PartiallyApplied, Transformation};
/// let id = identity::<Option<PartiallyApplied>>();
/// assert_eq!(id.apply(Some("x")), Some("x"));
/// ```
pub fn identity<F: Shape>() -> Identity<F> {
    Identity(PhantomData)
}

// manual impls: derives would demand `F: Clone` etc of the shape token
impl<F> Clone for Identity<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Identity<F> {}

impl<F: Shape> Default for Identity<F> {
    fn default() -> Self {
        identity()
    }
}

impl<F> fmt::Debug for Identity<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identity")
            .field(&std::any::type_name::<F>())
            .finish()
    }
}
