//! Transformations built out of other transformations, and the sum and pair shape
//! contracts that [`Or`] and [`And`] consume.
use std::fmt;
use std::marker::PhantomData;

use crate::frame::{clone_frame, Compose, MappableFrame, MappableFrameRef, Shape};
use crate::transformation::Transformation;

/// A shape holding exactly one of two alternative frames, `Left` or `Right`.
///
/// Consumed by [`Transformation::or`], which only needs to eliminate it.
pub trait SumShape: Shape {
    type Left: Shape;
    type Right: Shape;

    /// Eliminate a sum frame by handling whichever side is present.
    fn fold<A, R>(
        input: Self::Frame<A>,
        on_left: impl FnOnce(<Self::Left as Shape>::Frame<A>) -> R,
        on_right: impl FnOnce(<Self::Right as Shape>::Frame<A>) -> R,
    ) -> R;
}

/// A shape holding one `First` frame and one `Second` frame side by side.
///
/// Consumed by [`Transformation::and`], which only needs to construct it.
pub trait PairShape: Shape {
    type First: Shape;
    type Second: Shape;

    fn pair<A>(
        first: <Self::First as Shape>::Frame<A>,
        second: <Self::Second as Shape>::Frame<A>,
    ) -> Self::Frame<A>;
}

/// `outer` after `inner`, see [`Transformation::compose`].
#[derive(Clone, Copy, Debug)]
pub struct Composed<S, T> {
    outer: S,
    inner: T,
}

impl<S, T> Composed<S, T> {
    pub(crate) fn new(outer: S, inner: T) -> Self {
        Self { outer, inner }
    }
}

impl<S, T> Transformation for Composed<S, T>
where
    S: Transformation,
    T: Transformation<Target = S::Source>,
{
    type Source = T::Source;
    type Target = S::Target;

    #[inline(always)]
    fn apply<A: Clone>(
        &self,
        input: <Self::Source as Shape>::Frame<A>,
    ) -> <Self::Target as Shape>::Frame<A> {
        self.outer.apply::<A>(self.inner.apply::<A>(input))
    }
}

/// Dispatch on the sides of the sum shape `Sum`, see [`Transformation::or`].
pub struct Or<S, T, Sum> {
    left: S,
    right: T,
    _sum: PhantomData<fn() -> Sum>,
}

impl<S, T, Sum> Or<S, T, Sum> {
    pub(crate) fn new(left: S, right: T) -> Self {
        Self {
            left,
            right,
            _sum: PhantomData,
        }
    }
}

impl<S: Clone, T: Clone, Sum> Clone for Or<S, T, Sum> {
    fn clone(&self) -> Self {
        Self::new(self.left.clone(), self.right.clone())
    }
}

// manual impls: derives would demand `Sum: Debug` of the shape token
impl<S: fmt::Debug, T: fmt::Debug, Sum> fmt::Debug for Or<S, T, Sum> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Or")
            .field("left", &self.left)
            .field("right", &self.right)
            .field("sum", &std::any::type_name::<Sum>())
            .finish()
    }
}

impl<S, T, Sum> Transformation for Or<S, T, Sum>
where
    S: Transformation,
    T: Transformation<Target = S::Target>,
    Sum: SumShape<Left = S::Source, Right = T::Source>,
{
    type Source = Sum;
    type Target = S::Target;

    fn apply<A: Clone>(&self, input: Sum::Frame<A>) -> <Self::Target as Shape>::Frame<A> {
        Sum::fold::<A, _>(
            input,
            |left| self.left.apply::<A>(left),
            |right| self.right.apply::<A>(right),
        )
    }
}

/// Both results side by side in the pair shape `Pair`, see [`Transformation::and`].
pub struct And<S, T, Pair> {
    first: S,
    second: T,
    _pair: PhantomData<fn() -> Pair>,
}

impl<S, T, Pair> And<S, T, Pair> {
    pub(crate) fn new(first: S, second: T) -> Self {
        Self {
            first,
            second,
            _pair: PhantomData,
        }
    }
}

impl<S: Clone, T: Clone, Pair> Clone for And<S, T, Pair> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<S: fmt::Debug, T: fmt::Debug, Pair> fmt::Debug for And<S, T, Pair> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("And")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("pair", &std::any::type_name::<Pair>())
            .finish()
    }
}

impl<S, T, Pair> Transformation for And<S, T, Pair>
where
    S: Transformation,
    S::Source: MappableFrameRef,
    T: Transformation<Source = S::Source>,
    Pair: PairShape<First = S::Target, Second = T::Target>,
{
    type Source = S::Source;
    type Target = Pair;

    fn apply<A: Clone>(&self, input: <Self::Source as Shape>::Frame<A>) -> Pair::Frame<A> {
        let copy = clone_frame::<S::Source, A>(&input);
        Pair::pair::<A>(self.first.apply::<A>(copy), self.second.apply::<A>(input))
    }
}

/// A transformation run underneath the outer shape `H`, see [`Transformation::inside`].
pub struct Inside<T, H> {
    inner: T,
    _outer: PhantomData<fn() -> H>,
}

impl<T, H> Inside<T, H> {
    pub(crate) fn new(inner: T) -> Self {
        Self {
            inner,
            _outer: PhantomData,
        }
    }
}

impl<T: Clone, H> Clone for Inside<T, H> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<T: fmt::Debug, H> fmt::Debug for Inside<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inside")
            .field("inner", &self.inner)
            .field("outer", &std::any::type_name::<H>())
            .finish()
    }
}

impl<T, H> Transformation for Inside<T, H>
where
    T: Transformation,
    H: MappableFrame,
{
    type Source = Compose<H, T::Source>;
    type Target = Compose<H, T::Target>;

    fn apply<A: Clone>(
        &self,
        input: <Self::Source as Shape>::Frame<A>,
    ) -> <Self::Target as Shape>::Frame<A> {
        H::map_frame::<<T::Source as Shape>::Frame<A>, <T::Target as Shape>::Frame<A>>(
            input,
            |frame| self.inner.apply::<A>(frame),
        )
    }
}
