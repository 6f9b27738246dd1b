//! Concrete sum and pair shapes for exercising `or` and `and`, plus a handful of
//! list-like transformations and proptest strategies to drive them.
use std::collections::VecDeque;
use std::marker::PhantomData;

use natural::{
    transformation, MappableFrame, MappableFrameRef, PairShape, PartiallyApplied, Shape, SumShape,
};
use proptest::prelude::*;

/// Exactly one of two frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

/// The sum of the shapes `F` and `H`: `Either<F<X>, H<X>>`.
pub struct EitherShape<F, H>(PhantomData<F>, PhantomData<H>);

impl<F: Shape, H: Shape> Shape for EitherShape<F, H> {
    type Frame<X> = Either<F::Frame<X>, H::Frame<X>>;
}

impl<F: MappableFrame, H: MappableFrame> MappableFrame for EitherShape<F, H> {
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B> {
        match input {
            Either::Left(l) => Either::Left(F::map_frame::<A, B>(l, f)),
            Either::Right(r) => Either::Right(H::map_frame::<A, B>(r, f)),
        }
    }
}

impl<F: MappableFrameRef, H: MappableFrameRef> MappableFrameRef for EitherShape<F, H> {
    fn as_ref<'a, X: 'a>(input: &'a Self::Frame<X>) -> Self::Frame<&'a X>
    where
        Self: 'a,
    {
        match input {
            Either::Left(l) => Either::Left(F::as_ref::<X>(l)),
            Either::Right(r) => Either::Right(H::as_ref::<X>(r)),
        }
    }
}

impl<F: Shape, H: Shape> SumShape for EitherShape<F, H> {
    type Left = F;
    type Right = H;

    fn fold<A, R>(
        input: Self::Frame<A>,
        on_left: impl FnOnce(<Self::Left as Shape>::Frame<A>) -> R,
        on_right: impl FnOnce(<Self::Right as Shape>::Frame<A>) -> R,
    ) -> R {
        match input {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }
}

/// The product of the shapes `F` and `H`: `(F<X>, H<X>)`.
pub struct Both<F, H>(PhantomData<F>, PhantomData<H>);

impl<F: Shape, H: Shape> Shape for Both<F, H> {
    type Frame<X> = (F::Frame<X>, H::Frame<X>);
}

impl<F: MappableFrame, H: MappableFrame> MappableFrame for Both<F, H> {
    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        let (first, second) = input;
        (
            F::map_frame::<A, B>(first, &mut f),
            H::map_frame::<A, B>(second, &mut f),
        )
    }
}

impl<F: MappableFrameRef, H: MappableFrameRef> MappableFrameRef for Both<F, H> {
    fn as_ref<'a, X: 'a>(input: &'a Self::Frame<X>) -> Self::Frame<&'a X>
    where
        Self: 'a,
    {
        (F::as_ref::<X>(&input.0), H::as_ref::<X>(&input.1))
    }
}

impl<F: Shape, H: Shape> PairShape for Both<F, H> {
    type First = F;
    type Second = H;

    fn pair<A>(
        first: <Self::First as Shape>::Frame<A>,
        second: <Self::Second as Shape>::Frame<A>,
    ) -> Self::Frame<A> {
        (first, second)
    }
}

transformation! {
    /// the first element, if any
    pub Head: Vec<PartiallyApplied> => Option<PartiallyApplied> = |xs| xs.into_iter().next()
}

transformation! {
    /// the last element, if any
    pub Last: Vec<PartiallyApplied> => Option<PartiallyApplied> = |xs| xs.into_iter().last()
}

transformation! {
    pub Reverse: Vec<PartiallyApplied> => Vec<PartiallyApplied> = |xs| xs.into_iter().rev().collect()
}

transformation! {
    /// move the first element to the back
    pub RotateLeft: Vec<PartiallyApplied> => Vec<PartiallyApplied> = |xs| {
        let mut xs = xs;
        if !xs.is_empty() {
            xs.rotate_left(1);
        }
        xs
    }
}

transformation! {
    /// every element at an even index
    pub Evens: Vec<PartiallyApplied> => Vec<PartiallyApplied> = |xs| xs.into_iter().step_by(2).collect()
}

transformation! {
    /// every element, twice in a row
    pub Stutter: Vec<PartiallyApplied> => Vec<PartiallyApplied> = |xs| {
        xs.into_iter().flat_map(|x| [x.clone(), x]).collect()
    }
}

transformation! {
    pub Wrap: Option<PartiallyApplied> => Vec<PartiallyApplied> = |x| x.into_iter().collect()
}

transformation! {
    pub ToDeque: Vec<PartiallyApplied> => VecDeque<PartiallyApplied> = |xs| VecDeque::from(xs)
}

pub fn arb_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..16)
}

pub fn arb_option() -> impl Strategy<Value = Option<i32>> {
    prop::option::of(any::<i32>())
}

pub fn arb_either() -> impl Strategy<Value = Either<Vec<i32>, Option<i32>>> {
    prop_oneof![
        arb_vec().prop_map(Either::Left),
        arb_option().prop_map(Either::Right),
    ]
}
