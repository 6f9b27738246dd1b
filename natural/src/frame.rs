use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::transformation::Transformation;

/// A container shape: some type constructor with exactly one element type parameter.
///
/// Rust does not allow implementing a trait for a partially applied type like `Option`,
/// so shapes are implemented for a marker token instead, usually the container applied to
/// the uninhabited [`PartiallyApplied`] enum:
///
/// ```rust
/// # use natural::{PartiallyApplied, Shape};
/// enum Pair<A> {
///     Pair(A, A),
/// }
///
/// impl Shape for Pair<PartiallyApplied> {
///     type Frame<X> = Pair<X>;
/// }
/// ```
///
/// This is all a [`crate::Transformation`] needs to know about its source and target shapes.
pub trait Shape {
    /// the container applied to some element type `X`
    type Frame<X>;
}

/// A shape whose frames can be mapped over via `map_frame`.
///
/// ```rust
/// # use natural::{MappableFrame, PartiallyApplied, Shape};
/// # #[derive(Debug, PartialEq, Eq)]
/// enum MyOption<A> {
///     Some(A),
///     None,
/// }
///
/// impl Shape for MyOption<PartiallyApplied> {
///     type Frame<X> = MyOption<X>;
/// }
///
/// impl MappableFrame for MyOption<PartiallyApplied> {
///     fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
///         match input {
///             MyOption::Some(x) => MyOption::Some(f(x)),
///             MyOption::None => MyOption::None,
///         }
///     }
/// }
///
/// let mapped = MyOption::<PartiallyApplied>::map_frame(MyOption::Some(1), |n| n + 10);
/// assert_eq!(mapped, MyOption::Some(11));
/// ```
pub trait MappableFrame: Shape {
    /// Apply some function `f` to each element inside a frame.
    ///
    /// For any two frames with identical structure, elements MUST be visited in the
    /// same order each time this is called. The stack machines below rely on it.
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B>;
}

/// A mappable shape that can lend out a frame of references to its elements.
///
/// `Self: 'a` lets nested shapes like [`Compose`] prove that their inner frames outlive
/// the borrow.
pub trait MappableFrameRef: MappableFrame {
    fn as_ref<'a, X: 'a>(input: &'a Self::Frame<X>) -> Self::Frame<&'a X>
    where
        Self: 'a;
}

/// "An uninhabited type used to define [`Shape`] instances for partially-applied types."
///
/// For example: the `Shape` instance for `MyFrame<A>` cannot be written over the
/// partially-applied type `MyFrame`, so instead we write it over `MyFrame<PartiallyApplied>`
#[derive(Clone, Copy, Debug)]
pub enum PartiallyApplied {}

/// Duplicate a frame by cloning each of its elements.
pub fn clone_frame<F: MappableFrameRef, A: Clone>(input: &F::Frame<A>) -> F::Frame<A> {
    F::map_frame::<&A, A>(F::as_ref::<A>(input), A::clone)
}

impl Shape for Option<PartiallyApplied> {
    type Frame<X> = Option<X>;
}

impl MappableFrame for Option<PartiallyApplied> {
    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B> {
        input.map(f)
    }
}

impl MappableFrameRef for Option<PartiallyApplied> {
    fn as_ref<'a, X: 'a>(input: &'a Self::Frame<X>) -> Self::Frame<&'a X>
    where
        Self: 'a,
    {
        input.as_ref()
    }
}

impl Shape for Vec<PartiallyApplied> {
    type Frame<X> = Vec<X>;
}

impl MappableFrame for Vec<PartiallyApplied> {
    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B> {
        input.into_iter().map(f).collect()
    }
}

impl MappableFrameRef for Vec<PartiallyApplied> {
    fn as_ref<'a, X: 'a>(input: &'a Self::Frame<X>) -> Self::Frame<&'a X>
    where
        Self: 'a,
    {
        input.iter().collect()
    }
}

impl Shape for VecDeque<PartiallyApplied> {
    type Frame<X> = VecDeque<X>;
}

impl MappableFrame for VecDeque<PartiallyApplied> {
    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B> {
        input.into_iter().map(f).collect()
    }
}

impl MappableFrameRef for VecDeque<PartiallyApplied> {
    fn as_ref<'a, X: 'a>(input: &'a Self::Frame<X>) -> Self::Frame<&'a X>
    where
        Self: 'a,
    {
        input.iter().collect()
    }
}

/// The shape `F1<F2<_>>`, one shape nested inside another.
pub struct Compose<F1, F2>(PhantomData<F1>, PhantomData<F2>);

impl<F1: Shape, F2: Shape> Shape for Compose<F1, F2> {
    type Frame<X> = F1::Frame<F2::Frame<X>>;
}

impl<F1: MappableFrame, F2: MappableFrame> MappableFrame for Compose<F1, F2> {
    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        #[allow(clippy::redundant_closure)] // this lint is wrong here
        F1::map_frame(input, move |x| F2::map_frame(x, |x| f(x)))
    }
}

impl<F1: MappableFrameRef, F2: MappableFrameRef> MappableFrameRef for Compose<F1, F2> {
    fn as_ref<'a, X: 'a>(input: &'a Self::Frame<X>) -> Self::Frame<&'a X>
    where
        Self: 'a,
    {
        F1::map_frame::<&'a F2::Frame<X>, F2::Frame<&'a X>>(
            F1::as_ref::<F2::Frame<X>>(input),
            |inner| F2::as_ref::<X>(inner),
        )
    }
}

/// This function generates a stack machine for some frame `F::Frame`,
/// expanding some seed value `Seed` into frames via a function `Seed -> Frame<Seed>`
/// and collapsing those values via a function `Frame<Out> -> Out`.
///
/// This function performs a depth-first traversal, expanding and collapsing each branch in turn
///
/// This function is stack safe (it does not use the call stack), but it
/// does use an internal stack data structure and is thus, technically,
/// susceptible to stack overflows if said stack expands
pub fn expand_and_collapse<F: MappableFrame, Seed, Out>(
    seed: Seed,
    mut expand_frame: impl FnMut(Seed) -> F::Frame<Seed>,
    mut collapse_frame: impl FnMut(F::Frame<Out>) -> Out,
) -> Out {
    enum State<Seed, CollapsibleInternal> {
        Expand(Seed),
        Collapse(CollapsibleInternal),
    }

    let mut vals: Vec<Out> = vec![];
    let mut stack = vec![State::Expand(seed)];

    while let Some(item) = stack.pop() {
        match item {
            State::Expand(seed) => {
                let node = expand_frame(seed);
                let mut seeds = Vec::new();
                let node = F::map_frame(node, |seed| seeds.push(seed));

                stack.push(State::Collapse(node));
                stack.extend(seeds.into_iter().map(State::Expand));
            }
            State::Collapse(node) => {
                let node = F::map_frame(node, |_: ()| vals.pop().unwrap());
                vals.push(collapse_frame(node))
            }
        };
    }
    vals.pop().unwrap()
}

/// Fallible version of [`expand_and_collapse`], short-circuiting on the first error
/// returned by either `expand_frame` or `collapse_frame`.
pub fn try_expand_and_collapse<F: MappableFrame, Seed, Out, E>(
    seed: Seed,
    mut expand_frame: impl FnMut(Seed) -> Result<F::Frame<Seed>, E>,
    mut collapse_frame: impl FnMut(F::Frame<Out>) -> Result<Out, E>,
) -> Result<Out, E> {
    enum State<Seed, CollapsibleInternal> {
        Expand(Seed),
        Collapse(CollapsibleInternal),
    }

    let mut vals: Vec<Out> = vec![];
    let mut stack = vec![State::Expand(seed)];

    while let Some(item) = stack.pop() {
        match item {
            State::Expand(seed) => {
                let node = expand_frame(seed)?;
                let mut seeds = Vec::new();
                let node = F::map_frame(node, |seed| seeds.push(seed));

                stack.push(State::Collapse(node));
                stack.extend(seeds.into_iter().map(State::Expand));
            }
            State::Collapse(node) => {
                let node = F::map_frame(node, |_: ()| vals.pop().unwrap());
                vals.push(collapse_frame(node)?)
            }
        };
    }
    Ok(vals.pop().unwrap())
}

/// Expand a seed layer by layer in the transformation's source shape, run each layer
/// through `transformation`, and collapse the resulting layers in its target shape.
///
/// Each layer is transformed before its children are expanded, so any seed the
/// transformation drops is never expanded at all.
///
/// ```rust
/// # use natural::{hoist, transformation, PartiallyApplied};
/// // a countdown, expanded as a `Vec` of (at most one) predecessor, hoisted into `Option`
/// let to_option = transformation!(Vec<PartiallyApplied> => Option<PartiallyApplied>, |xs| {
///     xs.into_iter().next()
/// });
///
/// let depth = hoist(
///     3u32,
///     &to_option,
///     |n| if n == 0 { vec![] } else { vec![n - 1] },
///     |frame: Option<u32>| frame.map_or(0, |d| d + 1),
/// );
///
/// assert_eq!(depth, 3);
/// ```
pub fn hoist<T, Seed, Out>(
    seed: Seed,
    transformation: &T,
    mut expand_frame: impl FnMut(Seed) -> <T::Source as Shape>::Frame<Seed>,
    collapse_frame: impl FnMut(<T::Target as Shape>::Frame<Out>) -> Out,
) -> Out
where
    T: Transformation,
    T::Target: MappableFrame,
    Seed: Clone,
{
    expand_and_collapse::<T::Target, Seed, Out>(
        seed,
        |seed| transformation.apply::<Seed>(expand_frame(seed)),
        collapse_frame,
    )
}

/// Fallible version of [`hoist`].
pub fn try_hoist<T, Seed, Out, E>(
    seed: Seed,
    transformation: &T,
    mut expand_frame: impl FnMut(Seed) -> Result<<T::Source as Shape>::Frame<Seed>, E>,
    collapse_frame: impl FnMut(<T::Target as Shape>::Frame<Out>) -> Result<Out, E>,
) -> Result<Out, E>
where
    T: Transformation,
    T::Target: MappableFrame,
    Seed: Clone,
{
    try_expand_and_collapse::<T::Target, Seed, Out, E>(
        seed,
        |seed| Ok(transformation.apply::<Seed>(expand_frame(seed)?)),
        collapse_frame,
    )
}
