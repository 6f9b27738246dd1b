use std::marker::PhantomData;

use crate::frame::Shape;
use crate::transformation::Transformation;

/// A genuinely generic function from `F` frames to `G` frames, for any element type.
///
/// Unlike [`Transformation`], the shapes are parameters rather than associated types,
/// so a single function can serve several pairs of shapes. [`lift`] picks one pair.
pub trait FrameFn<F: Shape, G: Shape> {
    fn call<A: Clone>(&self, input: F::Frame<A>) -> G::Frame<A>;
}

/// A [`FrameFn`] fixed to the shapes `F` and `G`, see [`lift`].
pub struct Lift<P, F, G> {
    f: P,
    _shapes: PhantomData<fn(F) -> G>,
}

/// Treat a generic function as a [`Transformation`] from `F` to `G`.
///
/// ```rust
/// # use std::collections::VecDeque;
/// # use natural::{lift, FrameFn, PartiallyApplied, Transformation};
/// struct Front;
///
/// impl FrameFn<Vec<PartiallyApplied>, Option<PartiallyApplied>> for Front {
///     fn call<A: Clone>(&self, input: Vec<A>) -> Option<A> {
///         input.into_iter().next()
///     }
/// }
///
/// impl FrameFn<VecDeque<PartiallyApplied>, Option<PartiallyApplied>> for Front {
///     fn call<A: Clone>(&self, mut input: VecDeque<A>) -> Option<A> {
///         input.pop_front()
///     }
/// }
///
/// let from_vec = lift::<Vec<PartiallyApplied>, Option<PartiallyApplied>, _>(Front);
/// let from_deque = lift::<VecDeque<PartiallyApplied>, Option<PartiallyApplied>, _>(Front);
///
/// assert_eq!(from_vec.apply(vec![1, 2]), Some(1));
/// assert_eq!(from_deque.apply(VecDeque::from(vec!['x'])), Some('x'));
/// ```
pub fn lift<F, G, P>(f: P) -> Lift<P, F, G>
where
    F: Shape,
    G: Shape,
    P: FrameFn<F, G>,
{
    Lift {
        f,
        _shapes: PhantomData,
    }
}

impl<P, F, G> Transformation for Lift<P, F, G>
where
    F: Shape,
    G: Shape,
    P: FrameFn<F, G>,
{
    type Source = F;
    type Target = G;

    #[inline(always)]
    fn apply<A: Clone>(&self, input: F::Frame<A>) -> G::Frame<A> {
        self.f.call::<A>(input)
    }
}

impl<P: Clone, F, G> Clone for Lift<P, F, G> {
    fn clone(&self) -> Self {
        Lift {
            f: self.f.clone(),
            _shapes: PhantomData,
        }
    }
}

/// Define a stateless [`Transformation`] from a single expression.
///
/// The item form declares a named unit struct:
///
/// ```rust
/// # use natural::{transformation, PartiallyApplied, Transformation};
/// transformation! {
///     /// the last element of a `Vec`, if any
///     pub Last: Vec<PartiallyApplied> => Option<PartiallyApplied> = |xs| xs.into_iter().last()
/// }
///
/// assert_eq!(Last.apply(vec![1, 2, 3]), Some(3));
/// ```
///
/// The expression form evaluates to a value of a block-local type:
///
/// ```rust
/// # use natural::{transformation, PartiallyApplied, Transformation};
/// let wrap = transformation!(Option<PartiallyApplied> => Vec<PartiallyApplied>, |x| {
///     x.into_iter().collect()
/// });
///
/// assert_eq!(wrap.apply(Some("a")), vec!["a"]);
/// ```
///
/// The body sees its argument as `Source::Frame<A>` for an element type `A` it cannot
/// name or inspect, and cannot capture its environment.
#[macro_export]
macro_rules! transformation {
    ($(#[$meta:meta])* $vis:vis $name:ident : $src:ty => $tgt:ty = |$arg:ident| $body:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        $vis struct $name;

        impl $crate::Transformation for $name {
            type Source = $src;
            type Target = $tgt;

            #[inline(always)]
            fn apply<A: Clone>(
                &self,
                $arg: <$src as $crate::Shape>::Frame<A>,
            ) -> <$tgt as $crate::Shape>::Frame<A> {
                $body
            }
        }
    };
    ($src:ty => $tgt:ty, |$arg:ident| $body:expr) => {{
        $crate::transformation!(Anonymous: $src => $tgt = |$arg| $body);
        Anonymous
    }};
}
