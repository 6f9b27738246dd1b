//! Support for collapsing and expanding recursive structures one frame at a time,
//! optionally rebuilding them through a [`Transformation`] on the way.
use crate::frame::{expand_and_collapse, MappableFrame, Shape};
use crate::transformation::Transformation;

/// The ability to recursively collapse some type into some output type, frame by frame.
pub trait Collapsible
where
    Self: Sized,
{
    type FrameToken: MappableFrame;

    /// Given an instance of this type, generate a frame holding the data owned by it,
    /// with any recursive instances of 'Self' owned by this node as the frame elements
    fn into_frame(self) -> <Self::FrameToken as Shape>::Frame<Self>;

    /// Given an instance of this type, collapse it into a single value of type 'Out' by
    /// traversing the recursive structure of 'self', generating frames, and collapsing
    /// those frames using some function from 'Frame<Out> -> Out'
    fn collapse_frames<Out>(
        self,
        collapse_frame: impl FnMut(<Self::FrameToken as Shape>::Frame<Out>) -> Out,
    ) -> Out {
        expand_and_collapse::<Self::FrameToken, Self, Out>(self, Self::into_frame, collapse_frame)
    }

    /// Rebuild this structure as `Out`, whose frames are the target shape of `transformation`,
    /// by running every frame of `self` through `transformation`.
    fn hoist_frames<T, Out>(self, transformation: &T) -> Out
    where
        Self: Clone,
        T: Transformation<Source = Self::FrameToken>,
        T::Target: MappableFrame,
        Out: Expandable<FrameToken = T::Target>,
    {
        expand_and_collapse::<T::Target, Self, Out>(
            self,
            |node| transformation.apply::<Self>(Self::into_frame(node)),
            Out::from_frame,
        )
    }
}

/// The ability to recursively expand a seed into some type, frame by frame.
pub trait Expandable
where
    Self: Sized,
{
    type FrameToken: MappableFrame;

    /// Build a single node of this type from a frame whose elements are already built
    fn from_frame(val: <Self::FrameToken as Shape>::Frame<Self>) -> Self;

    /// Given a seed and some function from 'In -> Frame<In>', build an instance of this type
    /// by expanding frames until no seeds remain
    fn expand_frames<In>(
        input: In,
        expand_frame: impl FnMut(In) -> <Self::FrameToken as Shape>::Frame<In>,
    ) -> Self {
        expand_and_collapse::<Self::FrameToken, In, Self>(input, expand_frame, Self::from_frame)
    }
}
