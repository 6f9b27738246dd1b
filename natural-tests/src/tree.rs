//! Rose trees and leftmost paths, for exercising `hoist` on recursive structures.
use std::marker::PhantomData;

use natural::{
    Collapsible, Expandable, MappableFrame, MappableFrameRef, PartiallyApplied, Shape,
    Transformation,
};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub value: i32,
    pub children: Vec<Tree>,
}

impl Tree {
    pub fn leaf(value: i32) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    pub fn node(value: i32, children: Vec<Tree>) -> Self {
        Self { value, children }
    }

    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Tree::size).sum::<usize>()
    }
}

/// A single layer of a rose tree holding a value of type `V`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeFrame<V, Next> {
    pub value: V,
    pub children: Vec<Next>,
}

impl<V> Shape for TreeFrame<V, PartiallyApplied> {
    type Frame<X> = TreeFrame<V, X>;
}

impl<V> MappableFrame for TreeFrame<V, PartiallyApplied> {
    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B> {
        TreeFrame {
            value: input.value,
            children: input.children.into_iter().map(f).collect(),
        }
    }
}

impl<V: Clone> MappableFrameRef for TreeFrame<V, PartiallyApplied> {
    fn as_ref<'a, X: 'a>(input: &'a Self::Frame<X>) -> Self::Frame<&'a X>
    where
        Self: 'a,
    {
        TreeFrame {
            value: input.value.clone(),
            children: input.children.iter().collect(),
        }
    }
}

impl Collapsible for Tree {
    type FrameToken = TreeFrame<i32, PartiallyApplied>;

    fn into_frame(self) -> TreeFrame<i32, Self> {
        TreeFrame {
            value: self.value,
            children: self.children,
        }
    }
}

impl Expandable for Tree {
    type FrameToken = TreeFrame<i32, PartiallyApplied>;

    fn from_frame(val: TreeFrame<i32, Self>) -> Self {
        Tree::node(val.value, val.children)
    }
}

/// A single step along a path, holding a value of type `V`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFrame<V, Next> {
    Step(V, Next),
    End(V),
}

impl<V> Shape for PathFrame<V, PartiallyApplied> {
    type Frame<X> = PathFrame<V, X>;
}

impl<V> MappableFrame for PathFrame<V, PartiallyApplied> {
    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        match input {
            PathFrame::Step(v, next) => PathFrame::Step(v, f(next)),
            PathFrame::End(v) => PathFrame::End(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path {
    Step(i32, Box<Path>),
    End(i32),
}

impl Path {
    pub fn values(&self) -> Vec<i32> {
        let mut out = Vec::new();
        let mut cursor = self;
        loop {
            match cursor {
                Path::Step(v, next) => {
                    out.push(*v);
                    cursor = &**next;
                }
                Path::End(v) => {
                    out.push(*v);
                    return out;
                }
            }
        }
    }
}

impl Expandable for Path {
    type FrameToken = PathFrame<i32, PartiallyApplied>;

    fn from_frame(val: PathFrame<i32, Self>) -> Self {
        match val {
            PathFrame::Step(v, next) => Path::Step(v, Box::new(next)),
            PathFrame::End(v) => Path::End(v),
        }
    }
}

/// Reverse the order of every node's children.
pub struct Mirror<V>(PhantomData<fn() -> V>);

impl<V> Default for Mirror<V> {
    fn default() -> Self {
        Mirror(PhantomData)
    }
}

impl<V> Transformation for Mirror<V> {
    type Source = TreeFrame<V, PartiallyApplied>;
    type Target = TreeFrame<V, PartiallyApplied>;

    fn apply<A: Clone>(&self, input: TreeFrame<V, A>) -> TreeFrame<V, A> {
        let mut children = input.children;
        children.reverse();
        TreeFrame {
            value: input.value,
            children,
        }
    }
}

/// Keep only the first child of every node, turning a tree into its leftmost path.
pub struct Spine<V>(PhantomData<fn() -> V>);

impl<V> Default for Spine<V> {
    fn default() -> Self {
        Spine(PhantomData)
    }
}

impl<V> Transformation for Spine<V> {
    type Source = TreeFrame<V, PartiallyApplied>;
    type Target = PathFrame<V, PartiallyApplied>;

    fn apply<A: Clone>(&self, input: TreeFrame<V, A>) -> PathFrame<V, A> {
        match input.children.into_iter().next() {
            Some(first) => PathFrame::Step(input.value, first),
            None => PathFrame::End(input.value),
        }
    }
}

pub fn arb_tree() -> impl Strategy<Value = Tree> {
    let leaf = any::<i8>().prop_map(|x| Tree::leaf(x as i32));
    leaf.prop_recursive(
        6,   // 6 levels deep
        128, // Shoot for maximum size of 128 nodes
        4,   // We put up to 4 items per collection
        |inner| {
            (any::<i8>(), prop::collection::vec(inner, 0..4))
                .prop_map(|(v, children)| Tree::node(v as i32, children))
        },
    )
}

pub fn arb_tree_frame() -> impl Strategy<Value = TreeFrame<i32, i32>> {
    (any::<i32>(), prop::collection::vec(any::<i32>(), 0..8))
        .prop_map(|(value, children)| TreeFrame { value, children })
}

#[cfg(test)]
mod tests {
    use super::*;
    use natural::{hoist, laws, try_hoist};
    use proptest::proptest;

    fn mirror_naive(tree: &Tree) -> Tree {
        Tree::node(
            tree.value,
            tree.children.iter().rev().map(mirror_naive).collect(),
        )
    }

    fn leftmost_naive(tree: &Tree) -> Vec<i32> {
        let mut out = vec![tree.value];
        let mut cursor = tree;
        while let Some(first) = cursor.children.first() {
            out.push(first.value);
            cursor = first;
        }
        out
    }

    #[test]
    fn spine_of_small_tree() {
        let tree = Tree::node(
            1,
            vec![
                Tree::node(2, vec![Tree::leaf(4), Tree::leaf(5)]),
                Tree::leaf(3),
            ],
        );
        let path: Path = tree.hoist_frames(&Spine::default());
        assert_eq!(path.values(), vec![1, 2, 4]);
    }

    #[test]
    fn dropped_subtrees_are_never_expanded() {
        let tree = Tree::node(
            1,
            vec![
                Tree::node(2, vec![Tree::leaf(4)]),
                Tree::node(3, vec![Tree::leaf(6), Tree::leaf(7)]),
            ],
        );
        let mut expanded = Vec::new();
        let depth = hoist(
            tree,
            &Spine::<i32>::default(),
            |node: Tree| {
                expanded.push(node.value);
                node.into_frame()
            },
            |frame: PathFrame<i32, usize>| match frame {
                PathFrame::Step(_, rest) => rest + 1,
                PathFrame::End(_) => 1,
            },
        );
        assert_eq!(depth, 3);
        assert_eq!(expanded, vec![1, 2, 4]);
    }

    #[test]
    fn try_hoist_stops_at_first_error() {
        let tree = Tree::node(1, vec![Tree::node(-2, vec![Tree::leaf(3)])]);
        let mut expanded = Vec::new();
        let res: Result<usize, String> = try_hoist(
            tree,
            &Mirror::<i32>::default(),
            |node: Tree| {
                expanded.push(node.value);
                if node.value < 0 {
                    Err(format!("negative value {}", node.value))
                } else {
                    Ok(node.into_frame())
                }
            },
            |frame: TreeFrame<i32, usize>| Ok(1 + frame.children.into_iter().sum::<usize>()),
        );
        assert_eq!(res, Err("negative value -2".to_string()));
        assert_eq!(expanded, vec![1, -2]);
    }

    proptest! {
        #[test]
        fn mirror_twice_is_identity(tree in arb_tree()) {
            let mirror = Mirror::<i32>::default();
            let mirrored: Tree = tree.clone().hoist_frames(&mirror);
            let back: Tree = mirrored.hoist_frames(&mirror);
            assert_eq!(back, tree);
        }

        #[test]
        fn mirror_matches_naive(tree in arb_tree()) {
            let mirrored: Tree = tree.clone().hoist_frames(&Mirror::default());
            assert_eq!(mirrored, mirror_naive(&tree));
        }

        #[test]
        fn spine_matches_naive(tree in arb_tree()) {
            let path: Path = tree.clone().hoist_frames(&Spine::default());
            assert_eq!(path.values(), leftmost_naive(&tree));
        }

        #[test]
        fn hoisting_through_identity_preserves_size(tree in arb_tree()) {
            let size = tree.size();
            let rebuilt: Tree = tree.hoist_frames(&natural::identity::<TreeFrame<i32, PartiallyApplied>>());
            assert_eq!(rebuilt.size(), size);
        }

        #[test]
        fn mirror_is_natural(frame in arb_tree_frame()) {
            assert!(laws::is_natural(&Mirror::<i32>::default(), frame, |n: i32| n.to_string()));
        }

        #[test]
        fn spine_is_natural(frame in arb_tree_frame(), k in any::<i32>()) {
            assert!(laws::is_natural(&Spine::<i32>::default(), frame, |n: i32| n.wrapping_add(k)));
        }
    }
}
