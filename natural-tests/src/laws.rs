use natural::{clone_frame, identity, laws, lift, Compose, FrameFn, PartiallyApplied, Transformation};
use proptest::prelude::*;
use proptest::proptest;

use crate::shapes::*;

type VecShape = Vec<PartiallyApplied>;
type OptionShape = Option<PartiallyApplied>;

/// Interleave the two halves of a list, a rearrangement defined for any element type.
struct Riffle;

impl FrameFn<VecShape, VecShape> for Riffle {
    fn call<A: Clone>(&self, input: Vec<A>) -> Vec<A> {
        let mid = (input.len() + 1) / 2;
        let mut front = input;
        let back = front.split_off(mid);
        let mut out = Vec::with_capacity(front.len() + back.len());
        let mut back = back.into_iter();
        for x in front {
            out.push(x);
            out.extend(back.next());
        }
        out
    }
}

#[test]
fn and_pairs_head_with_copy() {
    let paired = Head.and::<Both<OptionShape, VecShape>, _>(identity::<VecShape>());
    assert_eq!(paired.apply(vec![1, 2, 3]), (Some(1), vec![1, 2, 3]));
}

#[test]
fn or_dispatches_on_each_side() {
    let either = Head.or::<EitherShape<VecShape, OptionShape>, _>(identity::<OptionShape>());
    assert_eq!(either.apply(Either::Left(vec![5, 6])), Some(5));
    assert_eq!(either.apply(Either::Right(Some(7))), Some(7));
    assert_eq!(either.apply(Either::<Vec<u8>, Option<u8>>::Right(None)), None);
}

#[test]
fn combinators_print_without_debug_shapes() {
    let either = Head.or::<EitherShape<VecShape, OptionShape>, _>(identity::<OptionShape>());
    let paired = Head.and::<Both<OptionShape, VecShape>, _>(Reverse);
    let heads = Head.inside::<EitherShape<OptionShape, VecShape>>();

    assert!(format!("{:?}", either).starts_with("Or { left: Head, right: Identity("));
    assert!(format!("{:?}", paired).starts_with("And { first: Head, second: Reverse, pair: "));
    assert!(format!("{:?}", heads).starts_with("Inside { inner: Head, outer: "));
}

#[test]
fn clone_frame_through_sums_of_lists() {
    type Nested = Compose<VecShape, EitherShape<OptionShape, VecShape>>;
    let frame = vec![Either::Left(Some('a')), Either::Right(vec!['b', 'c'])];
    assert_eq!(clone_frame::<Nested, char>(&frame), frame);
}

#[test]
fn riffle_interleaves_halves() {
    let riffle = lift::<VecShape, VecShape, _>(Riffle);
    assert_eq!(riffle.apply(vec![1, 2, 3, 4, 5]), vec![1, 4, 2, 5, 3]);
    assert_eq!(riffle.apply(Vec::<()>::new()), Vec::<()>::new());
}

proptest! {
    #[test]
    fn samples_are_natural(xs in arb_vec(), k in any::<i32>()) {
        let f = |n: i32| (n.wrapping_mul(k), n % 7);
        prop_assert!(laws::is_natural(&Head, xs.clone(), f));
        prop_assert!(laws::is_natural(&Last, xs.clone(), f));
        prop_assert!(laws::is_natural(&Reverse, xs.clone(), f));
        prop_assert!(laws::is_natural(&RotateLeft, xs.clone(), f));
        prop_assert!(laws::is_natural(&Evens, xs.clone(), f));
        prop_assert!(laws::is_natural(&Stutter, xs.clone(), f));
        prop_assert!(laws::is_natural(&lift::<VecShape, VecShape, _>(Riffle), xs, f));
    }

    #[test]
    fn composites_are_natural(xs in arb_vec()) {
        let f = |n: i32| n.to_string();
        prop_assert!(laws::is_natural(&Head.compose(Reverse), xs.clone(), f));
        prop_assert!(laws::is_natural(&Evens.and_then(Stutter).and_then(Last), xs.clone(), f));
        prop_assert!(laws::is_natural(&Head.and_then(Wrap).and_then(ToDeque), xs, f));
    }

    #[test]
    fn inside_is_natural(xss in prop::collection::vec(arb_vec(), 0..6)) {
        prop_assert!(laws::is_natural(&Head.inside::<VecShape>(), xss, |n: i32| n / 2));
    }

    #[test]
    fn or_is_natural(x in arb_either()) {
        let either = Head.or::<EitherShape<VecShape, OptionShape>, _>(identity::<OptionShape>());
        prop_assert!(laws::is_natural(&either, x, |n: i32| n as i64 * 3));
    }

    #[test]
    fn and_is_natural(xs in arb_vec()) {
        let paired = Last.and::<Both<OptionShape, VecShape>, _>(Reverse);
        prop_assert!(laws::is_natural(&paired, xs, |n: i32| n.count_ones()));
    }

    #[test]
    fn identity_law(xs in arb_vec(), x in arb_option()) {
        prop_assert!(laws::preserves_identity::<VecShape, _>(xs));
        prop_assert!(laws::preserves_identity::<OptionShape, _>(x));
    }

    #[test]
    fn composition_is_associative(xs in arb_vec()) {
        let left = Head.compose(RotateLeft).compose(Stutter);
        let right = Head.compose(RotateLeft.compose(Stutter));
        prop_assert!(laws::agree(&left, &right, xs.clone()));

        let left = Wrap.compose(Last).compose(Evens);
        let right = Wrap.compose(Last.compose(Evens));
        prop_assert!(laws::agree(&left, &right, xs));
    }

    #[test]
    fn identity_is_unit_for_compose(xs in arb_vec()) {
        prop_assert!(laws::agree(&Head.compose(identity::<VecShape>()), &Head, xs.clone()));
        prop_assert!(laws::agree(&identity::<OptionShape>().compose(Head), &Head, xs));
    }

    #[test]
    fn or_dispatch(xs in arb_vec(), x in arb_option()) {
        let either = Head.or::<EitherShape<VecShape, OptionShape>, _>(Wrap.and_then(Last));
        prop_assert_eq!(either.apply(Either::Left(xs.clone())), Head.apply(xs));
        prop_assert_eq!(either.apply(Either::Right(x)), Wrap.and_then(Last).apply(x));
    }

    #[test]
    fn and_pairing(xs in arb_vec()) {
        let paired = Head.and::<Both<OptionShape, VecShape>, _>(Reverse);
        prop_assert_eq!(paired.apply(xs.clone()), (Head.apply(xs.clone()), Reverse.apply(xs)));
    }
}
