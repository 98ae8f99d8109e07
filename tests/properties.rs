use proptest::prelude::*;
use proptest::sample::Index;
use seqrotate::{rotate, rotate_range, rotated_view, rotated_view_range, BidirectionalOnly, ForwardOnly, RandomAccessSequence, Sequence};

fn sorted(mut items: Vec<i32>) -> Vec<i32> {
    items.sort_unstable();
    items
}

/// Picks `first <= middle <= last` within `0..=len`.
fn range_in(len: usize, a: &Index, b: &Index, c: &Index) -> (usize, usize, usize) {
    let mut bounds = [a.index(len + 1), b.index(len + 1), c.index(len + 1)];
    bounds.sort_unstable();
    (bounds[0], bounds[1], bounds[2])
}

proptest! {
    #[test]
    fn prop_rotate_is_permutation(items in proptest::collection::vec(any::<i32>(), 0..64), mid in any::<Index>()) {
        let mid = mid.index(items.len() + 1);
        let mut rotated = items.clone();
        rotate(&mut rotated, mid).unwrap();
        prop_assert_eq!(sorted(rotated), sorted(items));
    }

    #[test]
    fn prop_rotate_matches_rotate_left(items in proptest::collection::vec(any::<i32>(), 0..64), mid in any::<Index>()) {
        let mid = mid.index(items.len() + 1);
        let mut rotated = items.clone();
        let pos = rotate(&mut rotated, mid).unwrap();

        let mut expected = items.clone();
        expected.rotate_left(mid);
        prop_assert_eq!(rotated, expected);
        prop_assert_eq!(pos, items.len() - mid);
    }

    #[test]
    fn prop_rotate_round_trip(items in proptest::collection::vec(any::<i32>(), 0..64), mid in any::<Index>()) {
        let mid = mid.index(items.len() + 1);
        let mut rotated = items.clone();
        let pos = rotate(&mut rotated, mid).unwrap();
        let back = rotate(&mut rotated, pos).unwrap();
        prop_assert_eq!(&rotated, &items);
        prop_assert_eq!(back, mid);
    }

    #[test]
    fn prop_tiers_agree(
        items in proptest::collection::vec(any::<i32>(), 0..64),
        a in any::<Index>(),
        b in any::<Index>(),
        c in any::<Index>(),
    ) {
        let (first, middle, last) = range_in(items.len(), &a, &b, &c);

        let mut random_access = items.clone();
        let random_access_pos = rotate_range(&mut random_access, first, middle, last).unwrap();

        let mut bidirectional = items.clone();
        let bidirectional_pos = rotate_range(&mut BidirectionalOnly::new(&mut bidirectional), first, middle, last).unwrap();

        let mut forward = items.clone();
        let forward_pos = rotate_range(&mut ForwardOnly::new(&mut forward), first, middle, last).unwrap();

        prop_assert_eq!(&bidirectional, &random_access);
        prop_assert_eq!(&forward, &random_access);
        prop_assert_eq!(bidirectional_pos, random_access_pos);
        prop_assert_eq!(forward_pos, random_access_pos);

        // nothing outside of the range moved
        prop_assert_eq!(&random_access[..first], &items[..first]);
        prop_assert_eq!(&random_access[last..], &items[last..]);
    }

    #[test]
    fn prop_view_matches_rotate(
        items in proptest::collection::vec(any::<i32>(), 0..64),
        a in any::<Index>(),
        b in any::<Index>(),
        c in any::<Index>(),
    ) {
        let (first, middle, last) = range_in(items.len(), &a, &b, &c);
        let (view, new_first) = rotated_view_range(&items, first, middle, last).unwrap();
        let materialized: Vec<i32> = view.iter().copied().collect();
        let reversed: Vec<i32> = view.iter().rev().copied().collect();
        let indexed: Vec<i32> = (0..view.len()).map(|i| view[i]).collect();
        let new_first_index = first + view.distance(view.start(), new_first) as usize;

        let mut rotated = items.clone();
        let pos = rotate_range(&mut rotated, first, middle, last).unwrap();

        prop_assert_eq!(&materialized[..], &rotated[first..last]);
        prop_assert_eq!(&indexed, &materialized);
        prop_assert_eq!(reversed.into_iter().rev().collect::<Vec<_>>(), materialized);
        prop_assert_eq!(new_first_index, pos);
    }

    #[test]
    fn prop_forward_view_matches_rotate(items in proptest::collection::vec(any::<i32>(), 0..64), mid in any::<Index>()) {
        let mid = mid.index(items.len() + 1);
        let forward = ForwardOnly::new(&items[..]);
        let (view, _) = rotated_view(&forward, mid).unwrap();

        let mut rotated = items.clone();
        rotate(&mut rotated, mid).unwrap();
        prop_assert!(view == rotated);
    }
}
