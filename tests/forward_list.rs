//! Rotations over a singly linked list whose positions are node handles rather than indices.

use seqrotate::{rotate, rotate_range, rotated_view, tier_of, Error, Sequence, SequenceMut, Tier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor(Option<usize>);

struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// A singly linked list in an arena. Nodes are stored back to front so that node ids say
/// nothing about the list order.
struct ForwardList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut list = ForwardList { nodes: Vec::with_capacity(values.len()), head: None };
        for value in values.into_iter().rev() {
            list.nodes.push(Node { value, next: list.head });
            list.head = Some(list.nodes.len() - 1);
        }
        list
    }
}

impl<T: Clone> ForwardList<T> {
    fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::new();
        let mut cursor = self.start();
        while let Some(value) = self.get(cursor) {
            out.push(value.clone());
            cursor = self.successor(cursor);
        }
        out
    }
}

impl<T> ForwardList<T> {
    fn cursor_at(&self, index: usize) -> Cursor {
        let mut cursor = self.start();
        for _ in 0..index {
            cursor = self.successor(cursor);
        }
        cursor
    }
}

impl<T> Sequence for ForwardList<T> {
    type Item = T;
    type Position = Cursor;
    type Capability = seqrotate::capability::Forward;

    fn start(&self) -> Cursor {
        Cursor(self.head)
    }

    fn end(&self) -> Cursor {
        Cursor(None)
    }

    fn successor(&self, position: Cursor) -> Cursor {
        match position.0 {
            Some(id) => Cursor(self.nodes[id].next),
            None => panic!("successor of the end position"),
        }
    }

    fn get(&self, position: Cursor) -> Option<&T> {
        position.0.map(|id| &self.nodes[id].value)
    }
}

impl<T> SequenceMut for ForwardList<T> {
    fn swap(&mut self, a: Cursor, b: Cursor) {
        let (Some(a), Some(b)) = (a.0, b.0) else {
            panic!("cannot swap the end position");
        };
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (left, right) = self.nodes.split_at_mut(hi);
        std::mem::swap(&mut left[lo].value, &mut right[0].value);
    }
}

#[test]
fn test_tier() {
    assert_eq!(tier_of::<ForwardList<i32>>(), Tier::Forward);
}

#[test]
fn test_rotate_examples() {
    let mut list: ForwardList<_> = [10, 20, 30, 40, 50, 60, 70].into_iter().collect();
    let middle = list.cursor_at(2);
    let pos = rotate(&mut list, middle).unwrap();
    assert_eq!(list.to_vec(), [30, 40, 50, 60, 70, 10, 20]);
    assert_eq!(pos, list.cursor_at(5));
    assert_eq!(list.get(pos), Some(&10));

    let mut list: ForwardList<_> = [2, 4, 6, 8, 10, 3, 5, 7, 9].into_iter().collect();
    let (first, middle, last) = (list.cursor_at(2), list.cursor_at(5), list.cursor_at(7));
    let pos = rotate_range(&mut list, first, middle, last).unwrap();
    assert_eq!(list.to_vec(), [2, 4, 3, 5, 6, 8, 10, 7, 9]);
    assert_eq!(pos, list.cursor_at(4));

    let mut list: ForwardList<i32> = std::iter::empty().collect();
    let start = list.start();
    assert_eq!(rotate(&mut list, start), Ok(start));
}

#[test]
fn test_rotate_every_split() {
    for len in 0..12 {
        for mid in 0..=len {
            let mut list: ForwardList<usize> = (0..len).collect();
            let middle = list.cursor_at(mid);
            let pos = rotate(&mut list, middle).unwrap();

            let mut expected: Vec<usize> = (0..len).collect();
            expected.rotate_left(mid);
            assert_eq!(list.to_vec(), expected, "len {} mid {}", len, mid);
            assert_eq!(pos, list.cursor_at(len - mid), "len {} mid {}", len, mid);
        }
    }
}

#[test]
fn test_rotate_round_trip() {
    let original: Vec<usize> = (0..10).collect();
    for mid in 0..=original.len() {
        let mut list: ForwardList<usize> = original.iter().copied().collect();
        let middle = list.cursor_at(mid);
        let pos = rotate(&mut list, middle).unwrap();
        let back = rotate(&mut list, pos).unwrap();
        assert_eq!(list.to_vec(), original);
        assert_eq!(back, list.cursor_at(mid));
    }
}

#[test]
fn test_rotate_invalid_middle() {
    let mut list: ForwardList<_> = [1, 2, 3].into_iter().collect();
    let (first, last) = (list.start(), list.end());
    assert_eq!(
        rotate(&mut list, Cursor(Some(99))),
        Err(Error::InvalidMiddle { first, middle: Cursor(Some(99)), last })
    );

    // middle before first
    let (first, middle, last) = (list.cursor_at(2), list.cursor_at(1), list.cursor_at(3));
    assert!(rotate_range(&mut list, first, middle, last).is_err());
    assert_eq!(list.to_vec(), [1, 2, 3]);
}

#[test]
fn test_view() {
    let list: ForwardList<_> = [1, 2, 3, 4, 5].into_iter().collect();
    let (view, new_first) = rotated_view(&list, list.cursor_at(3)).unwrap();
    assert_eq!(view, [4, 5, 1, 2, 3]);
    assert_eq!(view.get(new_first), Some(&1));
    assert_eq!(view.iter().copied().collect::<Vec<_>>(), view.iter().copied().collect::<Vec<_>>());
    assert_eq!(list.to_vec(), [1, 2, 3, 4, 5]);
}
