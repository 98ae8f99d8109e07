//! The three rotation algorithms.
//!
//! All of them take a range `[first, last)` and a `middle` already known to lie within
//! `[first, last]`, and return the new position of the element that was at `first`.

use crate::reverse::{reverse, reverse_until};
use crate::sequence::{BidirectionalSequence, RandomAccessSequence, SequenceMut};

/// Exchanges the elements of `[a, b)` and `[c, d)` pairwise until the shorter range runs out.
///
/// Returns the positions both cursors reached. At least one of them equals its range's upper
/// bound; both do when the ranges have the same length.
///
/// # Examples
///
/// ```
/// use seqrotate::swap_ranges;
///
/// let mut items = [1, 2, 3, 4, 5];
/// assert_eq!(swap_ranges(&mut items[..], 0, 2, 2, 5), (2, 4));
/// assert_eq!(items, [3, 4, 1, 2, 5]);
/// ```
pub fn swap_ranges<S>(
    seq: &mut S,
    mut a: S::Position,
    b: S::Position,
    mut c: S::Position,
    d: S::Position,
) -> (S::Position, S::Position)
where
    S: ?Sized + SequenceMut,
{
    while a != b && c != d {
        seq.swap(a, c);
        a = seq.successor(a);
        c = seq.successor(c);
    }
    (a, c)
}

/// Rotation using successor steps and swaps only.
///
/// Each pass swaps the shorter half into place and leaves a smaller rotation behind. The first
/// time the second half is exhausted, the leading cursor sits on the final position of the
/// element originally at `first`.
pub(crate) fn forward<S>(seq: &mut S, first: S::Position, middle: S::Position, last: S::Position) -> S::Position
where
    S: ?Sized + SequenceMut,
{
    if first == middle {
        return last;
    }
    if middle == last {
        return first;
    }

    let (mut first, mut middle) = (first, middle);
    loop {
        let (f, m) = swap_ranges(seq, first, middle, middle, last);
        if m == last {
            if f != middle {
                forward_unguarded(seq, f, middle, last);
            }
            return f;
        }
        first = middle;
        middle = m;
    }
}

/// Forward rotation of a range where `first != middle` and `middle != last`, without tracking
/// the result.
fn forward_unguarded<S>(seq: &mut S, mut first: S::Position, mut middle: S::Position, last: S::Position)
where
    S: ?Sized + SequenceMut,
{
    loop {
        let (f, m) = swap_ranges(seq, first, middle, middle, last);
        if m == last {
            if f == middle {
                return;
            }
            first = f;
        } else {
            first = middle;
            middle = m;
        }
    }
}

/// Rotation by three reversals. The last reversal stops early at `middle` and only the span the
/// cursors did not reach is reversed afterwards.
pub(crate) fn bidirectional<S>(seq: &mut S, first: S::Position, middle: S::Position, last: S::Position) -> S::Position
where
    S: ?Sized + BidirectionalSequence + SequenceMut,
{
    if first == middle {
        return last;
    }
    if middle == last {
        return first;
    }

    reverse(seq, first, middle);
    reverse(seq, middle, last);
    let (p, q) = reverse_until(seq, first, last, middle);
    reverse(seq, p, q);
    if p == middle {
        q
    } else {
        p
    }
}

/// Rotation by cycle decomposition.
///
/// Moving element `i + len_a` to slot `i` (indices modulo `n`) splits `[0, n)` into
/// `gcd(len_a, len_b)` cycles of `n / gcd` slots. Each cycle is walked once, carrying its first
/// element along with one swap per step, for `n - gcd` swaps in total.
pub(crate) fn random_access<S>(seq: &mut S, first: S::Position, middle: S::Position, last: S::Position) -> S::Position
where
    S: ?Sized + RandomAccessSequence + SequenceMut,
{
    let len_a = seq.distance(first, middle) as usize;
    let len_b = seq.distance(middle, last) as usize;
    if len_a == 0 {
        return last;
    }
    if len_b == 0 {
        return first;
    }

    let n = len_a + len_b;
    for start in 0..gcd(len_a, len_b) {
        let mut slot = start;
        loop {
            // slot + len_a wraps at most once
            let mut next = slot + len_a;
            if next >= n {
                next -= n;
            }
            if next == start {
                break;
            }
            let a = seq.offset(first, slot as isize);
            let b = seq.offset(first, next as isize);
            seq.swap(a, b);
            slot = next;
        }
    }

    seq.offset(first, len_b as isize)
}

pub(crate) fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
