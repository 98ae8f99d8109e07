use crate::sequence::{BidirectionalSequence, SequenceMut};

/// Reverses `[first, last)` in place with `len / 2` swaps.
pub(crate) fn reverse<S>(seq: &mut S, mut first: S::Position, mut last: S::Position)
where
    S: ?Sized + BidirectionalSequence + SequenceMut,
{
    while first != last {
        last = seq.predecessor(last);
        if first == last {
            break;
        }
        seq.swap(first, last);
        first = seq.successor(first);
    }
}

/// Reverses `[first, last)` inward from both ends, stopping as soon as either cursor reaches
/// `limit`. Returns where the leading and trailing cursors stopped.
///
/// Only the elements the cursors passed over have been exchanged; the span between the two
/// returned positions is untouched.
pub(crate) fn reverse_until<S>(
    seq: &mut S,
    mut first: S::Position,
    mut last: S::Position,
    limit: S::Position,
) -> (S::Position, S::Position)
where
    S: ?Sized + BidirectionalSequence + SequenceMut,
{
    while first != limit && last != limit {
        last = seq.predecessor(last);
        seq.swap(first, last);
        first = seq.successor(first);
    }
    (first, last)
}
