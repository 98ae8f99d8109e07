//! In-place rotation and reversal for any sequence, whatever it can traverse.
//!
//! Rotating `[first, last)` around `middle` moves the element at `middle` to the front while
//! keeping the relative order of `[first, middle)` and of `[middle, last)`:
//! ```text
//!  first       middle            last
//!  v           v                 v
//! +---+---+---+---+---+---+---+
//! | A | B | C | D | E | F | G |
//! +---+---+---+---+---+---+---+
//!
//! +---+---+---+---+---+---+---+
//! | D | E | F | G | A | B | C |
//! +---+---+---+---+---+---+---+
//!                  ^
//!                  +- returned position
//! ```
//!
//! The returned position is where the element from `first` ended up. Rotating again around it
//! restores the original order and returns the original `middle`.
//!
//! Rotations run in place, never allocate and only ever swap elements. The algorithm is picked at
//! compile time from the capability the container declares (see [`capability`]):
//! - *forward* containers use repeated [`swap_ranges`], handing the shorter half into place on
//!   each pass,
//! - *bidirectional* containers use three reversals, the last one stopping early at `middle`,
//! - *random access* containers follow the `gcd(len_a, len_b)` cycles of the rotation and move
//!   every element exactly once, for `n - gcd` swaps.
//!
//! A stronger capability only makes a rotation cheaper; the resulting order and the returned
//! position are always the same.
//!
//! [`rotated_view`] presents the rotated order without touching the source at all.
//!
//! # Examples
//!
//! ```
//! use seqrotate::{reverse, rotate, rotate_range};
//!
//! let mut items = [10, 20, 30, 40, 50, 60, 70];
//! assert_eq!(rotate(&mut items[..], 2), Ok(5));
//! assert_eq!(items, [30, 40, 50, 60, 70, 10, 20]);
//! // rotating around the returned position undoes the rotation
//! assert_eq!(rotate(&mut items[..], 5), Ok(2));
//! assert_eq!(items, [10, 20, 30, 40, 50, 60, 70]);
//!
//! let mut items = vec![2, 4, 6, 8, 10, 3, 5, 7, 9];
//! assert_eq!(rotate_range(&mut items, 2, 5, 7), Ok(4));
//! assert_eq!(items, [2, 4, 3, 5, 6, 8, 10, 7, 9]);
//!
//! reverse(&mut items);
//! assert_eq!(items, [9, 7, 10, 8, 6, 5, 3, 4, 2]);
//! ```

#[macro_use]
mod macros;

pub mod capability;
mod error;
mod iter;
mod reverse;
mod rotate;
mod sequence;
mod view;

pub use capability::{tier_of, Capability, Dispatch, Tier};
pub use error::{Error, Result};
pub use iter::Iter;
pub use rotate::swap_ranges;
pub use sequence::{BidirectionalOnly, BidirectionalSequence, ForwardOnly, RandomAccessSequence, Sequence, SequenceMut};
pub use view::{RotatedView, ViewPosition};


/// Rotates the whole sequence so that the element at `middle` becomes the first one.
///
/// Returns the new position of the element that was first. `middle` may be the start or the end
/// of the sequence, both of which leave it unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidMiddle`] if `middle` is not a position of the sequence (the end
/// included). The sequence is not modified in that case.
///
/// # Examples
///
/// ```
/// use seqrotate::rotate;
///
/// let mut items: Vec<_> = (1..10).collect();
/// assert_eq!(rotate(&mut items, 3), Ok(6));
/// assert_eq!(items, [4, 5, 6, 7, 8, 9, 1, 2, 3]);
///
/// assert!(rotate(&mut items, 10).is_err());
/// ```
pub fn rotate<S>(seq: &mut S, middle: S::Position) -> Result<S::Position, S::Position>
where
    S: ?Sized + SequenceMut,
    S::Capability: Dispatch<S>,
{
    let (first, last) = (seq.start(), seq.end());
    rotate_range(seq, first, middle, last)
}

/// Rotates `[first, last)` so that the element at `middle` becomes the one at `first`.
///
/// Elements outside of the range are neither read nor written. Returns the new position of the
/// element that was at `first`.
///
/// # Errors
///
/// Returns [`Error::InvalidMiddle`] if `middle` is not within `[first, last]`. The sequence is
/// not modified in that case.
///
/// # Examples
///
/// ```
/// use seqrotate::rotate_range;
///
/// let mut items = [1, 2, 3, 4, 5, 6];
/// assert_eq!(rotate_range(&mut items[..], 1, 2, 5), Ok(4));
/// assert_eq!(items, [1, 3, 4, 5, 2, 6]);
/// ```
pub fn rotate_range<S>(
    seq: &mut S,
    first: S::Position,
    middle: S::Position,
    last: S::Position,
) -> Result<S::Position, S::Position>
where
    S: ?Sized + SequenceMut,
    S::Capability: Dispatch<S>,
{
    check_middle(&*seq, first, middle, last)?;
    trace!(tier = %tier_of::<S>(), ?first, ?middle, ?last, "rotating range");
    Ok(<S::Capability as Dispatch<S>>::rotate(seq, first, middle, last))
}

/// Reverses the order of all elements of the sequence.
///
/// # Examples
///
/// ```
/// use seqrotate::reverse;
///
/// let mut items: Vec<_> = (1..10).collect();
/// reverse(&mut items);
/// assert_eq!(items, [9, 8, 7, 6, 5, 4, 3, 2, 1]);
/// ```
pub fn reverse<S>(seq: &mut S)
where
    S: ?Sized + BidirectionalSequence + SequenceMut,
{
    let (first, last) = (seq.start(), seq.end());
    reverse_range(seq, first, last);
}

/// Reverses the order of the elements in `[first, last)`.
///
/// # Examples
///
/// ```
/// use seqrotate::reverse_range;
///
/// let mut items = [9, 8, 7, 6, 5, 4, 3, 2, 1];
/// reverse_range(&mut items[..], 0, 5);
/// assert_eq!(items, [5, 6, 7, 8, 9, 4, 3, 2, 1]);
/// ```
pub fn reverse_range<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: ?Sized + BidirectionalSequence + SequenceMut,
{
    trace!(?first, ?last, "reversing range");
    reverse::reverse(seq, first, last);
}

/// Returns a view of the whole sequence rotated around `middle`, along with the view position of
/// the element that is first in the source.
///
/// Nothing is copied or modified; see [`RotatedView`].
///
/// # Errors
///
/// Returns [`Error::InvalidMiddle`] if `middle` is not a position of the sequence.
pub fn rotated_view<S>(seq: &S, middle: S::Position) -> Result<(RotatedView<'_, S>, ViewPosition<S::Position>), S::Position>
where
    S: ?Sized + Sequence,
    S::Capability: Dispatch<S>,
{
    rotated_view_range(seq, seq.start(), middle, seq.end())
}

/// Returns a view of `[first, last)` rotated around `middle`, along with the view position of the
/// element at `first`.
///
/// # Errors
///
/// Returns [`Error::InvalidMiddle`] if `middle` is not within `[first, last]`.
///
/// # Examples
///
/// ```
/// use seqrotate::{rotated_view_range, ViewPosition};
///
/// let items = [2, 4, 6, 8, 10, 3, 5, 7, 9];
/// let (view, new_first) = rotated_view_range(&items[..], 2, 5, 7).unwrap();
/// assert_eq!(view, [3, 5, 6, 8, 10]);
/// assert_eq!(new_first, ViewPosition::Trailing(2));
/// ```
pub fn rotated_view_range<S>(
    seq: &S,
    first: S::Position,
    middle: S::Position,
    last: S::Position,
) -> Result<(RotatedView<'_, S>, ViewPosition<S::Position>), S::Position>
where
    S: ?Sized + Sequence,
    S::Capability: Dispatch<S>,
{
    check_middle(seq, first, middle, last)?;
    let view = RotatedView::new(seq, first, middle, last);
    Ok((view, view.new_first()))
}

fn check_middle<S>(seq: &S, first: S::Position, middle: S::Position, last: S::Position) -> Result<(), S::Position>
where
    S: ?Sized + Sequence,
    S::Capability: Dispatch<S>,
{
    if <S::Capability as Dispatch<S>>::contains(seq, first, middle, last) {
        Ok(())
    } else {
        debug!(?first, ?middle, ?last, "middle is outside of the range");
        Err(Error::InvalidMiddle { first, middle, last })
    }
}

/// Method forms of the free functions in this crate, available on every [`Sequence`].
///
/// The names avoid the inherent `reverse` and `rotate_*` methods of slices and vectors.
///
/// # Examples
///
/// ```
/// use seqrotate::SequenceExt;
/// use std::collections::VecDeque;
///
/// let mut deque: VecDeque<_> = (0..10).collect();
/// assert_eq!(deque.rotate_to_start(3), Ok(7));
/// assert_eq!(deque, [3, 4, 5, 6, 7, 8, 9, 0, 1, 2]);
///
/// deque.reverse_range_in_place(0, 3);
/// assert_eq!(deque, [5, 4, 3, 6, 7, 8, 9, 0, 1, 2]);
/// ```
pub trait SequenceExt: Sequence {
    /// See [`rotate`].
    fn rotate_to_start(&mut self, middle: Self::Position) -> Result<Self::Position, Self::Position>
    where
        Self: SequenceMut,
        Self::Capability: Dispatch<Self>,
    {
        rotate(self, middle)
    }

    /// See [`rotate_range`].
    fn rotate_range_to_start(
        &mut self,
        first: Self::Position,
        middle: Self::Position,
        last: Self::Position,
    ) -> Result<Self::Position, Self::Position>
    where
        Self: SequenceMut,
        Self::Capability: Dispatch<Self>,
    {
        rotate_range(self, first, middle, last)
    }

    /// See [`reverse`].
    fn reverse_in_place(&mut self)
    where
        Self: BidirectionalSequence + SequenceMut,
    {
        reverse(self);
    }

    /// See [`reverse_range`].
    fn reverse_range_in_place(&mut self, first: Self::Position, last: Self::Position)
    where
        Self: BidirectionalSequence + SequenceMut,
    {
        reverse_range(self, first, last);
    }

    /// See [`rotated_view`].
    fn rotated_from(&self, middle: Self::Position) -> Result<(RotatedView<'_, Self>, ViewPosition<Self::Position>), Self::Position>
    where
        Self::Capability: Dispatch<Self>,
    {
        rotated_view(self, middle)
    }
}

impl<S: ?Sized + Sequence> SequenceExt for S {}
