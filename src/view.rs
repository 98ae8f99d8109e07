use core::fmt;
use core::ops::Index;

use crate::iter::Iter;
use crate::sequence::{BidirectionalSequence, RandomAccessSequence, Sequence};

/// A position in a [`RotatedView`].
///
/// `Leading(p)` addresses `p` in `[middle, last)` of the source, which the view presents first.
/// `Trailing(p)` addresses `p` in `[first, middle)`; `Trailing(middle)` is the view's end.
///
/// The derived ordering places every leading position before every trailing one, which is the
/// view's order when the source positions are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewPosition<P> {
    Leading(P),
    Trailing(P),
}

impl<P> ViewPosition<P> {
    /// Returns the position in the source sequence. For the view's end this is `middle`.
    pub fn source(self) -> P {
        match self {
            ViewPosition::Leading(p) | ViewPosition::Trailing(p) => p,
        }
    }
}

/// A read-only rotated presentation of `[first, last)`: the elements of `[middle, last)` followed
/// by the elements of `[first, middle)`.
///
/// Creating a view only captures positions. The source is neither copied nor modified, and the
/// view can be iterated any number of times. The view implements [`Sequence`] with the source's
/// capability, so it can itself be traversed backwards or indexed when the source can.
///
/// This `struct` is created by [`rotated_view`] and [`rotated_view_range`].
///
/// [`rotated_view`]: crate::rotated_view
/// [`rotated_view_range`]: crate::rotated_view_range
///
/// # Examples
///
/// ```
/// use seqrotate::{rotated_view, ViewPosition};
///
/// let items = [10, 20, 30, 40, 50];
/// let (view, new_first) = rotated_view(&items[..], 3).unwrap();
/// assert_eq!(view, [40, 50, 10, 20, 30]);
/// assert_eq!(new_first, ViewPosition::Trailing(0));
/// assert_eq!(items, [10, 20, 30, 40, 50]);
/// ```
pub struct RotatedView<'a, S: ?Sized + Sequence> {
    seq: &'a S,
    first: S::Position,
    middle: S::Position,
    last: S::Position,
}

impl<S: ?Sized + Sequence> Clone for RotatedView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized + Sequence> Copy for RotatedView<'_, S> {}

impl<'a, S: ?Sized + Sequence> RotatedView<'a, S> {
    pub(crate) fn new(seq: &'a S, first: S::Position, middle: S::Position, last: S::Position) -> Self {
        RotatedView { seq, first, middle, last }
    }

    /// Returns the sequence this view reads from.
    pub fn source(&self) -> &'a S {
        self.seq
    }

    /// Returns the source range and middle as `(first, middle, last)`.
    pub fn bounds(&self) -> (S::Position, S::Position, S::Position) {
        (self.first, self.middle, self.last)
    }

    /// Returns the view position of the element that is first in the source range. This is
    /// where a mutating rotation would have moved it.
    pub fn new_first(&self) -> ViewPosition<S::Position> {
        ViewPosition::Trailing(self.first)
    }

    /// Returns whether the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }

    /// Returns a front-to-back iterator over the view.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqrotate::rotated_view;
    /// let items = vec![1, 2, 3, 4];
    /// let (view, _) = rotated_view(&items, 1).unwrap();
    /// let once: Vec<_> = view.iter().copied().collect();
    /// let twice: Vec<_> = view.iter().copied().collect();
    /// assert_eq!(once, [2, 3, 4, 1]);
    /// assert_eq!(once, twice);
    /// ```
    pub fn iter(&self) -> Iter<'a, S> {
        Iter::new(*self)
    }
}

impl<'a, S: ?Sized + RandomAccessSequence> RotatedView<'a, S> {
    /// Returns the number of elements in the view.
    pub fn len(&self) -> usize {
        self.seq.distance(self.first, self.last) as usize
    }

    /// Returns the element at `index` in view order, or `None` if `index` is out of bounds.
    ///
    /// The index is translated straight to a source position without walking the view.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqrotate::rotated_view;
    /// let items = [1, 2, 3, 4, 5, 6, 7];
    /// let (view, _) = rotated_view(&items[..], 5).unwrap();
    /// assert_eq!(view.get_index(0), Some(&6));
    /// assert_eq!(view.get_index(2), Some(&1));
    /// assert_eq!(view.get_index(7), None);
    /// ```
    pub fn get_index(&self, index: usize) -> Option<&'a S::Item> {
        if index < self.len() {
            self.seq.get(self.source_at(index))
        } else {
            None
        }
    }

    fn leading_len(&self) -> usize {
        self.seq.distance(self.middle, self.last) as usize
    }

    fn source_at(&self, index: usize) -> S::Position {
        let leading = self.leading_len();
        if index < leading {
            self.seq.offset(self.middle, index as isize)
        } else {
            self.seq.offset(self.first, (index - leading) as isize)
        }
    }

    fn index_of(&self, position: ViewPosition<S::Position>) -> usize {
        match position {
            ViewPosition::Leading(p) => self.seq.distance(self.middle, p) as usize,
            ViewPosition::Trailing(p) => self.leading_len() + self.seq.distance(self.first, p) as usize,
        }
    }

    fn position_at(&self, index: usize) -> ViewPosition<S::Position> {
        let leading = self.leading_len();
        if index < leading {
            ViewPosition::Leading(self.seq.offset(self.middle, index as isize))
        } else {
            ViewPosition::Trailing(self.seq.offset(self.first, (index - leading) as isize))
        }
    }
}

impl<'a, S: ?Sized + Sequence> Sequence for RotatedView<'a, S> {
    type Item = S::Item;
    type Position = ViewPosition<S::Position>;
    type Capability = S::Capability;

    fn start(&self) -> Self::Position {
        if self.middle == self.last {
            ViewPosition::Trailing(self.first)
        } else {
            ViewPosition::Leading(self.middle)
        }
    }

    fn end(&self) -> Self::Position {
        ViewPosition::Trailing(self.middle)
    }

    fn successor(&self, position: Self::Position) -> Self::Position {
        match position {
            ViewPosition::Leading(p) => {
                let next = self.seq.successor(p);
                if next == self.last {
                    ViewPosition::Trailing(self.first)
                } else {
                    ViewPosition::Leading(next)
                }
            }
            ViewPosition::Trailing(p) => ViewPosition::Trailing(self.seq.successor(p)),
        }
    }

    fn get(&self, position: Self::Position) -> Option<&S::Item> {
        match position {
            ViewPosition::Leading(p) if p != self.last => self.seq.get(p),
            ViewPosition::Trailing(p) if p != self.middle => self.seq.get(p),
            _ => None,
        }
    }

    fn steps_between(&self, from: Self::Position, to: Self::Position) -> Option<usize> {
        match (from, to) {
            (ViewPosition::Leading(a), ViewPosition::Leading(b))
            | (ViewPosition::Trailing(a), ViewPosition::Trailing(b)) => self.seq.steps_between(a, b),
            (ViewPosition::Leading(a), ViewPosition::Trailing(b)) => {
                let leading = self.seq.steps_between(a, self.last)?;
                let trailing = self.seq.steps_between(self.first, b)?;
                Some(leading + trailing)
            }
            (ViewPosition::Trailing(_), ViewPosition::Leading(_)) => None,
        }
    }
}

impl<'a, S: ?Sized + BidirectionalSequence> BidirectionalSequence for RotatedView<'a, S> {
    fn predecessor(&self, position: Self::Position) -> Self::Position {
        match position {
            ViewPosition::Trailing(p) if p == self.first => ViewPosition::Leading(self.seq.predecessor(self.last)),
            ViewPosition::Trailing(p) => ViewPosition::Trailing(self.seq.predecessor(p)),
            ViewPosition::Leading(p) => ViewPosition::Leading(self.seq.predecessor(p)),
        }
    }
}

impl<'a, S: ?Sized + RandomAccessSequence> RandomAccessSequence for RotatedView<'a, S> {
    fn offset(&self, position: Self::Position, n: isize) -> Self::Position {
        self.position_at(self.index_of(position).wrapping_add_signed(n))
    }

    fn distance(&self, from: Self::Position, to: Self::Position) -> isize {
        self.index_of(to).wrapping_sub(self.index_of(from)) as isize
    }
}

impl<'a, S: ?Sized + RandomAccessSequence> Index<usize> for RotatedView<'a, S> {
    type Output = S::Item;

    fn index(&self, index: usize) -> &S::Item {
        match self.get_index(index) {
            Some(item) => item,
            None => panic!("index out of bounds: the len is {} but the index is {}", self.len(), index),
        }
    }
}

impl<S> fmt::Debug for RotatedView<'_, S>
where
    S: ?Sized + Sequence,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, S: ?Sized + Sequence> IntoIterator for RotatedView<'a, S> {
    type Item = &'a S::Item;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Iter<'a, S> {
        Iter::new(self)
    }
}

impl<'a, S: ?Sized + Sequence> IntoIterator for &RotatedView<'a, S> {
    type Item = &'a S::Item;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Iter<'a, S> {
        self.iter()
    }
}

impl<'a, 'b, S, R> PartialEq<RotatedView<'b, R>> for RotatedView<'a, S>
where
    S: ?Sized + Sequence,
    R: ?Sized + Sequence,
    S::Item: PartialEq<R::Item>,
{
    fn eq(&self, other: &RotatedView<'b, R>) -> bool {
        self.iter().eq(other.iter())
    }
}

__impl_slice_eq! { [] RotatedView<'a, S>, Vec<U>, }
__impl_slice_eq! { [] RotatedView<'a, S>, &[U], }
__impl_slice_eq! { [] RotatedView<'a, S>, &mut [U], }
__impl_slice_eq! { [const N: usize] RotatedView<'a, S>, [U; N], }
__impl_slice_eq! { [const N: usize] RotatedView<'a, S>, &[U; N], }
