use std::iter::FusedIterator;

use crate::sequence::{BidirectionalSequence, Sequence};
use crate::view::{RotatedView, ViewPosition};

/// An iterator over the elements of a [`RotatedView`].
///
/// This `struct` is created by the [`iter`] method on [`RotatedView`]. See it's documentation for
/// more information. Cloning the iterator gives an independent cursor over the same view.
///
/// [`iter`]: RotatedView::iter
pub struct Iter<'a, S: ?Sized + Sequence> {
    view: RotatedView<'a, S>,
    // the element that `.next()` returns
    front: ViewPosition<S::Position>,
    // the element after the one `.next_back()` returns
    back: ViewPosition<S::Position>,
    // elements between `front` and `back`, when the source can tell without walking
    remaining: Option<usize>,
}

impl<'a, S: ?Sized + Sequence> Iter<'a, S> {
    pub(super) fn new(view: RotatedView<'a, S>) -> Self {
        let (front, back) = (view.start(), view.end());
        Iter { view, front, back, remaining: view.steps_between(front, back) }
    }
}

impl<S: ?Sized + Sequence> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Iter { view: self.view, front: self.front, back: self.back, remaining: self.remaining }
    }
}

impl<'a, S: ?Sized + Sequence> Iterator for Iter<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<&'a S::Item> {
        if self.front == self.back {
            return None;
        }
        let position = self.front;
        self.front = self.view.successor(position);
        self.consume();
        self.get(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.front == self.back {
            return (0, Some(0));
        }
        match self.remaining {
            Some(len) => (len, Some(len)),
            None => (1, None),
        }
    }
}

impl<'a, S: ?Sized + BidirectionalSequence> DoubleEndedIterator for Iter<'a, S> {
    fn next_back(&mut self) -> Option<&'a S::Item> {
        if self.front == self.back {
            return None;
        }
        self.back = self.view.predecessor(self.back);
        self.consume();
        self.get(self.back)
    }
}

impl<S: ?Sized + Sequence> FusedIterator for Iter<'_, S> {}

impl<'a, S: ?Sized + Sequence> Iter<'a, S> {
    fn consume(&mut self) {
        if let Some(len) = &mut self.remaining {
            *len = len.saturating_sub(1);
        }
    }

    // reads through the source so the item borrows for 'a rather than for the view
    fn get(&self, position: ViewPosition<S::Position>) -> Option<&'a S::Item> {
        self.view.source().get(position.source())
    }
}

impl<S> core::fmt::Debug for Iter<'_, S>
where
    S: ?Sized + Sequence,
    S::Item: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
