//! The traits a container implements to be rotated, reversed or viewed.
//!
//! Positions are opaque handles. A container declares how it can be traversed by choosing one of
//! the [`capability`] markers and implementing the matching traits:
//!
//! | capability                     | traits                                                  |
//! |--------------------------------|---------------------------------------------------------|
//! | [`Forward`]                    | [`Sequence`]                                            |
//! | [`Bidirectional`]              | [`Sequence`] + [`BidirectionalSequence`]                |
//! | [`RandomAccess`]               | [`Sequence`] + [`BidirectionalSequence`] + [`RandomAccessSequence`] |
//!
//! Every algorithm in this crate additionally needs [`SequenceMut`] to exchange two elements.
//!
//! [`capability`]: crate::capability
//! [`Forward`]: crate::capability::Forward
//! [`Bidirectional`]: crate::capability::Bidirectional
//! [`RandomAccess`]: crate::capability::RandomAccess

use core::cmp::Ordering;
use core::fmt;
use std::collections::VecDeque;

use crate::capability::{self, Capability};

/// An ordered, finite container traversable from [`start`] to [`end`] by [`successor`] steps.
///
/// [`start`]: Sequence::start
/// [`end`]: Sequence::end
/// [`successor`]: Sequence::successor
pub trait Sequence {
    type Item;

    /// A handle to a location in the sequence. The end position is one past the last element
    /// and is never dereferenced.
    type Position: Copy + Eq + fmt::Debug;

    /// The traversal tier this sequence declares. Rotations pick their algorithm from it.
    type Capability: Capability;

    fn start(&self) -> Self::Position;

    fn end(&self) -> Self::Position;

    /// Returns the position after `position`. Calling this on the end position is a contract
    /// violation.
    fn successor(&self, position: Self::Position) -> Self::Position;

    /// Returns the element at `position`, or `None` for the end position.
    fn get(&self, position: Self::Position) -> Option<&Self::Item>;

    /// Returns the number of [`successor`] steps from `from` to `to` if it is known without
    /// walking, `None` otherwise or if `to` comes before `from`.
    ///
    /// The default returns `None`. Iterators over the sequence use this for their size hint.
    ///
    /// [`successor`]: Sequence::successor
    fn steps_between(&self, from: Self::Position, to: Self::Position) -> Option<usize> {
        let _ = (from, to);
        None
    }
}

/// A sequence whose elements can be exchanged in place.
pub trait SequenceMut: Sequence {
    /// Swaps the elements at `a` and `b`. `a` and `b` may be equal.
    fn swap(&mut self, a: Self::Position, b: Self::Position);
}

/// A sequence that can also be traversed backwards.
pub trait BidirectionalSequence: Sequence {
    /// Returns the position before `position`. Calling this on the start position is a contract
    /// violation.
    fn predecessor(&self, position: Self::Position) -> Self::Position;
}

/// A sequence with constant time offset arithmetic between positions.
pub trait RandomAccessSequence: BidirectionalSequence {
    /// Returns the position `n` steps after `position` (before it, if `n` is negative).
    fn offset(&self, position: Self::Position, n: isize) -> Self::Position;

    /// Returns the number of steps from `from` to `to`, negative if `to` comes first.
    fn distance(&self, from: Self::Position, to: Self::Position) -> isize;

    /// Orders two positions by their location in the sequence.
    fn compare(&self, a: Self::Position, b: Self::Position) -> Ordering {
        self.distance(b, a).cmp(&0)
    }
}

macro_rules! random_access_impls {
    ($($ty:ty => $inherent:ty),*) => {$(
        impl<T> Sequence for $ty {
            type Item = T;
            type Position = usize;
            type Capability = capability::RandomAccess;

            #[inline]
            fn start(&self) -> usize {
                0
            }

            #[inline]
            fn end(&self) -> usize {
                self.len()
            }

            #[inline]
            fn successor(&self, position: usize) -> usize {
                position + 1
            }

            #[inline]
            fn get(&self, position: usize) -> Option<&T> {
                <$inherent>::get(self, position)
            }

            #[inline]
            fn steps_between(&self, from: usize, to: usize) -> Option<usize> {
                to.checked_sub(from)
            }
        }

        impl<T> SequenceMut for $ty {
            #[inline]
            fn swap(&mut self, a: usize, b: usize) {
                <$inherent>::swap(self, a, b);
            }
        }

        impl<T> BidirectionalSequence for $ty {
            #[inline]
            fn predecessor(&self, position: usize) -> usize {
                position - 1
            }
        }

        impl<T> RandomAccessSequence for $ty {
            #[inline]
            fn offset(&self, position: usize, n: isize) -> usize {
                position.wrapping_add_signed(n)
            }

            #[inline]
            fn distance(&self, from: usize, to: usize) -> isize {
                to.wrapping_sub(from) as isize
            }
        }
    )*};
}

// `Vec` has no inherent `get` or `swap`, so it goes through the slice ones by deref coercion
random_access_impls!([T] => [T], Vec<T> => [T], VecDeque<T> => VecDeque<T>);

macro_rules! forward_ref_impls {
    ($($ref:ty),*) => {$(
        impl<S: ?Sized + Sequence> Sequence for $ref {
            type Item = S::Item;
            type Position = S::Position;
            type Capability = S::Capability;

            #[inline]
            fn start(&self) -> S::Position {
                (**self).start()
            }

            #[inline]
            fn end(&self) -> S::Position {
                (**self).end()
            }

            #[inline]
            fn successor(&self, position: S::Position) -> S::Position {
                (**self).successor(position)
            }

            #[inline]
            fn get(&self, position: S::Position) -> Option<&S::Item> {
                (**self).get(position)
            }

            #[inline]
            fn steps_between(&self, from: S::Position, to: S::Position) -> Option<usize> {
                (**self).steps_between(from, to)
            }
        }

        impl<S: ?Sized + BidirectionalSequence> BidirectionalSequence for $ref {
            #[inline]
            fn predecessor(&self, position: S::Position) -> S::Position {
                (**self).predecessor(position)
            }
        }

        impl<S: ?Sized + RandomAccessSequence> RandomAccessSequence for $ref {
            #[inline]
            fn offset(&self, position: S::Position, n: isize) -> S::Position {
                (**self).offset(position, n)
            }

            #[inline]
            fn distance(&self, from: S::Position, to: S::Position) -> isize {
                (**self).distance(from, to)
            }
        }
    )*};
}

forward_ref_impls!(&S, &mut S);

impl<S: ?Sized + SequenceMut> SequenceMut for &mut S {
    #[inline]
    fn swap(&mut self, a: S::Position, b: S::Position) {
        (**self).swap(a, b);
    }
}

/// Presents a sequence as forward-only, whatever its own capability.
///
/// Rotating through this adapter uses the swap based forward algorithm. The result is always
/// identical to rotating the wrapped sequence directly, only the number of element moves differs.
///
/// # Examples
///
/// ```
/// use seqrotate::{rotate, ForwardOnly};
///
/// let mut items = [1, 2, 3, 4, 5];
/// let mut forward = ForwardOnly::new(&mut items[..]);
/// assert_eq!(rotate(&mut forward, 2), Ok(3));
/// assert_eq!(items, [3, 4, 5, 1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ForwardOnly<S> {
    inner: S,
}

impl<S> ForwardOnly<S> {
    pub fn new(inner: S) -> Self {
        ForwardOnly { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sequence> Sequence for ForwardOnly<S> {
    type Item = S::Item;
    type Position = S::Position;
    type Capability = capability::Forward;

    #[inline]
    fn start(&self) -> S::Position {
        self.inner.start()
    }

    #[inline]
    fn end(&self) -> S::Position {
        self.inner.end()
    }

    #[inline]
    fn successor(&self, position: S::Position) -> S::Position {
        self.inner.successor(position)
    }

    #[inline]
    fn get(&self, position: S::Position) -> Option<&S::Item> {
        self.inner.get(position)
    }
}

impl<S: SequenceMut> SequenceMut for ForwardOnly<S> {
    #[inline]
    fn swap(&mut self, a: S::Position, b: S::Position) {
        self.inner.swap(a, b);
    }
}

/// Presents a sequence as bidirectional, hiding any random access capability.
///
/// See [`ForwardOnly`] for the forward-only counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BidirectionalOnly<S> {
    inner: S,
}

impl<S> BidirectionalOnly<S> {
    pub fn new(inner: S) -> Self {
        BidirectionalOnly { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: BidirectionalSequence> Sequence for BidirectionalOnly<S> {
    type Item = S::Item;
    type Position = S::Position;
    type Capability = capability::Bidirectional;

    #[inline]
    fn start(&self) -> S::Position {
        self.inner.start()
    }

    #[inline]
    fn end(&self) -> S::Position {
        self.inner.end()
    }

    #[inline]
    fn successor(&self, position: S::Position) -> S::Position {
        self.inner.successor(position)
    }

    #[inline]
    fn get(&self, position: S::Position) -> Option<&S::Item> {
        self.inner.get(position)
    }
}

impl<S: BidirectionalSequence> BidirectionalSequence for BidirectionalOnly<S> {
    #[inline]
    fn predecessor(&self, position: S::Position) -> S::Position {
        self.inner.predecessor(position)
    }
}

impl<S: BidirectionalSequence + SequenceMut> SequenceMut for BidirectionalOnly<S> {
    #[inline]
    fn swap(&mut self, a: S::Position, b: S::Position) {
        self.inner.swap(a, b);
    }
}
