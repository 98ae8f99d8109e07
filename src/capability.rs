//! Capability tiers and the static selection of the rotation algorithm.
//!
//! A [`Sequence`] names its tier through [`Sequence::Capability`]. [`Dispatch`] is implemented for
//! each marker only where the sequence actually provides that tier, so the choice of algorithm is
//! made entirely by trait resolution at compile time.

use core::fmt;

use crate::rotate;
use crate::sequence::{BidirectionalSequence, RandomAccessSequence, Sequence, SequenceMut};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Forward {}
    impl Sealed for super::Bidirectional {}
    impl Sealed for super::RandomAccess {}
}

/// The three traversal tiers, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Forward,
    Bidirectional,
    RandomAccess,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Forward => "forward",
            Tier::Bidirectional => "bidirectional",
            Tier::RandomAccess => "random access",
        };
        f.write_str(name)
    }
}

/// Implemented by the capability marker types. This trait is sealed.
pub trait Capability: sealed::Sealed {
    const TIER: Tier;
}

/// Successor navigation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Forward;

/// Successor and predecessor navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bidirectional;

/// Constant time offset arithmetic and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RandomAccess;

impl Capability for Forward {
    const TIER: Tier = Tier::Forward;
}

impl Capability for Bidirectional {
    const TIER: Tier = Tier::Bidirectional;
}

impl Capability for RandomAccess {
    const TIER: Tier = Tier::RandomAccess;
}

/// Returns the tier a sequence type declares.
///
/// # Examples
///
/// ```
/// use seqrotate::{tier_of, ForwardOnly, Tier};
///
/// assert_eq!(tier_of::<[u8]>(), Tier::RandomAccess);
/// assert_eq!(tier_of::<ForwardOnly<Vec<u8>>>(), Tier::Forward);
/// ```
pub fn tier_of<S: ?Sized + Sequence>() -> Tier {
    <S::Capability as Capability>::TIER
}

/// The algorithms a capability tier selects for a sequence type `S`.
pub trait Dispatch<S: ?Sized + Sequence>: Capability {
    /// Returns whether `middle` lies within `[first, last]`.
    fn contains(seq: &S, first: S::Position, middle: S::Position, last: S::Position) -> bool;

    /// Rotates `[first, last)` so that `middle` becomes first and returns the new position of
    /// the element originally at `first`. `middle` must already be known to lie in range.
    fn rotate(seq: &mut S, first: S::Position, middle: S::Position, last: S::Position) -> S::Position
    where
        S: SequenceMut;
}

/// Walks from `first` towards `last` looking for `middle`.
fn walk_contains<S: ?Sized + Sequence>(seq: &S, mut first: S::Position, middle: S::Position, last: S::Position) -> bool {
    loop {
        if first == middle {
            return true;
        }
        if first == last {
            return false;
        }
        first = seq.successor(first);
    }
}

impl<S: ?Sized + Sequence> Dispatch<S> for Forward {
    fn contains(seq: &S, first: S::Position, middle: S::Position, last: S::Position) -> bool {
        walk_contains(seq, first, middle, last)
    }

    fn rotate(seq: &mut S, first: S::Position, middle: S::Position, last: S::Position) -> S::Position
    where
        S: SequenceMut,
    {
        rotate::forward(seq, first, middle, last)
    }
}

impl<S: ?Sized + BidirectionalSequence> Dispatch<S> for Bidirectional {
    fn contains(seq: &S, first: S::Position, middle: S::Position, last: S::Position) -> bool {
        walk_contains(seq, first, middle, last)
    }

    fn rotate(seq: &mut S, first: S::Position, middle: S::Position, last: S::Position) -> S::Position
    where
        S: SequenceMut,
    {
        rotate::bidirectional(seq, first, middle, last)
    }
}

impl<S: ?Sized + RandomAccessSequence> Dispatch<S> for RandomAccess {
    fn contains(seq: &S, first: S::Position, middle: S::Position, last: S::Position) -> bool {
        seq.distance(first, middle) >= 0 && seq.distance(middle, last) >= 0
    }

    fn rotate(seq: &mut S, first: S::Position, middle: S::Position, last: S::Position) -> S::Position
    where
        S: SequenceMut,
    {
        rotate::random_access(seq, first, middle, last)
    }
}
