use core::fmt;

use thiserror::Error;

/// The error returned when a rotation or view is requested with a `middle` that does not lie
/// within `[first, last]`.
///
/// Empty ranges and `middle == first` or `middle == last` are valid no-op requests and never
/// produce an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error<P: fmt::Debug> {
    #[error("middle position {middle:?} is not within {first:?}..={last:?}")]
    InvalidMiddle { first: P, middle: P, last: P },
}

pub type Result<T, P> = core::result::Result<T, Error<P>>;
