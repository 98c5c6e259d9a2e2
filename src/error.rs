//! Error type for the fallible `CircularList` constructors.

#[cfg(feature = "std")]
use std::error;
use core::fmt;

/// Error value for the fallible `CircularList` constructors.
///
/// A constructor that returns an error never hands out a partially built
/// list; any element it had already stored has been dropped.
#[derive(Clone, Copy, Eq, PartialEq)]
pub enum Error {
    /// The backing slots could not be allocated.
    AllocationFailed {
        /// The capacity that was requested.
        capacity: usize,
    },
    /// A range source yielded a different number of elements than it reported.
    LengthMismatch {
        /// The length reported by the source.
        expected: usize,
        /// The number of elements the source actually produced, counted up
        /// to one past `expected`.
        actual: usize,
    },
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::AllocationFailed { capacity } => {
                write!(f, "failed to allocate storage for capacity {}", capacity)
            }
            Error::LengthMismatch { expected, actual } => {
                write!(f, "range reported {} elements but produced {}", expected, actual)
            }
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "Error", self)
    }
}
