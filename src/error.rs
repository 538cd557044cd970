use thiserror::Error;

/// Result of a fallible [`Vector`](crate::Vector) operation
pub type Result<T> = std::result::Result<T, Error>;

/// The ways a [`Vector`](crate::Vector) operation can fail
///
/// A failed operation never leaves the vector partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The index did not name a live element, or the vector was empty
    #[error("index {index} out of range for vector of length {len}")]
    IndexOutOfRange {
        /// The index as the caller passed it
        index: isize,
        /// The length of the vector at the time
        len: usize,
    },
    /// No element matched the value searched for
    #[error("value not found in vector")]
    NotFound,
    /// The operand of a concatenation was not a vector of the same element type
    #[error("unsupported operand type for concatenation: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        /// The type that was required
        expected: &'static str,
        /// The type that was given
        found: &'static str,
    },
    /// An argument was outside of what the operation accepts
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The allocator could not provide enough memory
    #[error("memory allocation failed")]
    AllocFailed,
}

impl From<crate::raw::AllocError> for Error {
    fn from(_: crate::raw::AllocError) -> Self { Error::AllocFailed }
}
