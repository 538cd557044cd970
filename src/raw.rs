//! The raw storage that backs up a [`Vector`](crate::Vector)
//!
//! [`Heap`] owns the allocation and decides how it grows, [`Buffer`] tracks
//! how many of its slots hold live elements and offers the slot-level
//! primitives that every [`Vector`](crate::Vector) operation is built from.

mod buffer;
mod heap;

pub use buffer::Buffer;
pub use heap::{Heap, INIT_ALLOC_CAPACITY};

/// Error on failure to allocate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError;
/// Result of an allocation
pub type AllocResult = Result<(), AllocError>;

#[cold]
#[inline(never)]
pub(crate) fn capacity_overflow(requested: usize) -> ! {
    panic!("Tried to reserve {} slots, but that overflows the capacity", requested)
}
