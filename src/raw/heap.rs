use crate::raw::{capacity_overflow, AllocError, AllocResult};

use std::{
    alloc::{alloc, handle_alloc_error, realloc, Layout},
    mem::{self, MaybeUninit},
    ptr::NonNull,
};

/// The smallest capacity a heap will grow to
pub const INIT_ALLOC_CAPACITY: usize = 4;

/// Heap allocated, uninitialized storage for `T`s
///
/// Zero sized types never allocate, and report a capacity of `isize::MAX`.
pub struct Heap<T>(Box<[MaybeUninit<T>]>);

#[derive(Clone, Copy)]
enum OnFailure {
    Abort,
    Error,
}

fn is_zst<T>() -> bool { mem::size_of::<T>() == 0 }

/// Picks the capacity to grow to when `requested` slots don't fit in `current`.
///
/// The result is at least double the current capacity and strictly greater than
/// `requested`, so a run of single pushes only reallocates `O(log n)` times.
fn grown_capacity(current: usize, requested: usize) -> Option<usize> {
    let doubled = current.checked_mul(2)?;
    let past_request = requested.checked_add(1)?;
    Some(doubled.max(past_request).max(INIT_ALLOC_CAPACITY))
}

impl<T> Heap<T> {
    /// Create a new zero-capacity heap
    pub fn new() -> Self {
        let capacity = if is_zst::<T>() { isize::MAX as usize } else { 0 };
        unsafe { Self::from_raw_parts(NonNull::dangling(), capacity) }
    }

    /// Create a new heap with space for at least `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 || is_zst::<T>() {
            return Self::new()
        }

        let layout = match Layout::array::<T>(capacity) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(capacity),
        };

        // Safety: the layout has a non-zero size
        let ptr = unsafe { alloc(layout) };

        let ptr = match NonNull::new(ptr) {
            Some(ptr) => ptr,
            None => handle_alloc_error(layout),
        };

        // Safety:
        // we have allocated a pointer in global that has `capacity` elements available
        unsafe { Self::from_raw_parts(ptr.cast(), capacity) }
    }

    /// Create a new `Heap<T>` storage from the given pointer and capacity
    ///
    /// # Safety
    ///
    /// If the capacity is non-zero and `T` is not zero sized
    /// * You must have allocated the pointer from the global allocator
    ///   with the layout of `[T; capacity]`
    /// * The pointer must be valid to read-write for the range `ptr..ptr.add(capacity)`
    pub unsafe fn from_raw_parts(ptr: NonNull<T>, capacity: usize) -> Self {
        let capacity = if is_zst::<T>() { isize::MAX as usize } else { capacity };
        let ptr = std::ptr::slice_from_raw_parts_mut(ptr.as_ptr().cast::<MaybeUninit<T>>(), capacity);
        unsafe { Self(Box::from_raw(ptr)) }
    }

    /// Convert a `Heap` storage into a pointer and capacity, without
    /// deallocating the storage
    pub fn into_raw_parts(self) -> (NonNull<T>, usize) {
        let capacity = self.capacity();
        let ptr = Box::into_raw(self.0);
        unsafe { (NonNull::new_unchecked(ptr.cast()), capacity) }
    }

    /// The number of slots this heap can hold
    pub fn capacity(&self) -> usize { self.0.len() }

    /// Makes sure there is room for at least `new_capacity` slots
    ///
    /// # Panic/Abort
    ///
    /// Panics if `new_capacity` can't be represented, aborts if the allocator fails
    pub fn reserve(&mut self, new_capacity: usize) {
        if self.capacity() < new_capacity {
            let _ = self.reserve_slow(new_capacity, OnFailure::Abort);
        }
    }

    /// Makes sure there is room for at least `new_capacity` slots
    ///
    /// # Errors
    ///
    /// If enough space cannot be reserved, returns `Err(AllocError)`
    pub fn try_reserve(&mut self, new_capacity: usize) -> AllocResult {
        if self.capacity() < new_capacity {
            self.reserve_slow(new_capacity, OnFailure::Error)
        } else {
            Ok(())
        }
    }

    #[cold]
    #[inline(never)]
    fn reserve_slow(&mut self, requested: usize, on_failure: OnFailure) -> AllocResult {
        let cap = self.capacity();
        debug_assert!(requested > cap);

        // zero sized types are already at their maximum capacity
        let new_capacity = match grown_capacity(cap, requested) {
            Some(new_capacity) if !is_zst::<T>() => new_capacity,
            _ => match on_failure {
                OnFailure::Abort => capacity_overflow(requested),
                OnFailure::Error => return Err(AllocError),
            },
        };

        let layout = match (Layout::array::<T>(new_capacity), on_failure) {
            (Ok(layout), _) => layout,
            (Err(_), OnFailure::Abort) => capacity_overflow(requested),
            (Err(_), OnFailure::Error) => return Err(AllocError),
        };

        log::trace!("growing heap storage from {} to {} slots", cap, new_capacity);

        let ptr = if cap == 0 {
            unsafe { alloc(layout) }
        } else {
            // Safety: this layout was valid when the current block was allocated
            let old_layout = unsafe { Layout::from_size_align_unchecked(cap * mem::size_of::<T>(), layout.align()) };
            unsafe { realloc(self.0.as_mut_ptr().cast(), old_layout, layout.size()) }
        };

        let ptr = match (NonNull::new(ptr), on_failure) {
            (Some(ptr), _) => ptr,
            (None, OnFailure::Abort) => handle_alloc_error(layout),
            (None, OnFailure::Error) => return Err(AllocError),
        };

        // The old block was either empty or has been moved by `realloc`,
        // so it must be forgotten instead of dropped
        unsafe {
            let new = Self::from_raw_parts(ptr.cast(), new_capacity);
            let old = mem::replace(self, new);
            mem::forget(old);
        }

        Ok(())
    }
}

impl<T> Default for Heap<T> {
    fn default() -> Self { Self::new() }
}

impl<T> AsRef<[MaybeUninit<T>]> for Heap<T> {
    fn as_ref(&self) -> &[MaybeUninit<T>] { &self.0 }
}

impl<T> AsMut<[MaybeUninit<T>]> for Heap<T> {
    fn as_mut(&mut self) -> &mut [MaybeUninit<T>] { &mut self.0 }
}
