use crate::raw::{capacity_overflow, AllocResult, Heap};

use core::{mem::MaybeUninit, ptr};

/// A [`Heap`] together with the number of live elements at its front
///
/// The first `len` slots are always initialized, the rest are spare
/// capacity and are never read. All of the slot-level work of a
/// [`Vector`](crate::Vector) goes through these primitives.
pub struct Buffer<T> {
    len: usize,
    heap: Heap<T>,
}

unsafe fn slice_assume_init_ref<T>(slice: &[MaybeUninit<T>]) -> &[T] {
    // SAFETY: the caller guarantees that `slice` is initialized, and `MaybeUninit<T>`
    // is guaranteed to have the same layout as `T`
    unsafe { &*(slice as *const [MaybeUninit<T>] as *const [T]) }
}

unsafe fn slice_assume_init_mut<T>(slice: &mut [MaybeUninit<T>]) -> &mut [T] {
    // SAFETY: same as `slice_assume_init_ref`, with unique access
    unsafe { &mut *(slice as *mut [MaybeUninit<T>] as *mut [T]) }
}

#[cold]
#[inline(never)]
fn slot_out_of_bounds(slot: usize, len: usize) -> ! {
    panic!("Tried to access slot {}, but the length is {}", slot, len)
}

impl<T> Buffer<T> {
    /// Create a new empty buffer without allocating
    pub fn new() -> Self { Self::from_heap(Heap::new(), 0) }

    /// Create a new empty buffer with room for at least `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self { Self::from_heap(Heap::with_capacity(capacity), 0) }

    fn from_heap(heap: Heap<T>, len: usize) -> Self { Self { len, heap } }

    /// Create a buffer from a heap whose first `len` slots are initialized
    ///
    /// # Safety
    ///
    /// `len` must be at most `heap.capacity()` and the slots `0..len` must be initialized
    pub unsafe fn from_raw_parts(len: usize, heap: Heap<T>) -> Self { Self::from_heap(heap, len) }

    /// Split the buffer into its length and heap without dropping any element
    pub fn into_raw_parts(self) -> (usize, Heap<T>) {
        let this = core::mem::ManuallyDrop::new(self);
        unsafe { (this.len, ptr::read(&this.heap)) }
    }

    /// The number of live elements
    pub fn len(&self) -> usize { self.len }

    /// Returns true if there are no live elements
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// The number of slots available without reallocating
    pub fn capacity(&self) -> usize { self.heap.capacity() }

    /// A pointer to the first slot
    pub fn as_ptr(&self) -> *const T { self.heap.as_ref().as_ptr().cast() }

    /// A mutable pointer to the first slot
    pub fn as_mut_ptr(&mut self) -> *mut T { self.heap.as_mut().as_mut_ptr().cast() }

    /// The live elements
    pub fn as_slice(&self) -> &[T] {
        let len = self.len;
        // The first `len` elements are guaranteed to be initialized
        unsafe { slice_assume_init_ref(&self.heap.as_ref()[..len]) }
    }

    /// The live elements
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        unsafe { slice_assume_init_mut(&mut self.heap.as_mut()[..len]) }
    }

    /// Returns the element in `slot`
    ///
    /// # Panics
    ///
    /// If `slot` is not less than the length
    pub fn read(&self, slot: usize) -> &T {
        match self.as_slice().get(slot) {
            Some(value) => value,
            None => slot_out_of_bounds(slot, self.len),
        }
    }

    /// Returns the element in `slot`
    ///
    /// # Panics
    ///
    /// If `slot` is not less than the length
    pub fn read_mut(&mut self, slot: usize) -> &mut T {
        let len = self.len;
        match self.as_mut_slice().get_mut(slot) {
            Some(value) => value,
            None => slot_out_of_bounds(slot, len),
        }
    }

    /// Replaces the element in `slot`, returning the old one
    ///
    /// # Panics
    ///
    /// If `slot` is not less than the length
    pub fn write(&mut self, slot: usize, value: T) -> T { core::mem::replace(self.read_mut(slot), value) }

    /// Makes sure the buffer can hold at least `capacity` elements
    ///
    /// When the heap has to grow it grows geometrically, so this is
    /// only expensive once in a while.
    ///
    /// # Panic/Abort
    ///
    /// Panics if `capacity` overflows, aborts if the allocator fails
    #[inline]
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if self.capacity() < capacity {
            self.heap.reserve(capacity);
        }
    }

    /// Makes sure the buffer can hold at least `capacity` elements
    ///
    /// # Errors
    ///
    /// If the heap can't grow large enough
    #[inline]
    pub fn try_ensure_capacity(&mut self, capacity: usize) -> AllocResult {
        if self.capacity() < capacity {
            self.heap.try_reserve(capacity)
        } else {
            Ok(())
        }
    }

    /// Makes sure there is room for `additional` more elements
    pub(crate) fn ensure_additional(&mut self, additional: usize) {
        match self.len.checked_add(additional) {
            Some(capacity) => self.ensure_capacity(capacity),
            None => capacity_overflow(additional),
        }
    }

    /// Moves the elements `from..len` forward by `count` slots, leaving a gap
    /// of `count` slots at `from`
    ///
    /// The length is not changed.
    ///
    /// # Safety
    ///
    /// * `from` must be at most the length
    /// * the capacity must be at least `len + count`
    /// * the gap must be filled (with [`Buffer::put`]) before the length is
    ///   raised past it
    pub unsafe fn shift_right(&mut self, from: usize, count: usize) {
        debug_assert!(from <= self.len);
        debug_assert!(self.len + count <= self.capacity());

        let len = self.len;
        unsafe {
            let at = self.as_mut_ptr().add(from);
            at.add(count).copy_from(at, len.wrapping_sub(from));
        }
    }

    /// Moves the elements `from..len` back by `count` slots, overwriting
    /// the `count` slots just before `from`
    ///
    /// The length is not changed.
    ///
    /// # Safety
    ///
    /// * `from` must be at most the length and at least `count`
    /// * the overwritten slots must already have been moved out (with [`Buffer::take`])
    /// * the length must be lowered by `count` afterwards
    pub unsafe fn shift_left(&mut self, from: usize, count: usize) {
        debug_assert!(from <= self.len);
        debug_assert!(count <= from);

        let len = self.len;
        unsafe {
            let at = self.as_mut_ptr().add(from);
            at.sub(count).copy_from(at, len.wrapping_sub(from));
        }
    }

    /// Set the length without moving or dropping anything
    ///
    /// # Safety
    ///
    /// * `len` must be at most the capacity
    /// * the slots `0..len` must be initialized
    pub unsafe fn set_len_unchecked(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        self.len = len;
    }

    /// Moves the element out of `slot`, leaving it logically uninitialized
    ///
    /// # Safety
    ///
    /// `slot` must be initialized, and must not be read again until it is
    /// refilled or excluded by the length
    pub unsafe fn take(&mut self, slot: usize) -> T { unsafe { self.as_ptr().add(slot).read() } }

    /// Moves `value` into `slot` without dropping whatever was there
    ///
    /// # Safety
    ///
    /// `slot` must be less than the capacity
    pub unsafe fn put(&mut self, slot: usize, value: T) {
        debug_assert!(slot < self.capacity());
        unsafe { self.as_mut_ptr().add(slot).write(value) }
    }

    /// Appends `value` after the last element, growing if needed
    pub fn push(&mut self, value: T) -> &mut T {
        self.ensure_additional(1);

        // Safety
        //
        // we reserved space for one more element
        unsafe {
            let len = self.len;
            self.put(len, value);
            self.set_len_unchecked(len + 1);
            &mut *self.as_mut_ptr().add(len)
        }
    }

    /// Drops every element past `len`
    ///
    /// If `len` is at least the current length, this has no effect.
    /// The capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if let Some(diff) = self.len.checked_sub(len) {
            // # Safety
            //
            // * the elements `len..self.len` are initialized and dropped exactly once,
            //   the length is lowered first so a panicking drop can't double drop
            unsafe {
                self.set_len_unchecked(len);
                let tail = ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(len), diff);
                ptr::drop_in_place(tail);
            }
        }
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self { Self::new() }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        // The heap releases its allocation on its own
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}
