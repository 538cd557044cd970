use crate::{
    raw::{capacity_overflow, Buffer, Heap},
    Vector,
};

use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::ManuallyDrop,
    ops::{Add, AddAssign, Index, IndexMut, Mul},
    ptr::NonNull,
    slice::SliceIndex,
};

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_capacity(self.len());
        vec.extend_from_slice(self.as_slice());
        vec
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend_from_slice(source.as_slice());
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self { Self::new() }
}

impl<O: ?Sized + AsRef<[T]>, T: PartialEq> PartialEq<O> for Vector<T> {
    fn eq(&self, other: &O) -> bool { self.as_slice() == other.as_ref() }
}

impl<T: Eq> Eq for Vector<T> {}

impl<O: ?Sized + AsRef<[T]>, T: PartialOrd> PartialOrd<O> for Vector<T> {
    fn partial_cmp(&self, other: &O) -> Option<core::cmp::Ordering> { self.as_slice().partial_cmp(other.as_ref()) }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering { self.as_slice().cmp(other.as_slice()) }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.as_slice().hash(state) }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Debug::fmt(self.as_slice(), f) }
}

/// Renders as `vector([1, 2, 3])`
impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("vector([")?;
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("])")
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] { self.as_slice() }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] { self.as_slice() }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output { self.as_slice().index(index) }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output { self.as_mut_slice().index_mut(index) }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(vec: Vec<T>) -> Self {
        // only zero sized elements can get this long
        if vec.len() > isize::MAX as usize {
            capacity_overflow(vec.len())
        }

        let mut vec = ManuallyDrop::new(vec);

        let len = vec.len();
        let cap = vec.capacity();
        let ptr = unsafe { NonNull::new_unchecked(vec.as_mut_ptr()) };

        // Safety: `Vec` allocates `[T; cap]` from the global allocator, and
        // its first `len` elements are initialized
        unsafe { Self::from_buffer(Buffer::from_raw_parts(len, Heap::from_raw_parts(ptr, cap))) }
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(vec: Vector<T>) -> Self {
        let (len, heap) = vec.into_buffer().into_raw_parts();
        let (ptr, cap) = heap.into_raw_parts();

        unsafe { Vec::from_raw_parts(ptr.as_ptr(), len, cap) }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(array: [T; N]) -> Self {
        let mut vec = Self::with_capacity(N);
        vec.extend(IntoIterator::into_iter(array));
        vec
    }
}

impl<T: Clone> Add<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, other: &Vector<T>) -> Vector<T> { self.concat(other) }
}

impl<T: Clone> AddAssign<&Vector<T>> for Vector<T> {
    fn add_assign(&mut self, other: &Vector<T>) { self.concat_in_place(other) }
}

impl<T: Clone> Mul<usize> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, n: usize) -> Vector<T> {
        match self.repeat(n) {
            Ok(vec) => vec,
            Err(_) => capacity_overflow(self.len().saturating_mul(n)),
        }
    }
}
