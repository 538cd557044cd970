use crate::{raw::Buffer, Vector};
use core::{
    iter::{ExactSizeIterator, FusedIterator},
    ptr,
};

/// This struct is created by [`Vector::into_iter`](IntoIterator::into_iter).
/// See its documentation for more.
pub struct IntoIter<T> {
    index: usize,
    buf: Buffer<T>,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // the elements before `index` were already moved out
        let len = self.buf.len();
        let index = self.index;

        unsafe {
            self.buf.set_len_unchecked(0);
            let rest = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().add(index), len.wrapping_sub(index));
            ptr::drop_in_place(rest);
        }
    }
}

impl<T> IntoIterator for Vector<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            index: 0,
            buf: self.into_buffer(),
        }
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type IntoIter = core::slice::IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type IntoIter = core::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIter<T> {
    /// Get a slice to the remaining elements in the iterator
    pub fn as_slice(&self) -> &[T] {
        let index = self.index;
        let len = self.buf.len();
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr().add(index), len.wrapping_sub(index)) }
    }

    /// Get a mutable slice to the remaining elements in the iterator
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let index = self.index;
        let len = self.buf.len();
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr().add(index), len.wrapping_sub(index)) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.buf.len() {
            None
        } else {
            unsafe {
                let value = self.buf.take(self.index);
                self.index += 1;
                Some(value)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.buf.len().wrapping_sub(self.index);
        (len, Some(len))
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.index == self.buf.len() {
            None
        } else {
            unsafe {
                let last = self.buf.len() - 1;
                self.buf.set_len_unchecked(last);
                Some(self.buf.take(last))
            }
        }
    }
}
