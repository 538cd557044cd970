#![allow(unused_unsafe)]
#![forbid(missing_docs, clippy::missing_safety_doc)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

//! A growable vector with python-style sequence semantics
//!
//! [`Vector`] stores its elements contiguously on the heap and grows
//! geometrically, so appending is amortized `O(1)`, and reading or writing
//! any index is `O(1)`. On top of that it speaks the language of python
//! lists: indices may be negative to count from the end, slices clamp
//! their bounds instead of failing, and the usual sequence operations
//! (concatenation, repetition, searching, stable sorting, reversing) are
//! all available.
//!
//! Equality and ordering are never assumed, every search or sort takes
//! the comparison to use as a closure.
//!
//! # Basic Usage
//!
//! ```rust
//! use vectorish::{vector, Vector};
//!
//! let mut vec = Vector::new();
//! vec.append(1);
//! vec.append(2);
//! vec.append(3);
//!
//! vec.insert(1, 9);
//! assert_eq!(vec, [1, 9, 2, 3]);
//!
//! assert_eq!(vec.pop_front(), Ok(1));
//! assert_eq!(vec.get(-1), Ok(&3));
//! assert_eq!(vec.slice(Some(-2), None), [2, 3]);
//!
//! vec.reverse();
//! assert_eq!(vec, vector![3, 2, 9]);
//! ```
//!
//! Failures are reported as [`Error`]s, and leave the vector untouched.
//!
//! ```rust
//! use vectorish::{vector, Error};
//!
//! let vec = vector![1, 2, 3];
//! assert_eq!(vec.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
//! assert_eq!(vec.index_of(&7, |a, b| a == b), Err(Error::NotFound));
//! assert!(vec.repeat(-1).is_err());
//! assert_eq!(vec, [1, 2, 3]);
//! ```
//!
//! # Layout
//!
//! The storage lives in [`raw`]: a [`raw::Heap`] owns the allocation and its
//! growth policy, and a [`raw::Buffer`] keeps track of the live elements.
//! [`Vector`] only ever talks to the buffer through its slot primitives.

use core::{any::Any, cmp::Ordering, convert::TryInto};

mod error;
mod impls;

pub mod iter;
pub mod raw;
pub mod slice;

pub use error::{Error, Result};

use raw::Buffer;
use slice::{normalize_index, normalize_insert_index, normalize_slice};

#[doc(hidden)]
#[macro_export]
macro_rules! count {
    () => { 0 };
    ($($a:tt $b:tt)*) => { $crate::count!($($a)*) << 1 };
    ($c:tt $($a:tt $b:tt)*) => { ($crate::count!($($a)*) << 1) | 1 };
}

/// Create a new [`Vector`]
///
/// ```rust
/// # use vectorish::{vector, Vector};
/// let x: Vector<i32> = vector![];
/// assert!(x.is_empty());
///
/// let x = vector![1, 2, 3, 4];
/// assert_eq!(x, [1, 2, 3, 4]);
///
/// let x = vector!["a"; 3];
/// assert_eq!(x, ["a", "a", "a"]);
/// ```
#[macro_export]
macro_rules! vector {
    () => { $crate::Vector::new() };
    ($expr:expr; $n:expr) => {{
        let len = $n;
        let mut vec = $crate::Vector::with_capacity(len);
        vec.grow(len, $expr);
        vec
    }};
    ($($expr:expr),+ $(,)?) => {{
        let mut vec = $crate::Vector::with_capacity($crate::count!($(($expr))*));
        $(vec.append($expr);)+
        vec
    }};
}

/// A contiguous growable vector with python-style indexing
///
/// See the [crate level documentation](crate) for an overview.
pub struct Vector<T> {
    buf: Buffer<T>,
}

impl<T> Vector<T> {
    /// Create a new empty `Vector`, this doesn't allocate
    pub fn new() -> Self { Self { buf: Buffer::new() } }

    /// Create a new empty `Vector` with room for at least `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Buffer::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the vector
    pub fn len(&self) -> usize { self.buf.len() }

    /// Returns true if and only if the vector contains no elements
    pub fn is_empty(&self) -> bool { self.buf.is_empty() }

    /// Returns the number of elements the vector can hold without reallocating
    pub fn capacity(&self) -> usize { self.buf.capacity() }

    /// Extracts a slice containing the entire vector
    pub fn as_slice(&self) -> &[T] { self.buf.as_slice() }

    /// Extracts a mutable slice containing the entire vector
    pub fn as_mut_slice(&mut self) -> &mut [T] { self.buf.as_mut_slice() }

    /// Iterates over the elements, front to back
    pub fn iter(&self) -> core::slice::Iter<'_, T> { self.as_slice().iter() }

    /// Iterates mutably over the elements, front to back
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> { self.as_mut_slice().iter_mut() }

    /// Returns the underlying buffer
    pub fn buffer(&self) -> &Buffer<T> { &self.buf }

    pub(crate) fn from_buffer(buf: Buffer<T>) -> Self { Self { buf } }

    pub(crate) fn into_buffer(self) -> Buffer<T> { self.buf }

    /// Reserve enough space for at least `additional` more elements
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows, and may abort if it can't be allocated
    pub fn reserve(&mut self, additional: usize) { self.buf.ensure_additional(additional); }

    /// Try to reserve enough space for at least `additional` more elements
    ///
    /// # Errors
    ///
    /// [`Error::AllocFailed`] if the new capacity overflows or can't be allocated
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let capacity = self.len().checked_add(additional).ok_or(Error::AllocFailed)?;
        Ok(self.buf.try_ensure_capacity(capacity)?)
    }

    fn out_of_range(&self, index: isize) -> Error {
        Error::IndexOutOfRange {
            index,
            len: self.len(),
        }
    }

    fn slot(&self, index: isize) -> Result<usize> {
        normalize_index(index, self.len()).ok_or_else(|| self.out_of_range(index))
    }

    /// Returns the element at `index`, a negative index counts from the end
    ///
    /// ```rust
    /// # use vectorish::vector;
    /// let vec = vector!['a', 'b', 'c'];
    /// assert_eq!(vec.get(0), Ok(&'a'));
    /// assert_eq!(vec.get(-1), Ok(&'c'));
    /// assert!(vec.get(-4).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` doesn't name an element
    pub fn get(&self, index: isize) -> Result<&T> {
        let slot = self.slot(index)?;
        Ok(self.buf.read(slot))
    }

    /// Returns the element at `index` mutably, a negative index counts from the end
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` doesn't name an element
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let slot = self.slot(index)?;
        Ok(self.buf.read_mut(slot))
    }

    /// Overwrites the element at `index`, returning the old one
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` doesn't name an element, `value`
    /// is dropped in that case
    pub fn set(&mut self, index: isize, value: T) -> Result<T> {
        let slot = self.slot(index)?;
        Ok(self.buf.write(slot, value))
    }

    /// Appends an element to the back of the vector
    pub fn append(&mut self, value: T) { self.buf.push(value); }

    /// Prepends an element to the front of the vector
    ///
    /// This shifts every element, so it is `O(len)`.
    pub fn append_left(&mut self, value: T) { self.insert(0, value); }

    /// Inserts `value` before the element at `index`, shifting everything after it
    ///
    /// A negative index counts from the end, and an index past either end is
    /// clamped, so inserting never fails.
    ///
    /// ```rust
    /// # use vectorish::vector;
    /// let mut vec = vector![1, 2, 3];
    /// vec.insert(-1, 8);
    /// vec.insert(100, 9);
    /// vec.insert(-100, 0);
    /// assert_eq!(vec, [0, 1, 2, 8, 3, 9]);
    /// ```
    pub fn insert(&mut self, index: isize, value: T) {
        let len = self.len();
        let slot = normalize_insert_index(index, len);
        self.buf.ensure_additional(1);

        // Safety
        //
        // * there is room for one more element
        // * `slot <= len`, and the gap is filled before the length grows
        unsafe {
            self.buf.shift_right(slot, 1);
            self.buf.put(slot, value);
            self.buf.set_len_unchecked(len + 1);
        }
    }

    /// Removes and returns the last element
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if the vector is empty
    pub fn pop(&mut self) -> Result<T> { self.pop_at(-1) }

    /// Removes and returns the element at `index`, shifting everything after it
    ///
    /// A negative index counts from the end.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` doesn't name an element
    pub fn pop_at(&mut self, index: isize) -> Result<T> {
        let len = self.len();
        let slot = self.slot(index)?;

        // Safety
        //
        // * `slot` is in bounds, and is closed up right after it is moved out
        unsafe {
            let value = self.buf.take(slot);
            self.buf.shift_left(slot + 1, 1);
            self.buf.set_len_unchecked(len - 1);
            Ok(value)
        }
    }

    /// Removes and returns the first element
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if the vector is empty
    pub fn pop_front(&mut self) -> Result<T> { self.pop_at(0) }

    /// Removes all elements
    ///
    /// The capacity is kept, so refilling the vector doesn't reallocate.
    pub fn clear(&mut self) { self.buf.truncate(0); }

    /// Appends `additional` clones of `value`
    pub fn grow(&mut self, additional: usize, value: T)
    where
        T: Clone,
    {
        self.reserve(additional);
        if additional != 0 {
            for _ in 1..additional {
                self.buf.push(value.clone());
            }
            self.buf.push(value);
        }
    }

    /// Clones and appends every element of `slice`
    pub fn extend_from_slice(&mut self, slice: &[T])
    where
        T: Clone,
    {
        self.reserve(slice.len());
        for value in slice {
            self.buf.push(value.clone());
        }
    }

    /// Copies the elements `start..stop` into a new vector
    ///
    /// This is [`Vector::slice_step`] with a step of one, so it can't fail.
    pub fn slice(&self, start: Option<isize>, stop: Option<isize>) -> Self
    where
        T: Clone,
    {
        match normalize_slice(start, stop, 1, self.len()) {
            Some(indices) => self.select(indices),
            None => Self::new(),
        }
    }

    /// Copies every `step`th element of `start..stop` into a new vector
    ///
    /// This follows python's slicing rules: negative bounds count from the
    /// end, bounds past either end are clamped, a missing bound means the
    /// whole way in the direction of `step`, and a negative `step` walks
    /// backwards. A range that selects nothing gives an empty vector.
    ///
    /// ```rust
    /// # use vectorish::vector;
    /// let vec = vector![0, 1, 2, 3, 4, 5];
    /// assert_eq!(vec.slice_step(None, None, 2), Ok(vector![0, 2, 4]));
    /// assert_eq!(vec.slice_step(Some(-2), None, -1), Ok(vector![4, 3, 2, 1, 0]));
    /// assert_eq!(vec.slice_step(Some(100), Some(-100), 1), Ok(vector![]));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `step` is zero
    pub fn slice_step(&self, start: Option<isize>, stop: Option<isize>, step: isize) -> Result<Self>
    where
        T: Clone,
    {
        let indices =
            normalize_slice(start, stop, step, self.len()).ok_or(Error::InvalidArgument("slice step cannot be zero"))?;
        Ok(self.select(indices))
    }

    fn select(&self, indices: slice::SliceIndices) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(indices.len());
        for slot in indices {
            vec.append(self.buf.read(slot).clone());
        }
        vec
    }

    /// Reverses the order of the elements in place
    pub fn reverse(&mut self) { self.as_mut_slice().reverse(); }

    /// Returns the index of the first element that `equals` matches with `value`
    ///
    /// ```rust
    /// # use vectorish::vector;
    /// let vec = vector!["apple", "Banana", "banana"];
    /// let index = vec.index_of("BANANA", |a, b| a.eq_ignore_ascii_case(b));
    /// assert_eq!(index, Ok(1));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if nothing matches
    pub fn index_of<U, F>(&self, value: &U, mut equals: F) -> Result<usize>
    where
        U: ?Sized,
        F: FnMut(&T, &U) -> bool,
    {
        self.iter().position(|item| equals(item, value)).ok_or(Error::NotFound)
    }

    /// Counts the elements that `equals` matches with `value`
    pub fn count<U, F>(&self, value: &U, mut equals: F) -> usize
    where
        U: ?Sized,
        F: FnMut(&T, &U) -> bool,
    {
        self.iter().filter(|item| equals(item, value)).count()
    }

    /// Returns a new vector with the elements of `self` followed by those of `other`
    pub fn concat(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(self.len() + other.len());
        vec.extend_from_slice(self.as_slice());
        vec.extend_from_slice(other.as_slice());
        vec
    }

    /// Appends clones of all of `other`'s elements
    pub fn concat_in_place(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.extend_from_slice(other.as_slice());
    }

    /// Returns the elements of `self` repeated `n` times, in order
    ///
    /// ```rust
    /// # use vectorish::{vector, Vector};
    /// let vec = vector![1, 2];
    /// assert_eq!(vec.repeat(3), Ok(vector![1, 2, 1, 2, 1, 2]));
    /// assert_eq!(vec.repeat(0), Ok(Vector::new()));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `n` is negative, or the result would be too large
    pub fn repeat<N: TryInto<usize>>(&self, n: N) -> Result<Self>
    where
        T: Clone,
    {
        let n = n
            .try_into()
            .map_err(|_| Error::InvalidArgument("repeat count must be non-negative"))?;
        if n == 0 || self.is_empty() {
            return Ok(Self::new())
        }

        let len = self
            .len()
            .checked_mul(n)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(Error::InvalidArgument("repeat count overflows the capacity"))?;

        let mut vec = Self::with_capacity(len);
        for _ in 0..n {
            vec.extend_from_slice(self.as_slice());
        }
        Ok(vec)
    }

    /// Sorts the vector in ascending order, or descending if `reverse` is set
    ///
    /// The sort is stable. With `reverse` set the stably sorted sequence is
    /// reversed as a whole.
    pub fn sort(&mut self, reverse: bool)
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp, reverse);
    }

    /// Stably sorts the vector with the comparator `compare`
    ///
    /// If `compare` panics, the vector is left unchanged.
    pub fn sort_by<F>(&mut self, mut compare: F, reverse: bool)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let order = {
            let items = self.as_slice();
            let mut order: Vec<usize> = (0..items.len()).collect();
            order.sort_by(|&a, &b| compare(&items[a], &items[b]));
            order
        };
        self.permute(order, reverse);
    }

    /// Stably sorts the vector by the key that `key` extracts
    ///
    /// `key` is called exactly once per element, before anything moves.
    ///
    /// ```rust
    /// # use vectorish::vector;
    /// let mut vec = vector![(1, "a"), (1, "b"), (0, "c")];
    /// vec.sort_by_key(|&(k, _)| k, false);
    /// assert_eq!(vec, [(0, "c"), (1, "a"), (1, "b")]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut key: F, reverse: bool)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let keys: Vec<K> = self.iter().map(|item| key(item)).collect();
        self.sort_by_keys(&keys, reverse);
    }

    /// Stably sorts the vector by a key extraction that may fail
    ///
    /// ```rust
    /// # use vectorish::vector;
    /// let mut vec = vector!["10", "9", "x"];
    /// assert!(vec.try_sort_by_key(|s| s.parse::<i32>(), false).is_err());
    /// assert_eq!(vec, ["10", "9", "x"]);
    /// ```
    ///
    /// # Errors
    ///
    /// The first error `key` returns, the vector is left unchanged
    pub fn try_sort_by_key<K, E, F>(&mut self, key: F, reverse: bool) -> core::result::Result<(), E>
    where
        K: Ord,
        F: FnMut(&T) -> core::result::Result<K, E>,
    {
        let keys = self.iter().map(key).collect::<core::result::Result<Vec<K>, E>>()?;
        self.sort_by_keys(&keys, reverse);
        Ok(())
    }

    fn sort_by_keys<K: Ord>(&mut self, keys: &[K], reverse: bool) {
        let mut order: Vec<usize> = (0..keys.len()).collect();
        order.sort_by(|&a, &b| keys[a].cmp(&keys[b]));
        self.permute(order, reverse);
    }

    /// Rebuilds the vector so that slot `i` holds the element that was in `order[i]`
    ///
    /// `order` must be a permutation of `0..len`.
    fn permute(&mut self, mut order: Vec<usize>, reverse: bool) {
        if reverse {
            order.reverse();
        }

        let len = self.len();
        debug_assert_eq!(order.len(), len);
        let mut sorted = Buffer::with_capacity(len);

        // Safety
        //
        // * `sorted` has room for `len` elements
        // * every element is moved out of `self` exactly once, and `self`
        //   forgets all of them before it is dropped
        // * nothing in here can panic
        unsafe {
            for (to, &from) in order.iter().enumerate() {
                sorted.put(to, self.buf.take(from));
            }
            self.buf.set_len_unchecked(0);
            sorted.set_len_unchecked(len);
        }

        self.buf = sorted;
    }
}

impl<T: 'static> Vector<T> {
    fn downcast<O: Any>(other: &O) -> Result<&Self> {
        (other as &dyn Any).downcast_ref::<Self>().ok_or(Error::TypeMismatch {
            expected: core::any::type_name::<Self>(),
            found: core::any::type_name::<O>(),
        })
    }

    /// [`Vector::concat`] with an operand of any type
    ///
    /// ```rust
    /// # use vectorish::{vector, Error};
    /// let vec = vector![1, 2];
    /// assert_eq!(vec.concat_any(&vector![3]), Ok(vector![1, 2, 3]));
    /// assert!(matches!(vec.concat_any(&"3"), Err(Error::TypeMismatch { .. })));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] if `other` is not a `Vector<T>`
    pub fn concat_any<O: Any>(&self, other: &O) -> Result<Self>
    where
        T: Clone,
    {
        Ok(self.concat(Self::downcast(other)?))
    }

    /// [`Vector::concat_in_place`] with an operand of any type
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] if `other` is not a `Vector<T>`, `self` is left unchanged
    pub fn concat_in_place_any<O: Any>(&mut self, other: &O) -> Result<()>
    where
        T: Clone,
    {
        self.concat_in_place(Self::downcast(other)?);
        Ok(())
    }
}
