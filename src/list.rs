// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `BoundedList` type and its inherent API.
//!
//! `BoundedList<T, N>` stores up to `N` elements inline and tracks an
//! occupied-count. Live elements always form the prefix `[0, count)` of the
//! backing array. The remaining slots hold `T::default()`.
//!
//! No heap allocations are performed.

mod add;
mod clear;
mod default;
mod from;
mod insert;
mod new;
mod pop;
mod remove;
mod resize;
mod search;
mod slice;

// Crate imports
use crate::error::Error;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// Index and count type of the public API.
///
/// Capacities never exceed [`MAX_CAPACITY`], so every valid index also fits
/// a non-negative `i8`.
pub type Index = u8;

/// Largest capacity a [`BoundedList`] may be instantiated with.
pub const MAX_CAPACITY: Index = 127;

/// A fixed-capacity, inline-storage list.
///
/// `BoundedList<T, N>` owns exactly `N` slots of `T` and an occupied-count
/// `count ∈ 0..=N`:
///
/// - capacity is known at compile time and must lie in `1..=127`;
/// - the buffer is stored inline (typically on the stack);
/// - elements occupy the contiguous prefix `[0, count)`;
/// - vacant slots hold `T::default()`, so a value is dropped as soon as it
///   leaves the list rather than when the list itself goes away.
///
/// # Capacity bound
///
/// The `1..=127` range is checked at compile time when a constructor is
/// instantiated:
///
/// ```compile_fail
/// use bounded_list::BoundedList;
///
/// let v: BoundedList<u8, 0> = BoundedList::new();
/// ```
///
/// # Failure model
///
/// Mutations that can fail return [`Result`] and leave the list unchanged on
/// error:
///
/// - [`add`](BoundedList::add), [`insert`](BoundedList::insert) and
///   [`resize`](BoundedList::resize) return [`Error::Full`];
/// - [`remove`](BoundedList::remove) returns [`Error::NotFound`];
/// - [`remove_at`](BoundedList::remove_at), [`insert`](BoundedList::insert)
///   and [`try_get`](BoundedList::try_get) return [`Error::OutOfBounds`].
///
/// Only the `list[i]` operator panics on a bad index, exactly like a slice.
/// Use [`get`](BoundedList::get) when the index is not trusted.
///
/// # Element bounds
///
/// - Construction and every operation that vacates or creates slots require
///   `T: Default`.
/// - Search ([`index_of`](BoundedList::index_of),
///   [`contains`](BoundedList::contains), [`remove`](BoundedList::remove))
///   requires `T: PartialEq`.
/// - Elements are moved in and out, never cloned.
///
/// # Examples
///
/// ```rust
/// use bounded_list::{BoundedList, Error};
///
/// let mut v: BoundedList<u8, 3> = BoundedList::new();
/// v.add(1).unwrap();
/// v.add(3).unwrap();
/// v.insert(1, 2).unwrap();
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// assert_eq!(v.add(4), Err(Error::Full));
///
/// assert_eq!(v.index_of(&3), Some(2));
/// assert_eq!(v.remove(&2), Ok(2));
/// assert_eq!(v.as_slice(), &[1, 3]);
/// ```
pub struct BoundedList<T, const N: usize> {
    pub(crate) buf: [T; N],
    pub(crate) len: Index,
}

impl<T, const N: usize> BoundedList<T, N> {
    pub(crate) const CAPACITY_CHECK: () = assert!(
        N >= 1 && N <= MAX_CAPACITY as usize,
        "BoundedList capacity must be within 1..=127"
    );

    /// The fixed capacity of this list.
    #[allow(clippy::cast_possible_truncation)]
    pub const CAPACITY: Index = {
        let () = Self::CAPACITY_CHECK;
        N as Index
    };

    /// Returns the capacity of this list (always `N`).
    #[inline]
    pub const fn capacity(&self) -> Index {
        Self::CAPACITY
    }

    /// Returns the number of live elements (`0..=N`).
    #[inline]
    pub const fn count(&self) -> Index {
        self.len
    }

    /// Returns `true` if `count == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `count == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == Self::CAPACITY
    }

    /// Returns `N - count`, the number of additional elements that fit.
    #[inline]
    pub const fn spare_capacity(&self) -> Index {
        Self::CAPACITY - self.len
    }

    /// Returns the index of the first slot, always `0`.
    #[inline]
    pub const fn first_index(&self) -> Index {
        0
    }

    /// Returns the index of the last live element, or `0` when empty.
    ///
    /// An empty list and a one-element list both report `0`, which lets a
    /// reverse walk over `first_index()..=last_index()` be written without a
    /// special case. Check [`is_empty`](Self::is_empty) before trusting the
    /// result.
    #[inline]
    pub const fn last_index(&self) -> Index {
        if self.len == 0 { 0 } else { self.len - 1 }
    }

    /// Returns `Some(&T)` if `index < count`, otherwise `None`.
    #[inline]
    pub fn get(&self, index: Index) -> Option<&T> {
        self.as_slice().get(usize::from(index))
    }

    /// Returns `Some(&mut T)` if `index < count`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, index: Index) -> Option<&mut T> {
        self.as_mut_slice().get_mut(usize::from(index))
    }

    /// Fallible variant of [`get`](Self::get), returning [`Error::OutOfBounds`]
    /// when `index >= count`.
    #[inline]
    pub fn try_get(&self, index: Index) -> Result<&T, Error> {
        self.get(index).ok_or(Error::OutOfBounds)
    }

    /// Fallible variant of [`get_mut`](Self::get_mut), returning
    /// [`Error::OutOfBounds`] when `index >= count`.
    #[inline]
    pub fn try_get_mut(&mut self, index: Index) -> Result<&mut T, Error> {
        self.get_mut(index).ok_or(Error::OutOfBounds)
    }

    #[inline]
    pub(crate) fn live_len(&self) -> usize {
        usize::from(self.len)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BoundedList<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedList")
            .field("count", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for BoundedList<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, const N: usize> Eq for BoundedList<T, N> {}
impl<T: Ord, const N: usize> Ord for BoundedList<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for BoundedList<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for BoundedList<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Clone, const N: usize> Clone for BoundedList<T, N> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            len: self.len,
        }
    }
}
impl<T: Copy, const N: usize> Copy for BoundedList<T, N> {}

impl<T, const N: usize> Deref for BoundedList<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for BoundedList<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for BoundedList<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for BoundedList<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for BoundedList<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for BoundedList<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
