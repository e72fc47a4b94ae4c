// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList};

impl<T, const N: usize> From<[T; N]> for BoundedList<T, N> {
    /// Wraps a full array; the resulting list has `count == N`.
    fn from(buf: [T; N]) -> Self {
        Self {
            buf,
            len: Self::CAPACITY,
        }
    }
}

impl<T: Clone + Default, const N: usize> TryFrom<&[T]> for BoundedList<T, N> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::default();
        for item in src {
            v.add(item.clone())?;
        }
        Ok(v)
    }
}
