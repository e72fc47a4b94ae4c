// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    list::{BoundedList, Index},
    trace::refused,
};

// Core imports
use core::cmp::Ordering;

impl<T: Default, const N: usize> BoundedList<T, N> {
    /// Resizes to `new_size` live elements.
    ///
    /// Growing appends `T::default()` values; shrinking drops the tail.
    /// Returns [`Error::Full`] if `new_size > N`, leaving the list unchanged.
    #[inline]
    pub fn resize(&mut self, new_size: Index) -> Result<(), Error> {
        if new_size > Self::CAPACITY {
            return Err(refused("resize", Error::Full, self.len, Self::CAPACITY));
        }
        let len = self.live_len();
        let new_len = usize::from(new_size);
        match new_len.cmp(&len) {
            Ordering::Equal => {}
            Ordering::Less => self.buf[new_len..len].fill_with(T::default),
            Ordering::Greater => self.buf[len..new_len].fill_with(T::default),
        }
        self.len = new_size;
        Ok(())
    }
}
