// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    list::{BoundedList, Index},
    trace::refused,
};

// Core imports
use core::mem;

impl<T: Default, const N: usize> BoundedList<T, N> {
    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= count`.
    #[inline]
    pub fn remove_at(&mut self, index: Index) -> Result<T, Error> {
        if index >= self.len {
            return Err(refused("remove_at", Error::OutOfBounds, self.len, Self::CAPACITY));
        }
        let last = self.live_len() - 1;

        // Shift left: [index+1..count) -> [index..count-1), removed value lands at `last`.
        self.buf[usize::from(index)..=last].rotate_left(1);

        self.len -= 1;
        Ok(mem::take(&mut self.buf[last]))
    }

    /// Removes and returns the first element equal to `item`.
    ///
    /// Returns [`Error::NotFound`] if no live element matches.
    #[inline]
    pub fn remove(&mut self, item: &T) -> Result<T, Error>
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => self.remove_at(index),
            None => Err(refused("remove", Error::NotFound, self.len, Self::CAPACITY)),
        }
    }
}
