// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    list::{BoundedList, Index},
    trace::refused,
};

impl<T, const N: usize> BoundedList<T, N> {
    /// Inserts `item` at `index`, shifting `[index, count)` one slot to the right.
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > count`.
    /// - Returns [`Error::Full`] if at capacity.
    ///
    /// `insert(count, item)` behaves like [`add`](Self::add).
    #[inline]
    pub fn insert(&mut self, index: Index, item: T) -> Result<(), Error> {
        if index > self.len {
            return Err(refused("insert", Error::OutOfBounds, self.len, Self::CAPACITY));
        }
        if self.is_full() {
            return Err(refused("insert", Error::Full, self.len, Self::CAPACITY));
        }
        let len = self.live_len();

        // The first vacant slot takes the item, then rotates down into place.
        self.buf[len] = item;
        self.buf[usize::from(index)..=len].rotate_right(1);

        self.len += 1;
        Ok(())
    }
}
