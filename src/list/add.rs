// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList, trace::refused};

impl<T, const N: usize> BoundedList<T, N> {
    /// Appends `item` at index `count`.
    ///
    /// Returns [`Error::Full`] when at capacity; `item` is dropped and the
    /// list is left unchanged.
    #[inline]
    pub fn add(&mut self, item: T) -> Result<(), Error> {
        if self.is_full() {
            return Err(refused("add", Error::Full, self.len, Self::CAPACITY));
        }
        let len = self.live_len();
        self.buf[len] = item;
        self.len += 1;
        Ok(())
    }
}
