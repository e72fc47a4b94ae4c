// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::{BoundedList, Index};

impl<T: Default, const N: usize> BoundedList<T, N> {
    /// Drops every live element and sets `count = 0`.
    #[inline]
    pub fn clear(&mut self) {
        let len = self.live_len();
        self.buf[..len].fill_with(T::default);
        self.len = 0;
    }

    /// Shrinks to `count` if `count < self.count()`; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, count: Index) {
        if count < self.len {
            let len = self.live_len();
            self.buf[usize::from(count)..len].fill_with(T::default);
            self.len = count;
        }
    }
}
