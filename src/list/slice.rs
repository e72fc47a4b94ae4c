// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::BoundedList;

impl<T, const N: usize> BoundedList<T, N> {
    /// Returns the live prefix as a shared slice (`&self.buf[..count]`).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.live_len()]
    }

    /// Returns the live prefix as a mutable slice (`&mut self.buf[..count]`).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.live_len();
        &mut self.buf[..len]
    }
}
