// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::BoundedList;

impl<T: Default, const N: usize> BoundedList<T, N> {
    /// Constructs an empty list with every slot initialized to `Default::default()`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}
