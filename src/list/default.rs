// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::BoundedList;

impl<T: Default, const N: usize> Default for BoundedList<T, N> {
    fn default() -> Self {
        let () = Self::CAPACITY_CHECK;
        Self {
            buf: core::array::from_fn(|_| T::default()),
            len: 0,
        }
    }
}
