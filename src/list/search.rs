// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::{BoundedList, Index};

impl<T: PartialEq, const N: usize> BoundedList<T, N> {
    /// Returns the lowest index whose element equals `item`, or `None`.
    ///
    /// Scans the live prefix left to right; vacant slots are never compared.
    #[inline]
    pub fn index_of(&self, item: &T) -> Option<Index> {
        self.as_slice()
            .iter()
            .position(|x| x == item)
            .and_then(|i| Index::try_from(i).ok())
    }

    /// Returns `true` if any live element equals `item`.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}
