// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `BoundedList`.
//!
//! Every fallible operation reports one of these and leaves the list untouched.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`BoundedList`](crate::BoundedList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity (`N`).
    Full,
    /// The item passed to [`BoundedList::remove`](crate::BoundedList::remove) is not in the list.
    NotFound,
    /// An index was outside the live prefix `[0, count)` (or `[0, count]` for insertion).
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::NotFound => f.write_str("item not found"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfBounds);
        assert!(s.contains("out of bounds"));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::Full.to_string(), "capacity exceeded");
        assert_eq!(Error::NotFound.to_string(), "item not found");
        assert_eq!(Error::OutOfBounds.to_string(), "index out of bounds");
    }
}
