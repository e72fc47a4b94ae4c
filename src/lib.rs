// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `bounded-list`
//!
//! A `no_std`, fixed-capacity list with inline storage and **no `unsafe`**.
//!
//! The core type, [`BoundedList<T, N>`], owns exactly `N` slots of `T`
//! (`1 <= N <= 127`) and tracks an occupied-count `count ∈ 0..=N`. Live
//! elements always form the contiguous prefix `[0, count)`. Nothing is ever
//! allocated on the heap and the capacity never changes.
//!
//! ## When to use this crate
//!
//! - You are in a `no_std`, embedded or real-time environment.
//! - You know the maximum number of elements at compile time and it is small.
//! - You want every capacity failure to be an explicit, recoverable `Result`.
//!
//! It may not be the best fit if you need more than 127 elements, growth, or
//! iterator adapters beyond what the slice view (`Deref<Target = [T]>`) gives.
//!
//! ## Semantics
//!
//! - Capacity is fixed at compile time (`BoundedList::<T, N>::CAPACITY`) and
//!   checked to lie in `1..=127` when a constructor is instantiated.
//! - Indices and counts are [`Index`] (`u8`). Search results are
//!   `Option<Index>`, `None` meaning not found.
//! - Mutations that can fail never panic and never partially apply:
//!   - [`Error::Full`]: [`add`](BoundedList::add), [`insert`](BoundedList::insert),
//!     [`resize`](BoundedList::resize) past capacity;
//!   - [`Error::NotFound`]: [`remove`](BoundedList::remove) of an absent item;
//!   - [`Error::OutOfBounds`]: [`remove_at`](BoundedList::remove_at),
//!     [`insert`](BoundedList::insert) or [`try_get`](BoundedList::try_get)
//!     with an index outside the live prefix.
//! - `list[i]` panics on a bad index, exactly like a slice.
//! - Vacant slots hold `T::default()`. A value is dropped as soon as it leaves
//!   the list (remove, shrink, clear), not when the list is dropped.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` as a sequence of at most `N`
//!   elements (`T: Default` for deserialization).
//! - `log`: every refused mutation emits a `trace` record under the
//!   `bounded_list` target through the `log` facade.
//!
//! ## Example
//!
//! ```rust
//! use bounded_list::{BoundedList, Error};
//!
//! let mut v: BoundedList<u8, 4> = BoundedList::new();
//! v.add(1).unwrap();
//! v.add(2).unwrap();
//! v.insert(0, 0).unwrap();
//! assert_eq!(v.as_slice(), &[0, 1, 2]);
//!
//! v.resize(4).unwrap();
//! assert_eq!(v.as_slice(), &[0, 1, 2, 0]);
//! assert_eq!(v.add(9), Err(Error::Full));
//!
//! assert_eq!(v.remove_at(1), Ok(1));
//! assert_eq!(v.remove_at(7), Err(Error::OutOfBounds));
//! assert_eq!(v.last_index(), 2);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod index;
mod list;
#[cfg(feature = "serde")]
mod serde;
mod trace;

// Public exports (crate API surface)
pub use error::Error;
pub use list::{BoundedList, Index, MAX_CAPACITY};
