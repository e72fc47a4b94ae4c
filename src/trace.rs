// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostics for refused mutations.
//!
//! With the `log` feature enabled, every mutation that fails emits one
//! `trace`-level record under the `bounded_list` target. Without it, this
//! module compiles down to returning the error unchanged.

// Crate imports
use crate::error::Error;

/// `log` target used for all records emitted by this crate.
#[cfg(feature = "log")]
pub(crate) const TARGET: &str = "bounded_list";

/// Records that `op` was refused with `err` and hands `err` back to the caller.
#[inline]
pub(crate) fn refused(op: &'static str, err: Error, count: u8, capacity: u8) -> Error {
    #[cfg(feature = "log")]
    log::trace!(target: TARGET, "{op} refused at {count}/{capacity}: {err}");
    #[cfg(not(feature = "log"))]
    let _ = (op, count, capacity);
    err
}
