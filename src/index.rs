// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operator indexing for [`BoundedList`](crate::BoundedList).
//!
//! `list[i]` and `list[a..b]` index the live prefix as a slice, so a position
//! at or past `count` panics even though the backing slot exists. Use
//! [`BoundedList::get`](crate::BoundedList::get) or
//! [`BoundedList::try_get`](crate::BoundedList::try_get) for checked access.

// Crate imports
use crate::list::BoundedList;

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T, const N: usize> Index<usize> for BoundedList<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.as_slice()[i]
    }
}
impl<T, const N: usize> IndexMut<usize> for BoundedList<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.as_mut_slice()[i]
    }
}

macro_rules! impl_range_index {
    ($($range:ty),* $(,)?) => {$(
        impl<T, const N: usize> Index<$range> for BoundedList<T, N> {
            type Output = [T];
            fn index(&self, r: $range) -> &[T] {
                &self.as_slice()[r]
            }
        }
        impl<T, const N: usize> IndexMut<$range> for BoundedList<T, N> {
            fn index_mut(&mut self, r: $range) -> &mut [T] {
                &mut self.as_mut_slice()[r]
            }
        }
    )*};
}

impl_range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeFull,
    RangeInclusive<usize>,
    RangeTo<usize>,
    RangeToInclusive<usize>,
);

#[cfg(test)]
mod tests {
    // Imports
    use super::BoundedList;
    use alloc::string::String;

    fn sample() -> BoundedList<i32, 6> {
        BoundedList::try_from(&[0, 1, 2, 3, 4][..]).unwrap()
    }

    #[test]
    fn test_single_element_read_and_write() {
        let mut v = sample();
        assert_eq!(v[0], 0);
        assert_eq!(v[4], 4);
        v[1] = 10;
        v[4] = 40;
        assert_eq!(v.as_slice(), &[0, 10, 2, 3, 40]);
    }

    #[test]
    fn test_range_forms() {
        let mut v = sample();
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[2..], &[2, 3, 4]);
        assert_eq!(&v[..3], &[0, 1, 2]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[1..=3], &[1, 2, 3]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);
        assert_eq!(&v[5..], &[] as &[i32]);

        v[3..].copy_from_slice(&[30, 40]);
        assert_eq!(v.as_slice(), &[0, 1, 2, 30, 40]);
    }

    #[test]
    fn test_index_mut_on_non_copy_elements() {
        let mut v: BoundedList<String, 2> = BoundedList::new();
        v.add(String::from("ab")).unwrap();
        v[0].push('c');
        assert_eq!(v[0], "abc");
    }

    #[test]
    #[should_panic]
    fn test_vacant_slot_panics() {
        // Capacity 6, count 5: slot 5 exists but is not live.
        let v = sample();
        let _ = v[5];
    }

    #[test]
    #[should_panic]
    fn test_empty_list_panics() {
        let v: BoundedList<i32, 2> = BoundedList::new();
        let _ = v[0];
    }

    #[test]
    #[should_panic]
    fn test_range_past_count_panics() {
        let mut v = sample();
        let _ = &mut v[..=5];
    }

    #[test]
    #[should_panic]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_inverted_range_panics() {
        let v = sample();
        let _ = &v[3..1];
    }
}
