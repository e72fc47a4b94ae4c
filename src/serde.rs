// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`BoundedList`](crate::BoundedList).
//!
//! - **Serialize**: as a sequence of the `count` live elements.
//! - **Deserialize**: from any sequence of at most `N` elements. Vacant slots
//!   are filled with `T::default()`, so `T: Default` is required.

// Crate imports
use crate::list::BoundedList;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeSeq};

impl<T: Serialize, const N: usize> Serialize for BoundedList<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let items = self.as_slice();
        let mut seq = s.serialize_seq(Some(items.len()))?;
        for item in items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ListVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for ListVisitor<T, N>
where
    T: Deserialize<'de> + Default,
{
    type Value = BoundedList<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence with at most {N} elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = BoundedList::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.add(elem)
                .map_err(|_| de::Error::custom(format_args!("too many elements (capacity {N})")))?;
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for BoundedList<T, N>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ListVisitor::<T, N>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::BoundedList;
    use alloc::string::{String, ToString};
    use serde::{Deserialize, Serialize};

    #[test]
    fn test_serializes_live_prefix_only() {
        let mut v: BoundedList<i32, 5> = BoundedList::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1,2,3]");
        v.resize(1).unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1]");
    }

    #[test]
    fn test_round_trip_json() {
        let v: BoundedList<String, 3> =
            BoundedList::try_from(&[String::from("a"), String::from("b")][..]).unwrap();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, r#"["a","b"]"#);
        let back: BoundedList<String, 3> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_empty_and_exactly_full() {
        let empty: BoundedList<u8, 2> = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());
        let full: BoundedList<u8, 2> = serde_json::from_str("[4,5]").unwrap();
        assert!(full.is_full());
        assert_eq!(full.as_slice(), &[4, 5]);
    }

    #[test]
    fn test_over_capacity_errors() {
        let err = serde_json::from_str::<BoundedList<i32, 3>>("[1,2,3,4]").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("too many elements (capacity 3)"), "msg: {msg}");
    }

    #[test]
    fn test_expecting_message() {
        let err = serde_json::from_str::<BoundedList<i32, 4>>(r#"{"not":"a list"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("a sequence with at most 4 elements"),
            "unexpected error message: {msg}"
        );
    }

    #[test]
    fn test_nested_in_derived_struct() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Frame {
            id: u8,
            samples: BoundedList<u16, 4>,
        }

        let frame = Frame {
            id: 7,
            samples: BoundedList::try_from(&[100, 200][..]).unwrap(),
        };
        let s = serde_json::to_string(&frame).unwrap();
        assert_eq!(s, r#"{"id":7,"samples":[100,200]}"#);
        let back: Frame = serde_json::from_str(&s).unwrap();
        assert_eq!(back, frame);
    }
}
