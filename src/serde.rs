//! `serde` support for [`CircularList`](crate::CircularList).
//!
//! - **Serialize**: as a sequence of the live elements, oldest first.
//! - **Deserialize**: from any sequence. The elements are pushed in order,
//!   so the list comes back full with a capacity equal to the element count
//!   and the last element as `front()`, the same as `CircularList::from`.
//!
//! The capacity is not part of the serialized form, so the storage allocated
//! while deserializing never exceeds what the input actually holds.

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use crate::CircularList;

impl<T: Serialize> Serialize for CircularList<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for element in self.iter().rev() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct ListVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for ListVisitor<T> {
    type Value = CircularList<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of elements, oldest first")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut elements = Vec::new();
        while let Some(element) = a.next_element::<T>()? {
            elements.push(element);
        }
        Ok(CircularList::from(elements))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CircularList<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ListVisitor(PhantomData))
    }
}
