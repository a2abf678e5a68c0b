//! Serde support for lane vectors (feature `serialize`)
//!
//! A vector is written as a tuple of its `S` lanes, so JSON shows a plain
//! array. Deserialisation accepts exactly `S` lanes.

use crate::align::AlignFor;
use crate::lane::LaneVector;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<T, const S: usize, const A: usize> Serialize for LaneVector<T, S, A>
where
    T: AlignFor<A> + Serialize,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut tuple = serializer.serialize_tuple(S)?;
        for lane in &self.vec {
            tuple.serialize_element(lane)?;
        }
        tuple.end()
    }
}

struct LaneVisitor<T, const S: usize, const A: usize> {
    _marker: PhantomData<T>,
}

impl<'de, T, const S: usize, const A: usize> Visitor<'de> for LaneVisitor<T, S, A>
where
    T: AlignFor<A> + Deserialize<'de>,
{
    type Value = LaneVector<T, S, A>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {} lanes", S)
    }

    fn visit_seq<V: SeqAccess<'de>>(self, mut seq: V) -> Result<Self::Value, V::Error> {
        let mut v = LaneVector::<T, S, A>::zeroed();
        for i in 0..S {
            v.vec[i] = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(S + 1, &self));
        }
        Ok(v)
    }
}

impl<'de, T, const S: usize, const A: usize> Deserialize<'de> for LaneVector<T, S, A>
where
    T: AlignFor<A> + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(
            S,
            LaneVisitor::<T, S, A> {
                _marker: PhantomData,
            },
        )
    }
}
