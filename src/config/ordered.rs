//! Order-preserving serde support for string-keyed maps.
//!
//! Configurations are written as JSON objects, but state and event order is
//! part of the contract (`states()` reports declared order). Entries are
//! therefore collected into a `Vec` in document order, and duplicate keys are
//! rejected instead of silently overwritten.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

/// Serialize `(key, value)` pairs as a map, in vector order.
#[allow(clippy::ptr_arg)]
pub(crate) fn serialize<K, V, S>(entries: &Vec<(K, V)>, serializer: S) -> Result<S::Ok, S::Error>
where
    K: Serialize,
    V: Serialize,
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

/// Deserialize a map into `(key, value)` pairs, in document order.
pub(crate) fn deserialize<'de, K, V, D>(deserializer: D) -> Result<Vec<(K, V)>, D::Error>
where
    K: Deserialize<'de> + AsRef<str>,
    V: Deserialize<'de>,
    D: Deserializer<'de>,
{
    struct OrderedVisitor<K, V>(PhantomData<(K, V)>);

    impl<'de, K, V> Visitor<'de> for OrderedVisitor<K, V>
    where
        K: Deserialize<'de> + AsRef<str>,
        V: Deserialize<'de>,
    {
        type Value = Vec<(K, V)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map with unique string keys")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            let mut seen = HashSet::new();
            while let Some((key, value)) = access.next_entry::<K, V>()? {
                if !seen.insert(key.as_ref().to_string()) {
                    return Err(de::Error::custom(format!(
                        "duplicate key '{}'",
                        key.as_ref()
                    )));
                }
                entries.push((key, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedVisitor(PhantomData))
}
