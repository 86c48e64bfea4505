use crate::types::Scalar;
use serde::{
    de::{self, MapAccess, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::{collections::HashMap, fmt};

/// Free-form string map attached to some resources.
///
/// The upstream encodes an empty map as `[]` as often as `{}`; both decode to
/// an empty map. Always encodes as a JSON object.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Metadata(HashMap<String, String>);

impl Metadata {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self(entries)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }
}

impl Scalar for Metadata {
    const NAME: &'static str = "treezor.Metadata";
}

impl From<HashMap<String, String>> for Metadata {
    fn from(entries: HashMap<String, String>) -> Self {
        Self(entries)
    }
}

impl<'de> Deserialize<'de> for Metadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MetadataVisitor)
    }
}

struct MetadataVisitor;

impl<'de> Visitor<'de> for MetadataVisitor {
    type Value = Metadata;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a {} object or an empty array", Metadata::NAME)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = HashMap::with_capacity(map.size_hint().unwrap_or_default());
        while let Some((k, v)) = map.next_entry::<String, String>()? {
            entries.insert(k, v);
        }

        Ok(Metadata(entries))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::custom(format!(
                "{}: expected an empty array",
                Metadata::NAME
            )));
        }

        Ok(Metadata::default())
    }
}
