use crate::types::{Scalar, WireValue};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque resource key, e.g. a `userId` or a `walletId`.
///
/// The upstream sends most keys as JSON numbers and some as strings; both are
/// normalized to their textual form. Always encodes as a JSON string so that
/// large keys never lose precision.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Scalar for Identifier {
    const NAME: &'static str = "treezor.Identifier";
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Identifier {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for Identifier {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match WireValue::deserialize(deserializer, Self::NAME)? {
            WireValue::Str(s) => Ok(Self(s)),
            WireValue::Int(i) => Ok(Self(i.to_string())),
            WireValue::UInt(u) => Ok(Self(u.to_string())),
            WireValue::Float(f) => Err(de::Error::custom(format!(
                "{}: {} is not a whole number",
                Self::NAME,
                f
            ))),
            WireValue::Bool(b) => Err(de::Error::custom(format!(
                "{}: unexpected boolean {}",
                Self::NAME,
                b
            ))),
        }
    }
}
