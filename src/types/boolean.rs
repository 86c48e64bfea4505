use crate::types::{parse_number_literal, Scalar, WireValue};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Logical value.
///
/// Decodes from `true`/`false`, any JSON integer or a string holding one
/// (`"0"`, `"1"`): non-zero is `true`. Always encodes as the bare number `0` or `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Boolean(bool);

impl Boolean {
    pub fn new(value: bool) -> Self {
        Self(value)
    }

    pub fn as_bool(&self) -> bool {
        self.0
    }
}

impl Scalar for Boolean {
    const NAME: &'static str = "treezor.Boolean";
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Boolean> for bool {
    fn from(value: Boolean) -> Self {
        value.0
    }
}

impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Boolean {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(self.0))
    }
}

impl<'de> Deserialize<'de> for Boolean {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = match WireValue::deserialize(deserializer, Self::NAME)? {
            WireValue::Bool(b) => b,
            WireValue::Int(i) => i != 0,
            WireValue::UInt(u) => u != 0,
            WireValue::Str(s) => parse_number_literal(&s)
                .and_then(|n| {
                    n.as_i64()
                        .map(|i| i != 0)
                        .or_else(|| n.as_u64().map(|u| u != 0))
                })
                .ok_or_else(|| {
                    de::Error::custom(format!("{}: {:?} is not a numeric boolean", Self::NAME, s))
                })?,
            WireValue::Float(f) => {
                return Err(de::Error::custom(format!(
                    "{}: {} is not a numeric boolean",
                    Self::NAME,
                    f
                )))
            }
        };

        Ok(Self(value))
    }
}
