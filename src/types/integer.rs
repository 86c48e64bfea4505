use crate::types::{parse_number_literal, Scalar, WireValue};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Whole number that may arrive as a JSON number, a numeric string or `""` (zero).
///
/// Encodes as a bare JSON number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(i64);

impl Integer {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Scalar for Integer {
    const NAME: &'static str = "treezor.Integer";
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Integer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Integer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode_whole(deserializer, Self::NAME).map(Self)
    }
}

/// Whole number decoding shared with the KYC level and review codes.
pub(crate) fn decode_whole<'de, D>(deserializer: D, scalar: &'static str) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match WireValue::deserialize(deserializer, scalar)? {
        WireValue::Str(s) if s.is_empty() => Ok(0),
        WireValue::Str(s) => parse_number_literal(&s)
            .and_then(|n| n.as_i64())
            .ok_or_else(|| de::Error::custom(format!("{}: {:?} is not an integer", scalar, s))),
        WireValue::Int(i) => Ok(i),
        WireValue::UInt(u) => i64::try_from(u).map_err(|_| {
            de::Error::custom(format!("{}: {} overflows a 64-bit integer", scalar, u))
        }),
        WireValue::Float(f) => Err(de::Error::custom(format!(
            "{}: {} is not an integer",
            scalar, f
        ))),
        WireValue::Bool(b) => Err(de::Error::custom(format!(
            "{}: unexpected boolean {}",
            scalar, b
        ))),
    }
}
