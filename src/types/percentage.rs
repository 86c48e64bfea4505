use crate::types::{amount::decode_decimal, Scalar};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Decimal ratio, e.g. the share held by an effective beneficiary.
///
/// Uses the same lenient decoding and string encoding as [`Amount`](crate::types::Amount).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl Scalar for Percentage {
    const NAME: &'static str = "treezor.Percentage";
}

impl From<f64> for Percentage {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode_decimal(deserializer, Self::NAME).map(Self)
    }
}
