//! Lenient scalar types.
//!
//! The Treezor API is inconsistent in how it encodes scalars: amounts come as
//! numbers or numeric strings, booleans as `true`/`false` or `0`/`1`, missing
//! dates as `"0000-00-00"`, and so on. Each type in this module accepts every
//! representation the upstream is known to send and serializes back to the
//! exact textual convention the upstream expects.
//!
//! All types satisfy `decode(encode(v)) == v` for any value produced by `decode`.

mod amount;
mod boolean;
mod date;
mod identifier;
mod integer;
mod kyc;
mod metadata;
mod percentage;
mod timestamp;

pub use amount::Amount;
pub use boolean::Boolean;
pub use date::Date;
pub use identifier::Identifier;
pub use integer::Integer;
pub use kyc::{KycLevel, KycReview};
pub use metadata::Metadata;
pub use percentage::Percentage;
pub use timestamp::{
    LondonZone, ParisZone, Timestamp, TimestampLondon, TimestampParis, UtcZone, Zone,
    ZonedTimestamp,
};

use serde::{
    de::{self, DeserializeOwned, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::fmt;

/// Error returned when a scalar cannot be decoded from, or encoded to, its wire form.
#[derive(thiserror::Error, Debug)]
#[error("{source}")]
pub struct ScalarError {
    /// Name of the scalar type that failed, e.g. `treezor.Amount`.
    pub scalar: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// A scalar with a lenient JSON wire representation.
pub trait Scalar: Serialize + DeserializeOwned {
    /// Name used to tag decode failures.
    const NAME: &'static str;

    /// Decodes a value from its raw JSON wire bytes.
    fn decode(raw: &[u8]) -> Result<Self, ScalarError> {
        serde_json::from_slice(raw).map_err(|source| ScalarError {
            scalar: Self::NAME,
            source,
        })
    }

    /// Encodes this value into the raw JSON wire bytes expected by the upstream.
    fn encode(&self) -> Result<Vec<u8>, ScalarError> {
        serde_json::to_vec(self).map_err(|source| ScalarError {
            scalar: Self::NAME,
            source,
        })
    }
}

/// Any JSON primitive, as it appeared on the wire.
///
/// Each scalar first decodes into this tagged union and then matches on it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum WireValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl WireValue {
    /// Deserializes a primitive, naming `scalar` in the error if the value is
    /// an object, an array or `null`.
    pub(crate) fn deserialize<'de, D>(
        deserializer: D,
        scalar: &'static str,
    ) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(WireValueVisitor { scalar })
    }
}

struct WireValueVisitor {
    scalar: &'static str,
}

impl<'de> Visitor<'de> for WireValueVisitor {
    type Value = WireValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a {} string, number or boolean", self.scalar)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(WireValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(WireValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(WireValue::UInt(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(WireValue::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(WireValue::Str(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(WireValue::Str(v))
    }
}

/// Parses a string holding a JSON numeric literal.
///
/// Returns `None` for anything `serde_json` would not accept as a number,
/// including `NaN`, `inf`, literals out of the `f64` range and literals padded
/// with whitespace.
pub(crate) fn parse_number_literal(s: &str) -> Option<serde_json::Number> {
    if s.trim() != s {
        return None;
    }

    let mut de = serde_json::Deserializer::from_str(s);
    let number = serde_json::Number::deserialize(&mut de).ok()?;
    de.end().ok()?;

    Some(number)
}

/// Visitor accepting only JSON strings, shared by the date and timestamp codecs.
pub(crate) struct StrVisitor {
    pub(crate) scalar: &'static str,
}

impl<'de> Visitor<'de> for StrVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a {} string", self.scalar)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(v)
    }
}
