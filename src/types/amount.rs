use crate::types::{parse_number_literal, Scalar, WireValue};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Monetary value.
///
/// Decodes from a JSON number or a numeric string, the empty string being `0.0`.
/// Always encodes as a JSON string holding the decimal form (`12.5` → `"12.5"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl Scalar for Amount {
    const NAME: &'static str = "treezor.Amount";
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode_decimal(deserializer, Self::NAME).map(Self)
    }
}

/// Decimal decoding shared with [`Percentage`](crate::types::Percentage).
pub(crate) fn decode_decimal<'de, D>(deserializer: D, scalar: &'static str) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match WireValue::deserialize(deserializer, scalar)? {
        WireValue::Str(s) if s.is_empty() => Ok(0.0),
        WireValue::Str(s) => parse_number_literal(&s)
            .and_then(|n| n.as_f64())
            .ok_or_else(|| de::Error::custom(format!("{}: {:?} is not a number", scalar, s))),
        WireValue::Int(i) => Ok(i as f64),
        WireValue::UInt(u) => Ok(u as f64),
        WireValue::Float(f) => Ok(f),
        WireValue::Bool(b) => Err(de::Error::custom(format!(
            "{}: unexpected boolean {}",
            scalar, b
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(br#""12.50""# => 12.5 ; "numeric string")]
    #[test_case(br#""""# => 0.0 ; "empty string")]
    #[test_case(b"12.5" => 12.5 ; "json float")]
    #[test_case(b"100" => 100.0 ; "json integer")]
    #[test_case(br#""-0.01""# => -0.01 ; "negative string")]
    fn decode(raw: &[u8]) -> f64 {
        Amount::decode(raw).unwrap().as_f64()
    }

    #[test_case(br#""abc""# ; "non numeric string")]
    #[test_case(br#""12,50""# ; "comma decimal")]
    #[test_case(br#"" 1""# ; "leading space")]
    #[test_case(br#""1 ""# ; "trailing space")]
    #[test_case(b"true" ; "boolean")]
    #[test_case(b"null" ; "null")]
    #[test_case(b"[1]" ; "array")]
    fn decode_invalid(raw: &[u8]) {
        let err = Amount::decode(raw).unwrap_err();

        assert_eq!(err.scalar, "treezor.Amount");
        assert!(err.to_string().contains("treezor.Amount"), "{}", err);
    }

    #[test]
    fn encodes_as_string() {
        assert_eq!(Amount::new(12.5).encode().unwrap(), br#""12.5""#);
        assert_eq!(Amount::new(0.0).encode().unwrap(), br#""0""#);
        assert_eq!(Amount::new(-7.25).encode().unwrap(), br#""-7.25""#);
    }

    #[test]
    fn round_trip() {
        let cases: [&[u8]; 5] = [br#""12.50""#, br#""""#, b"3", br#""0.1""#, b"1e-7"];

        for raw in cases {
            let decoded = Amount::decode(raw).unwrap();
            let encoded = decoded.encode().unwrap();

            assert_eq!(Amount::decode(&encoded).unwrap(), decoded);
        }
    }
}
