use crate::{
    common::{DATE_FORMAT, DATE_SENTINEL},
    types::{Scalar, StrVisitor},
};
use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Calendar date without a time of day, on the wire as `"YYYY-MM-DD"`.
///
/// The sentinel `"0000-00-00"` stands for "no date": it decodes to an absent
/// date and an absent date encodes back to the sentinel.
///
/// Equality only looks at the date itself, the original payload is kept for
/// diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Date {
    date: Option<NaiveDate>,
    original_payload: Option<String>,
}

impl Date {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            original_payload: None,
        }
    }

    /// The "no date" value, encoded as `"0000-00-00"`.
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn is_absent(&self) -> bool {
        self.date.is_none()
    }

    /// The string this value was decoded from, if any.
    pub fn original_payload(&self) -> Option<&str> {
        self.original_payload.as_deref()
    }

    fn parse(s: String) -> Result<Self, String> {
        if s == DATE_SENTINEL {
            return Ok(Self {
                date: None,
                original_payload: Some(s),
            });
        }

        // chrono accepts unpadded fields, the wire format does not
        if s.len() != DATE_SENTINEL.len() {
            return Err(format!(
                "{}: cannot parse {:?} as YYYY-MM-DD",
                Self::NAME,
                s
            ));
        }

        let date = NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(|e| {
            format!("{}: cannot parse {:?} as YYYY-MM-DD: {}", Self::NAME, s, e)
        })?;

        Ok(Self {
            date: Some(date),
            original_payload: Some(s),
        })
    }
}

impl Scalar for Date {
    const NAME: &'static str = "treezor.Date";
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for Date {}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            None => f.write_str(DATE_SENTINEL),
        }
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = deserializer.deserialize_str(StrVisitor { scalar: Self::NAME })?;

        Self::parse(s).map_err(de::Error::custom)
    }
}
