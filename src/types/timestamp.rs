use crate::{
    common::{TIMESTAMP_FORMAT, TIMESTAMP_SENTINEL},
    types::{Scalar, StrVisitor},
};
use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, marker::PhantomData};

/// Fixed time zone a [`ZonedTimestamp`] is bound to.
pub trait Zone {
    /// Scalar name used to tag decode failures.
    const NAME: &'static str;

    fn tz() -> Tz;
}

/// Binds a timestamp to UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UtcZone;

impl Zone for UtcZone {
    const NAME: &'static str = "treezor.Timestamp";

    fn tz() -> Tz {
        Tz::UTC
    }
}

/// Binds a timestamp to `Europe/Paris`, the zone of most Treezor dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParisZone;

impl Zone for ParisZone {
    const NAME: &'static str = "treezor.TimestampParis";

    fn tz() -> Tz {
        chrono_tz::Europe::Paris
    }
}

/// Binds a timestamp to `Europe/London`, used by card processing dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LondonZone;

impl Zone for LondonZone {
    const NAME: &'static str = "treezor.TimestampLondon";

    fn tz() -> Tz {
        chrono_tz::Europe::London
    }
}

/// Timestamp in UTC.
pub type Timestamp = ZonedTimestamp<UtcZone>;
/// Timestamp in `Europe/Paris`.
pub type TimestampParis = ZonedTimestamp<ParisZone>;
/// Timestamp in `Europe/London`.
pub type TimestampLondon = ZonedTimestamp<LondonZone>;

/// Date and time on the wire as `"YYYY-MM-DD HH:MM:SS"`, a naive local time in zone `Z`.
///
/// Decoding interprets the local time in `Z` and stores the instant; encoding
/// converts the instant back into `Z` before formatting. The output therefore
/// never depends on the local time zone of the host.
///
/// `"0000-00-00 00:00:00"` and `""` decode to an absent timestamp, which encodes
/// back to `"0000-00-00 00:00:00"`.
///
/// # Negative years
///
/// The upstream occasionally sends corrupted timestamps with a negative year
/// (`"-0001-11-30 00:00:00"`). Those decode to an absent timestamp instead of
/// failing, with a warning logged. This hides genuinely malformed data: check
/// [`original_payload`](ZonedTimestamp::original_payload) when an absent value
/// is unexpected.
#[derive(Debug, Clone)]
pub struct ZonedTimestamp<Z> {
    instant: Option<DateTime<Utc>>,
    original_payload: Option<String>,
    zone: PhantomData<Z>,
}

impl<Z: Zone> ZonedTimestamp<Z> {
    /// Builds a timestamp for the given instant, truncated to the second.
    ///
    /// An instant falling in the second pass of a repeated wall clock hour
    /// (daylight saving fall-back in `Z`) is moved to the first pass, the
    /// instant its encoded form decodes to.
    pub fn new<T: TimeZone>(time: DateTime<T>) -> Self {
        let instant = time.with_timezone(&Utc);
        let instant = instant.with_nanosecond(0).unwrap_or(instant);

        let local = instant.with_timezone(&Z::tz()).naive_local();
        let instant = Z::tz()
            .from_local_datetime(&local)
            .earliest()
            .map_or(instant, |earliest| earliest.with_timezone(&Utc));

        Self {
            instant: Some(instant),
            original_payload: None,
            zone: PhantomData,
        }
    }

    /// The "no timestamp" value, encoded as `"0000-00-00 00:00:00"`.
    pub fn absent() -> Self {
        Self {
            instant: None,
            original_payload: None,
            zone: PhantomData,
        }
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.instant
    }

    /// The instant expressed in the bound zone.
    pub fn local(&self) -> Option<DateTime<Tz>> {
        self.instant.map(|i| i.with_timezone(&Z::tz()))
    }

    pub fn is_absent(&self) -> bool {
        self.instant.is_none()
    }

    /// The string this value was decoded from, if any.
    pub fn original_payload(&self) -> Option<&str> {
        self.original_payload.as_deref()
    }

    fn parse(s: String) -> Result<Self, String> {
        if s.is_empty() || s == TIMESTAMP_SENTINEL {
            return Ok(Self::absent_from(s));
        }

        if s.starts_with('-') {
            tracing::warn!(
                payload = %s,
                "{}: negative year, treating as no timestamp",
                Z::NAME
            );
            return Ok(Self::absent_from(s));
        }

        // chrono accepts unpadded fields, the wire format does not
        if s.len() != TIMESTAMP_SENTINEL.len() {
            return Err(format!(
                "{}: cannot parse {:?} as YYYY-MM-DD HH:MM:SS",
                Z::NAME,
                s
            ));
        }

        let naive = NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(|e| {
            format!(
                "{}: cannot parse {:?} as YYYY-MM-DD HH:MM:SS: {}",
                Z::NAME,
                s,
                e
            )
        })?;

        let local = match Z::tz().from_local_datetime(&naive) {
            LocalResult::Single(t) => t,
            // Daylight saving fall-back: the wall clock hour happens twice
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => {
                return Err(format!(
                    "{}: {:?} does not exist in {}",
                    Z::NAME,
                    s,
                    Z::tz().name()
                ))
            }
        };

        Ok(Self {
            instant: Some(local.with_timezone(&Utc)),
            original_payload: Some(s),
            zone: PhantomData,
        })
    }

    fn absent_from(payload: String) -> Self {
        Self {
            instant: None,
            original_payload: Some(payload),
            zone: PhantomData,
        }
    }
}

impl<Z: Zone> Default for ZonedTimestamp<Z> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<Z> PartialEq for ZonedTimestamp<Z> {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl<Z> Eq for ZonedTimestamp<Z> {}

impl<Z: Zone, T: TimeZone> From<DateTime<T>> for ZonedTimestamp<Z> {
    fn from(time: DateTime<T>) -> Self {
        Self::new(time)
    }
}

impl<Z: Zone> fmt::Display for ZonedTimestamp<Z> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.local() {
            Some(local) => write!(f, "{}", local.format(TIMESTAMP_FORMAT)),
            None => f.write_str(TIMESTAMP_SENTINEL),
        }
    }
}

impl<Z: Zone> Serialize for ZonedTimestamp<Z> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, Z: Zone> Deserialize<'de> for ZonedTimestamp<Z> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = deserializer.deserialize_str(StrVisitor { scalar: Z::NAME })?;

        Self::parse(s).map_err(de::Error::custom)
    }
}

impl<Z: Zone> Scalar for ZonedTimestamp<Z> {
    const NAME: &'static str = Z::NAME;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};
    use test_case::test_case;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, min, s)
                .unwrap(),
        )
    }

    #[test]
    fn decode_utc() {
        let ts = Timestamp::decode(br#""2019-10-01 11:00:00""#).unwrap();

        assert_eq!(ts.instant(), Some(utc(2019, 10, 1, 11, 0, 0)));
        assert_eq!(ts.original_payload(), Some("2019-10-01 11:00:00"));
    }

    // CEST is UTC+2, CET is UTC+1
    #[test_case(br#""2019-10-01 11:00:00""# => utc(2019, 10, 1, 9, 0, 0) ; "summer time")]
    #[test_case(br#""2019-11-01 11:00:00""# => utc(2019, 11, 1, 10, 0, 0) ; "winter time")]
    fn decode_paris(raw: &[u8]) -> DateTime<Utc> {
        TimestampParis::decode(raw).unwrap().instant().unwrap()
    }

    // BST is UTC+1, GMT is UTC+0
    #[test_case(br#""2019-10-01 11:00:00""# => utc(2019, 10, 1, 10, 0, 0) ; "summer time")]
    #[test_case(br#""2019-11-01 11:00:00""# => utc(2019, 11, 1, 11, 0, 0) ; "winter time")]
    fn decode_london(raw: &[u8]) -> DateTime<Utc> {
        TimestampLondon::decode(raw).unwrap().instant().unwrap()
    }

    #[test]
    fn encode_converts_into_zone() {
        let instant = utc(2019, 10, 1, 9, 0, 0);

        assert_eq!(
            Timestamp::new(instant).encode().unwrap(),
            br#""2019-10-01 09:00:00""#
        );
        assert_eq!(
            TimestampParis::new(instant).encode().unwrap(),
            br#""2019-10-01 11:00:00""#
        );
        assert_eq!(
            TimestampLondon::new(instant).encode().unwrap(),
            br#""2019-10-01 10:00:00""#
        );
    }

    #[test]
    fn encode_ignores_offset_of_the_input() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let instant = tokyo.with_ymd_and_hms(2019, 10, 1, 18, 0, 0).unwrap();

        assert_eq!(
            TimestampParis::new(instant).encode().unwrap(),
            br#""2019-10-01 11:00:00""#
        );
    }

    #[test_case(br#""0000-00-00 00:00:00""# ; "sentinel")]
    #[test_case(br#""""# ; "empty string")]
    #[test_case(br#""-0001-11-30 00:00:00""# ; "negative year")]
    fn decode_absent(raw: &[u8]) {
        let ts = TimestampParis::decode(raw).unwrap();

        assert!(ts.is_absent());
        assert_eq!(ts, TimestampParis::absent());
        assert_eq!(ts.encode().unwrap(), br#""0000-00-00 00:00:00""#);
    }

    #[test_case(br#""2019-10-01""# ; "date only")]
    #[test_case(br#""2019-10-01T11:00:00Z""# ; "rfc3339")]
    #[test_case(br#""2019-10-01 25:00:00""# ; "impossible hour")]
    #[test_case(br#""2019-10-1 11:00:00""# ; "unpadded")]
    #[test_case(b"1569920400" ; "unix seconds")]
    fn decode_invalid(raw: &[u8]) {
        let err = TimestampParis::decode(raw).unwrap_err();

        assert_eq!(err.scalar, "treezor.TimestampParis");
        assert!(err.to_string().contains("treezor.TimestampParis"), "{}", err);
    }

    #[test]
    fn decode_in_dst_gap_fails() {
        // Clocks jump from 02:00 to 03:00 in Paris on that day
        let err = TimestampParis::decode(br#""2019-03-31 02:30:00""#).unwrap_err();

        assert!(err.to_string().contains("Europe/Paris"), "{}", err);
    }

    #[test]
    fn decode_in_dst_overlap_picks_earliest() {
        // 02:30 happens twice in Paris on that day, first in CEST (UTC+2)
        let ts = TimestampParis::decode(br#""2019-10-27 02:30:00""#).unwrap();

        assert_eq!(ts.instant(), Some(utc(2019, 10, 27, 0, 30, 0)));
    }

    #[test_case(br#""2019-10-01 11:00:00""# ; "summer")]
    #[test_case(br#""2019-12-24 23:59:59""# ; "winter")]
    #[test_case(br#""2019-10-27 02:30:00""# ; "ambiguous hour")]
    #[test_case(br#""0000-00-00 00:00:00""# ; "sentinel")]
    fn round_trip_is_byte_identical(raw: &[u8]) {
        let paris = TimestampParis::decode(raw).unwrap();
        let encoded = paris.encode().unwrap();

        assert_eq!(encoded, raw);
        assert_eq!(TimestampParis::decode(&encoded).unwrap(), paris);

        let london = TimestampLondon::decode(raw).unwrap();
        assert_eq!(london.encode().unwrap(), raw);
    }

    #[test]
    fn new_truncates_sub_seconds() {
        let instant = utc(2019, 10, 1, 9, 0, 0) + chrono::Duration::milliseconds(750);
        let ts = TimestampParis::new(instant);

        assert_eq!(TimestampParis::decode(&ts.encode().unwrap()).unwrap(), ts);
    }

    #[test]
    fn new_in_repeated_hour_keeps_round_trip() {
        // 01:30 UTC is the second 02:30 in Paris (CET) on that day
        let ts = TimestampParis::new(utc(2019, 10, 27, 1, 30, 0));
        let encoded = ts.encode().unwrap();

        assert_eq!(encoded, br#""2019-10-27 02:30:00""#);
        assert_eq!(ts.instant(), Some(utc(2019, 10, 27, 0, 30, 0)));
        assert_eq!(TimestampParis::decode(&encoded).unwrap(), ts);

        // UTC has no repeated hour
        let ts = Timestamp::new(utc(2019, 10, 27, 1, 30, 0));
        assert_eq!(ts.instant(), Some(utc(2019, 10, 27, 1, 30, 0)));
    }

    #[test]
    fn round_trip_ignores_host_time_zone() {
        let raw = br#""2019-10-01 11:00:00""#;
        let previous = std::env::var("TZ").ok();

        std::env::set_var("TZ", "Asia/Tokyo");
        let encoded = TimestampParis::decode(raw).unwrap().encode().unwrap();
        let instant = TimestampParis::decode(raw).unwrap().instant();

        match previous {
            Some(tz) => std::env::set_var("TZ", tz),
            None => std::env::remove_var("TZ"),
        }

        assert_eq!(encoded, raw);
        assert_eq!(instant, Some(utc(2019, 10, 1, 9, 0, 0)));
    }
}
