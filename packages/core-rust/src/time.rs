//! `xsd:dateTime` timestamps.
//!
//! The vSAN API exchanges instants as `xsd:dateTime` strings, and the
//! performance manager reports sample times as `YYYY-MM-DD HH:MM:SS` (UTC)
//! inside CSV `sampleInfo` fields. Both are carried here as signed
//! milliseconds since the Unix epoch so they order and subtract without a
//! calendar library. Years 0001 through 9999 are accepted.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ParseError;

const MILLIS_PER_SECOND: i64 = 1_000;
const SECONDS_PER_DAY: i64 = 86_400;

/// An instant with millisecond precision, serialized as `xsd:dateTime` in UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
    millis: i64,
}

impl DateTime {
    /// Creates an instant from milliseconds since the Unix epoch; negative
    /// values are before it.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.millis
    }

    /// The current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX));
        Self { millis }
    }

    /// Shifts the instant back by `secs` seconds, saturating at the range of
    /// the representation.
    #[must_use]
    pub fn minus_seconds(self, secs: u64) -> Self {
        let delta = i64::try_from(secs)
            .unwrap_or(i64::MAX)
            .saturating_mul(MILLIS_PER_SECOND);
        Self {
            millis: self.millis.saturating_sub(delta),
        }
    }

    /// Parses a vSAN performance sample time (`YYYY-MM-DD HH:MM:SS`, UTC).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Timestamp` if the string is not a valid date and time.
    pub fn parse_sample_time(s: &str) -> Result<Self, ParseError> {
        parse(s.trim()).ok_or_else(|| ParseError::Timestamp(s.to_string()))
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.millis.div_euclid(MILLIS_PER_SECOND);
        let ms = self.millis.rem_euclid(MILLIS_PER_SECOND);
        let days = secs.div_euclid(SECONDS_PER_DAY);
        let rem = secs.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        write!(
            f,
            "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}.{ms:03}Z",
            rem / 3600,
            (rem % 3600) / 60,
            rem % 60,
        )
    }
}

impl FromStr for DateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).ok_or_else(|| ParseError::Timestamp(s.to_string()))
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Calendar arithmetic (proleptic Gregorian, days relative to 1970-01-01)
// ---------------------------------------------------------------------------

fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let m = i64::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parses `YYYY-MM-DD(T| )HH:MM:SS[.fraction][Z|±HH:MM]`. No zone means UTC.
fn parse(s: &str) -> Option<DateTime> {
    let (date, time) = s.split_once(['T', ' '])?;

    let mut date_parts = date.splitn(3, '-');
    let year = i64::from(digits(date_parts.next()?)?);
    let month = digits(date_parts.next()?)?;
    let day = digits(date_parts.next()?)?;
    if !(1..=9999).contains(&year) || !(1..=12).contains(&month) {
        return None;
    }
    if day == 0 || day > days_in_month(year, month) {
        return None;
    }

    // Split off the zone designator.
    let (clock, offset_secs) = if let Some(clock) = time.strip_suffix('Z') {
        (clock, 0_i64)
    } else if let Some(pos) = time.rfind(['+', '-']) {
        let (clock, zone) = time.split_at(pos);
        let sign = if zone.starts_with('-') { -1 } else { 1 };
        let (hh, mm) = zone[1..].split_once(':')?;
        let (hh, mm) = (digits(hh)?, digits(mm)?);
        if hh > 23 || mm > 59 {
            return None;
        }
        (clock, sign * i64::from(hh * 3600 + mm * 60))
    } else {
        (time, 0)
    };

    let (hms, fraction) = match clock.split_once('.') {
        Some((hms, fraction)) => (hms, Some(fraction)),
        None => (clock, None),
    };
    let mut clock_parts = hms.splitn(3, ':');
    let hour = digits(clock_parts.next()?)?;
    let minute = digits(clock_parts.next()?)?;
    let second = digits(clock_parts.next()?)?;
    if hour > 23 || minute > 59 || second > 59 {
        return None;
    }
    let millis_part = match fraction {
        Some(f) => {
            if f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            // Keep millisecond precision; pad or truncate the fraction.
            let mut padded: String = f.chars().take(3).collect();
            while padded.len() < 3 {
                padded.push('0');
            }
            i64::from(digits(&padded)?)
        }
        None => 0,
    };

    let days = days_from_civil(year, month, day);
    let secs = days * SECONDS_PER_DAY + i64::from(hour * 3600 + minute * 60 + second) - offset_secs;
    let millis = secs.checked_mul(MILLIS_PER_SECOND)?.checked_add(millis_part)?;
    Some(DateTime::from_millis(millis))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn epoch_formats_as_xsd_datetime() {
        assert_eq!(DateTime::from_millis(0).to_string(), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn known_instant_formats() {
        // 2019-05-10T08:30:15.250Z
        let dt = DateTime::from_millis(1_557_477_015_250);
        assert_eq!(dt.to_string(), "2019-05-10T08:30:15.250Z");
    }

    #[test]
    fn parses_sample_time_as_utc() {
        let dt = DateTime::parse_sample_time("2019-05-10 08:30:00").unwrap();
        assert_eq!(dt.as_millis(), 1_557_477_000_000);
    }

    #[test]
    fn parses_offsets() {
        let utc: DateTime = "2020-02-29T12:00:00Z".parse().unwrap();
        let plus: DateTime = "2020-02-29T14:00:00+02:00".parse().unwrap();
        let minus: DateTime = "2020-02-29T07:30:00-04:30".parse().unwrap();
        assert_eq!(utc, plus);
        assert_eq!(utc, minus);
    }

    #[test]
    fn fraction_is_truncated_to_millis() {
        let dt: DateTime = "1970-01-01T00:00:01.123456Z".parse().unwrap();
        assert_eq!(dt.as_millis(), 1_123);
        let dt: DateTime = "1970-01-01T00:00:01.5Z".parse().unwrap();
        assert_eq!(dt.as_millis(), 1_500);
    }

    #[test]
    fn rejects_invalid_dates() {
        for bad in [
            "",
            "2019-05-10",
            "2019-13-01 00:00:00",
            "2019-02-29 00:00:00",
            "2019-04-31T00:00:00Z",
            "2019-05-10T24:00:00Z",
            "2019-05-10T10:61:00Z",
            "0000-01-01T00:00:00Z",
            "2019-05-10Tab:00:00Z",
        ] {
            assert!(bad.parse::<DateTime>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn minus_seconds_crosses_the_epoch_and_saturates() {
        let dt = DateTime::from_millis(5_000);
        assert_eq!(dt.minus_seconds(2).as_millis(), 3_000);
        assert_eq!(dt.minus_seconds(10).as_millis(), -5_000);
        assert_eq!(
            DateTime::from_millis(-5_000).minus_seconds(u64::MAX).as_millis(),
            i64::MIN
        );
    }

    #[test]
    fn pre_epoch_instants_parse_and_format() {
        let dt: DateTime = "1969-12-31T23:59:59.500Z".parse().unwrap();
        assert_eq!(dt.as_millis(), -500);
        assert_eq!(dt.to_string(), "1969-12-31T23:59:59.500Z");

        // Unset timestamps on some hosts come back as the xsd:dateTime minimum.
        let first: DateTime = "0001-01-01T00:00:00Z".parse().unwrap();
        assert_eq!(first.as_millis(), -62_135_596_800_000);
        assert_eq!(first.to_string(), "0001-01-01T00:00:00.000Z");
        assert!(first < DateTime::from_millis(0));
    }

    #[test]
    fn serde_uses_string_form() {
        let dt = DateTime::from_millis(1_557_477_015_250);
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(json, "\"2019-05-10T08:30:15.250Z\"");
        let back: DateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dt);
    }

    proptest! {
        #[test]
        fn display_parses_back(millis in -62_135_596_800_000i64..253_402_300_799_999) {
            let dt = DateTime::from_millis(millis);
            let parsed: DateTime = dt.to_string().parse().unwrap();
            prop_assert_eq!(parsed, dt);
        }

        #[test]
        fn ordering_follows_millis(a in -4_000_000_000_000i64..4_000_000_000_000, b in -4_000_000_000_000i64..4_000_000_000_000) {
            let (da, db) = (DateTime::from_millis(a), DateTime::from_millis(b));
            prop_assert_eq!(da.cmp(&db), a.cmp(&b));
        }
    }
}
