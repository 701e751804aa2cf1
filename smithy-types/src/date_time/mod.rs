/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! DateTime value for representing Smithy timestamps.
//!
//! Unlike [`std::time::SystemTime`], the time inside a `DateTime` can be read directly. It also
//! holds the logic for parsing and formatting the timestamp formats used on the wire.

use num_integer::div_mod_floor;
use std::error::Error as StdError;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

mod format;
#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;

pub use self::format::{DateTimeFormatError, DateTimeParseError};

const MILLIS_PER_SECOND: i64 = 1000;
const NANOS_PER_MILLI: u32 = 1_000_000;
const NANOS_PER_SECOND_U32: u32 = 1_000_000_000;

/// Instant in time.
///
/// Represented as seconds and sub-second nanos since the Unix epoch (January 1, 1970 at
/// midnight UTC). Sub-second nanos always count forward in time, so `-0.5` seconds is stored as
/// `seconds = -1, subsecond_nanos = 500_000_000`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct DateTime {
    seconds: i64,
    subsecond_nanos: u32,
}

impl DateTime {
    /// Creates a `DateTime` from a number of seconds since the Unix epoch.
    pub fn from_secs(epoch_seconds: i64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates a `DateTime` from a number of milliseconds since the Unix epoch.
    pub fn from_millis(epoch_millis: i64) -> DateTime {
        let (seconds, millis) = div_mod_floor(epoch_millis, MILLIS_PER_SECOND);
        DateTime::from_secs_and_nanos(seconds, millis as u32 * NANOS_PER_MILLI)
    }

    /// Creates a `DateTime` from a number of seconds and sub-second nanos since the Unix epoch.
    ///
    /// # Panics
    /// Panics if `subsecond_nanos` is one second or more.
    ///
    /// # Example
    /// ```
    /// # use smithy_types::DateTime;
    /// assert_eq!(
    ///     DateTime::from_fractional_secs(1, 0.5),
    ///     DateTime::from_secs_and_nanos(1, 500_000_000u32),
    /// );
    /// ```
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        if subsecond_nanos >= NANOS_PER_SECOND_U32 {
            panic!("{} is >= 1_000_000_000", subsecond_nanos)
        }
        DateTime {
            seconds,
            subsecond_nanos,
        }
    }

    /// Creates a `DateTime` from a number of seconds and a fractional second since the Unix epoch.
    pub fn from_fractional_secs(epoch_seconds: i64, fraction: f64) -> Self {
        let subsecond_nanos = (fraction * 1_000_000_000_f64) as u32;
        DateTime::from_secs_and_nanos(epoch_seconds, subsecond_nanos.min(NANOS_PER_SECOND_U32 - 1))
    }

    /// Creates a `DateTime` from an `f64` representing the number of seconds since the Unix epoch.
    ///
    /// _Note: the conversion loses precision for very large values._
    pub fn from_secs_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        DateTime::from_fractional_secs(seconds as i64, epoch_seconds - seconds)
    }

    /// Returns the `DateTime` as an `f64` of seconds since the Unix epoch.
    ///
    /// _Note: the conversion loses precision for very large values._
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    /// Returns the epoch seconds component, not including the sub-second nanos.
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second nanos component.
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Returns true if the sub-second nanos are greater than zero.
    pub fn has_subsec_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    /// Converts the `DateTime` to milliseconds since the Unix epoch.
    ///
    /// Returns a `ConversionError` if the value does not fit into an `i64` of millis.
    pub fn to_millis(self) -> Result<i64, ConversionError> {
        let subsec_millis = i64::from(self.subsecond_nanos / NANOS_PER_MILLI);
        if self.seconds < 0 {
            self.seconds
                .checked_add(1)
                .and_then(|seconds| seconds.checked_mul(MILLIS_PER_SECOND))
                .and_then(|millis| millis.checked_sub(MILLIS_PER_SECOND - subsec_millis))
        } else {
            self.seconds
                .checked_mul(MILLIS_PER_SECOND)
                .and_then(|millis| millis.checked_add(subsec_millis))
        }
        .ok_or(ConversionError(
            "DateTime value too large to fit into i64 epoch millis",
        ))
    }

    /// Parses a `DateTime` from a string using the given `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, DateTimeParseError> {
        match format {
            Format::DateTime => format::rfc3339::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    /// Formats the `DateTime` to a string using the given `format`.
    ///
    /// Returns an error if the value is outside of the range the format can represent.
    pub fn fmt(&self, format: Format) -> Result<String, DateTimeFormatError> {
        match format {
            Format::DateTime => format::rfc3339::format(self),
            Format::EpochSeconds => Ok(format::epoch_seconds::format(self)),
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fmt(Format::DateTime) {
            Ok(rfc3339) => f.write_str(&rfc3339),
            Err(_) => f.write_str(&format::epoch_seconds::format(self)),
        }
    }
}

impl TryFrom<DateTime> for SystemTime {
    type Error = ConversionError;

    fn try_from(date_time: DateTime) -> Result<Self, Self::Error> {
        if date_time.secs() < 0 {
            let mut secs = date_time.secs().unsigned_abs();
            let mut nanos = date_time.subsec_nanos();
            if date_time.has_subsec_nanos() {
                secs -= 1;
                nanos = NANOS_PER_SECOND_U32 - nanos;
            }
            UNIX_EPOCH
                .checked_sub(Duration::new(secs, nanos))
                .ok_or(ConversionError("DateTime is before the earliest SystemTime"))
        } else {
            UNIX_EPOCH
                .checked_add(Duration::new(date_time.secs().unsigned_abs(), date_time.subsec_nanos()))
                .ok_or(ConversionError("DateTime is after the latest SystemTime"))
        }
    }
}

impl From<SystemTime> for DateTime {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(duration) => DateTime {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let mut seconds = -(duration.as_secs() as i64);
                let mut nanos = duration.subsec_nanos();
                if nanos != 0 {
                    seconds -= 1;
                    nanos = NANOS_PER_SECOND_U32 - nanos;
                }
                DateTime {
                    seconds,
                    subsecond_nanos: nanos,
                }
            }
        }
    }
}

#[cfg(feature = "chrono-conversions")]
impl From<chrono::DateTime<chrono::Utc>> for DateTime {
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        DateTime::from_secs_and_nanos(
            value.timestamp(),
            value.timestamp_subsec_nanos().min(NANOS_PER_SECOND_U32 - 1),
        )
    }
}

#[cfg(feature = "chrono-conversions")]
impl TryFrom<DateTime> for chrono::DateTime<chrono::Utc> {
    type Error = ConversionError;

    fn try_from(value: DateTime) -> Result<Self, Self::Error> {
        chrono::DateTime::<chrono::Utc>::from_timestamp(value.secs(), value.subsec_nanos())
            .ok_or(ConversionError("DateTime is out of range for chrono"))
    }
}

/// Failure to convert a `DateTime` to or from another type.
#[derive(Debug)]
#[non_exhaustive]
pub struct ConversionError(&'static str);

impl StdError for ConversionError {}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats for representing a `DateTime` on the wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// RFC-3339 Date Time.
    DateTime,
    /// Number of seconds since the Unix epoch formatted as a floating point.
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{DateTime, Format};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    #[test]
    fn test_fmt() {
        let date_time = DateTime::from_secs(1576540098);
        assert_eq!(date_time.fmt(Format::DateTime).unwrap(), "2019-12-16T23:48:18Z");
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "1576540098");

        let date_time = DateTime::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18.52Z"
        );
        assert_eq!(
            date_time.fmt(Format::EpochSeconds).unwrap(),
            "1576540098.52"
        );
    }

    #[test]
    fn test_fmt_zero_seconds() {
        let date_time = DateTime::from_secs(1576540080);
        assert_eq!(date_time.fmt(Format::DateTime).unwrap(), "2019-12-16T23:48:00Z");
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "1576540080");
    }

    #[test]
    fn display_is_rfc3339() {
        assert_eq!(
            DateTime::from_secs(1576540098).to_string(),
            "2019-12-16T23:48:18Z"
        );
    }

    #[test]
    fn from_millis() {
        let date_time = DateTime::from_millis(1627680004123);
        assert_eq!(date_time.secs(), 1627680004);
        assert_eq!(date_time.subsec_nanos(), 123_000_000);

        let date_time = DateTime::from_millis(-1627680004123);
        assert_eq!(date_time.secs(), -1627680005);
        assert_eq!(date_time.subsec_nanos(), 877_000_000);
    }

    #[test]
    fn to_from_millis_round_trip() {
        for millis in &[0, 1627680004123, -1627680004123, i64::MAX, i64::MIN] {
            assert_eq!(*millis, DateTime::from_millis(*millis).to_millis().unwrap());
        }
        assert!(DateTime::from_secs(i64::MAX).to_millis().is_err());
    }

    #[test]
    fn from_secs_f64() {
        assert_eq!(
            DateTime::from_secs_f64(1.5),
            DateTime::from_secs_and_nanos(1, 500_000_000)
        );
        assert_eq!(
            DateTime::from_secs_f64(-0.5),
            DateTime::from_secs_and_nanos(-1, 500_000_000)
        );
    }

    #[test]
    fn ordering_follows_time() {
        let before = DateTime::from_secs_and_nanos(-1, 999_999_999);
        let after = DateTime::from_secs(0);
        assert!(before < after);
        assert!(DateTime::from_secs_and_nanos(5, 1) > DateTime::from_secs(5));
    }

    #[test]
    fn system_time_conversions() {
        let date_time = DateTime::from_secs_and_nanos(-2, 250_000_000);
        let system_time = SystemTime::try_from(date_time).unwrap();
        assert_eq!(
            UNIX_EPOCH - Duration::new(1, 750_000_000),
            system_time
        );
        assert_eq!(DateTime::from(system_time), date_time);

        let system_time = UNIX_EPOCH + Duration::new(1576540098, 5);
        assert_eq!(
            DateTime::from(system_time),
            DateTime::from_secs_and_nanos(1576540098, 5)
        );
    }

    #[cfg(feature = "chrono-conversions")]
    #[test]
    fn chrono_conversions() {
        let date_time = DateTime::from_secs_and_nanos(1576540098, 42);
        let chrono_date_time = chrono::DateTime::<chrono::Utc>::try_from(date_time).unwrap();
        assert_eq!(chrono_date_time.timestamp(), 1576540098);
        assert_eq!(DateTime::from(chrono_date_time), date_time);
    }

    #[test]
    #[should_panic]
    fn from_secs_and_nanos_rejects_full_second() {
        DateTime::from_secs_and_nanos(1, 1_000_000_000);
    }
}
