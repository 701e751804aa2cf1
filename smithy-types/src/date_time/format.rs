/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error as StdError;
use std::fmt;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

#[derive(Debug)]
pub(super) enum DateTimeParseErrorKind {
    /// The given date-time string was invalid.
    Invalid(&'static str),
    /// Failed to parse an integer inside the given date-time string.
    IntParseError,
    /// The rfc3339 parser rejected the input.
    Rfc3339(chrono::ParseError),
}

/// Error returned when a date-time value cannot be parsed.
#[derive(Debug)]
pub struct DateTimeParseError {
    kind: DateTimeParseErrorKind,
}

impl StdError for DateTimeParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        use DateTimeParseErrorKind::*;
        match &self.kind {
            Rfc3339(err) => Some(err as _),
            Invalid(_) | IntParseError => None,
        }
    }
}

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DateTimeParseErrorKind::*;
        match &self.kind {
            Invalid(msg) => write!(f, "invalid date-time: {}", msg),
            IntParseError => write!(f, "failed to parse int"),
            Rfc3339(_) => write!(f, "invalid RFC-3339 date-time"),
        }
    }
}

impl From<DateTimeParseErrorKind> for DateTimeParseError {
    fn from(kind: DateTimeParseErrorKind) -> Self {
        Self { kind }
    }
}

/// Error returned when a date-time value cannot be formatted.
#[derive(Debug)]
pub struct DateTimeFormatError {
    seconds: i64,
}

impl StdError for DateTimeFormatError {}

impl fmt::Display for DateTimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} epoch seconds is outside of the range that can be formatted",
            self.seconds
        )
    }
}

/// Renders sub-second nanos without trailing zeros, e.g. `520_000_000` becomes `52`.
fn trimmed_fraction(nanos: u32) -> String {
    let fraction = format!("{:09}", nanos);
    fraction.trim_end_matches('0').to_owned()
}

/// Parses up to nine fractional digits into nanos.
fn parse_fraction(fraction: &str) -> Result<u32, DateTimeParseError> {
    if fraction.is_empty() || fraction.len() > 9 {
        return Err(DateTimeParseErrorKind::Invalid("fractional seconds must have 1 to 9 digits").into());
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateTimeParseErrorKind::IntParseError.into());
    }
    let mut nanos: u32 = fraction
        .parse()
        .map_err(|_| DateTimeParseErrorKind::IntParseError)?;
    for _ in fraction.len()..9 {
        nanos *= 10;
    }
    Ok(nanos)
}

pub(crate) mod epoch_seconds {
    use super::{parse_fraction, trimmed_fraction, DateTimeParseError, DateTimeParseErrorKind};
    use super::NANOS_PER_SECOND;
    use crate::DateTime;

    /// Formats a `DateTime` into the Smithy epoch seconds date-time format.
    pub(crate) fn format(date_time: &DateTime) -> String {
        if !date_time.has_subsec_nanos() {
            return format!("{}", date_time.secs());
        }
        if date_time.secs() >= 0 {
            format!(
                "{}.{}",
                date_time.secs(),
                trimmed_fraction(date_time.subsec_nanos())
            )
        } else {
            // -1 seconds + 0.25 is written as -0.75
            let whole = date_time.secs() + 1;
            format!(
                "-{}.{}",
                whole.unsigned_abs(),
                trimmed_fraction(NANOS_PER_SECOND - date_time.subsec_nanos())
            )
        }
    }

    /// Parses the Smithy epoch seconds date-time format into a `DateTime`.
    pub(crate) fn parse(value: &str) -> Result<DateTime, DateTimeParseError> {
        let (negative, unsigned) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateTimeParseErrorKind::Invalid("expected epoch seconds").into());
        }
        let whole: i64 = whole
            .parse()
            .map_err(|_| DateTimeParseErrorKind::IntParseError)?;
        let nanos = match fraction {
            Some(fraction) => parse_fraction(fraction)?,
            None => 0,
        };
        Ok(if !negative {
            DateTime::from_secs_and_nanos(whole, nanos)
        } else if nanos == 0 {
            DateTime::from_secs(-whole)
        } else {
            DateTime::from_secs_and_nanos(-whole - 1, NANOS_PER_SECOND - nanos)
        })
    }
}

pub(crate) mod rfc3339 {
    use super::{trimmed_fraction, DateTimeFormatError, DateTimeParseError, DateTimeParseErrorKind};
    use super::NANOS_PER_SECOND;
    use crate::DateTime;

    /// Formats a `DateTime` as RFC-3339 in UTC, e.g. `2019-12-16T23:48:18.52Z`.
    pub(crate) fn format(date_time: &DateTime) -> Result<String, DateTimeFormatError> {
        let utc = chrono::DateTime::<chrono::Utc>::from_timestamp(date_time.secs(), 0).ok_or(
            DateTimeFormatError {
                seconds: date_time.secs(),
            },
        )?;
        let mut out = utc.format("%Y-%m-%dT%H:%M:%S").to_string();
        if date_time.has_subsec_nanos() {
            out.push('.');
            out.push_str(&trimmed_fraction(date_time.subsec_nanos()));
        }
        out.push('Z');
        Ok(out)
    }

    /// Parses an RFC-3339 date-time with any UTC offset.
    pub(crate) fn parse(value: &str) -> Result<DateTime, DateTimeParseError> {
        let parsed = chrono::DateTime::parse_from_rfc3339(value)
            .map_err(DateTimeParseErrorKind::Rfc3339)?;
        // leap seconds are reported as nanos past one second
        let nanos = parsed.timestamp_subsec_nanos().min(NANOS_PER_SECOND - 1);
        Ok(DateTime::from_secs_and_nanos(parsed.timestamp(), nanos))
    }
}

#[cfg(test)]
mod test {
    use super::{epoch_seconds, rfc3339};
    use crate::DateTime;
    use proptest::prelude::*;

    #[test]
    fn parse_epoch_seconds() {
        assert_eq!(epoch_seconds::parse("1576540098").unwrap(), DateTime::from_secs(1576540098));
        assert_eq!(
            epoch_seconds::parse("1576540098.52").unwrap(),
            DateTime::from_secs_and_nanos(1576540098, 520_000_000)
        );
        assert_eq!(
            epoch_seconds::parse("-0.5").unwrap(),
            DateTime::from_secs_and_nanos(-1, 500_000_000)
        );
        assert_eq!(epoch_seconds::parse("-12").unwrap(), DateTime::from_secs(-12));
    }

    #[test]
    fn parse_epoch_seconds_invalid() {
        for invalid in &["", "-", ".5", "1.", "1.1234567890", "1e9", "abc", " 1", "1.2.3"] {
            assert!(epoch_seconds::parse(invalid).is_err(), "{} should fail", invalid);
        }
    }

    #[test]
    fn format_negative_epoch_seconds() {
        assert_eq!(
            epoch_seconds::format(&DateTime::from_secs_and_nanos(-1, 250_000_000)),
            "-0.75"
        );
        assert_eq!(epoch_seconds::format(&DateTime::from_secs(-3)), "-3");
    }

    #[test]
    fn parse_rfc3339() {
        assert_eq!(
            rfc3339::parse("2019-12-16T23:48:18Z").unwrap(),
            DateTime::from_secs(1576540098)
        );
        assert_eq!(
            rfc3339::parse("2019-12-16T23:48:18.52Z").unwrap(),
            DateTime::from_secs_and_nanos(1576540098, 520_000_000)
        );
        assert_eq!(
            rfc3339::parse("2019-12-17T01:48:18+02:00").unwrap(),
            DateTime::from_secs(1576540098)
        );
        assert!(rfc3339::parse("2019-12-16 23:48:18").is_err());
        assert!(rfc3339::parse("").is_err());
    }

    #[test]
    fn rfc3339_errors_keep_the_chrono_source() {
        use std::error::Error as _;

        let err = rfc3339::parse("yesterday").unwrap_err();
        assert_eq!(err.to_string(), "invalid RFC-3339 date-time");
        let source = err.source().expect("chrono error is the source");
        assert!(source.downcast_ref::<chrono::ParseError>().is_some());
    }

    proptest! {
        #[test]
        fn epoch_seconds_round_trip(seconds in -253402300799i64..253402300799i64, nanos in 0u32..1_000_000_000u32) {
            let date_time = DateTime::from_secs_and_nanos(seconds, nanos);
            let formatted = epoch_seconds::format(&date_time);
            prop_assert_eq!(epoch_seconds::parse(&formatted).unwrap(), date_time);
        }

        #[test]
        fn rfc3339_round_trip(seconds in 0i64..253402300799i64, nanos in 0u32..1_000_000_000u32) {
            let date_time = DateTime::from_secs_and_nanos(seconds, nanos);
            let formatted = rfc3339::format(&date_time).unwrap();
            prop_assert_eq!(rfc3339::parse(&formatted).unwrap(), date_time);
        }
    }
}
