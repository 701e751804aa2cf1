/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Rate-control thresholds such as `MaxConcurrency` and `MaxErrors`.

use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;

/// An absolute count or a percentage of a target set.
///
/// On the wire a threshold is a string: bare digits for a count (`"10"`) or digits followed by
/// `%` for a percentage (`"25%"`). Percentages are limited to `0..=100` by [`Percent`], so every
/// threshold that can be built also parses back from its wire string.
///
/// ```
/// use ssm::model::Threshold;
///
/// assert_eq!("10".parse::<Threshold>().unwrap(), Threshold::Count(10));
/// assert_eq!("25%".parse::<Threshold>().unwrap(), Threshold::percentage(25).unwrap());
/// assert!("101%".parse::<Threshold>().is_err());
/// assert_eq!(Threshold::percentage(25).unwrap().to_string(), "25%");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Threshold {
    /// An absolute number of targets.
    Count(u32),
    /// A percentage of the target set.
    Percentage(Percent),
}

impl Threshold {
    /// Creates a percentage threshold, failing if `percent` is greater than 100.
    pub fn percentage(percent: u8) -> Result<Self, ParseThresholdError> {
        Percent::new(percent).map(Threshold::Percentage)
    }

    /// Returns true for `0` and `0%`.
    pub fn is_zero(&self) -> bool {
        match self {
            Threshold::Count(count) => *count == 0,
            Threshold::Percentage(percent) => percent.get() == 0,
        }
    }

    /// Returns true if the threshold is usable as a concurrency limit.
    ///
    /// A concurrency of zero would never start any target, so only non-zero values qualify.
    /// Error thresholds accept zero.
    pub fn is_valid_concurrency(&self) -> bool {
        !self.is_zero()
    }
}

/// A whole percentage between 0 and 100 inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    /// `0%`
    pub const ZERO: Percent = Percent(0);
    /// `100%`
    pub const HUNDRED: Percent = Percent(100);

    /// Creates a percentage, failing if `percent` is greater than 100.
    pub fn new(percent: u8) -> Result<Self, ParseThresholdError> {
        if percent > 100 {
            return Err(ParseThresholdErrorKind::OutOfRange(format!("{}%", percent)).into());
        }
        Ok(Percent(percent))
    }

    /// Returns the percentage as a number between 0 and 100.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percent {
    type Error = ParseThresholdError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Percent::new(percent)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

fn digits(value: &str) -> Option<&str> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        Some(value)
    } else {
        None
    }
}

impl FromStr for Threshold {
    type Err = ParseThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseThresholdErrorKind::Empty.into());
        }
        if let Some(percent) = s.strip_suffix('%') {
            let percent = digits(percent)
                .ok_or_else(|| ParseThresholdErrorKind::NotANumber(s.to_owned()))?;
            // all digits, so a parse failure can only be overflow
            return percent
                .parse::<u8>()
                .ok()
                .and_then(|percent| Percent::new(percent).ok())
                .map(Threshold::Percentage)
                .ok_or_else(|| ParseThresholdErrorKind::OutOfRange(s.to_owned()).into());
        }
        let count = digits(s).ok_or_else(|| ParseThresholdErrorKind::NotANumber(s.to_owned()))?;
        let count: u32 = count
            .parse()
            .map_err(|_| ParseThresholdErrorKind::OutOfRange(s.to_owned()))?;
        Ok(Threshold::Count(count))
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Count(count) => write!(f, "{}", count),
            Threshold::Percentage(percent) => fmt::Display::fmt(percent, f),
        }
    }
}

impl smithy_types::display::DisplayValue for Threshold {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<u32> for Threshold {
    fn from(count: u32) -> Self {
        Threshold::Count(count)
    }
}

impl TryFrom<&str> for Threshold {
    type Error = ParseThresholdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Threshold {
    type Error = ParseThresholdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Threshold> for String {
    fn from(value: Threshold) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseThresholdErrorKind {
    Empty,
    NotANumber(String),
    OutOfRange(String),
}

/// Error returned when a string is not a valid [`Threshold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThresholdError {
    kind: ParseThresholdErrorKind,
}

impl From<ParseThresholdErrorKind> for ParseThresholdError {
    fn from(kind: ParseThresholdErrorKind) -> Self {
        Self { kind }
    }
}

impl fmt::Display for ParseThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseThresholdErrorKind::*;
        match &self.kind {
            Empty => write!(f, "threshold cannot be empty"),
            NotANumber(value) => write!(
                f,
                "`{}` is not a threshold: expected a number or a percentage such as `10%`",
                value
            ),
            OutOfRange(value) => write!(f, "threshold `{}` is out of range", value),
        }
    }
}

impl StdError for ParseThresholdError {}

#[cfg(test)]
mod test {
    use super::{Percent, Threshold};
    use proptest::prelude::*;

    #[test]
    fn parse_counts_and_percentages() {
        assert_eq!("0".parse::<Threshold>().unwrap(), Threshold::Count(0));
        assert_eq!("50".parse::<Threshold>().unwrap(), Threshold::Count(50));
        assert_eq!("0%".parse::<Threshold>().unwrap(), Threshold::percentage(0).unwrap());
        assert_eq!("7%".parse::<Threshold>().unwrap(), Threshold::percentage(7).unwrap());
        assert_eq!(
            "100%".parse::<Threshold>().unwrap(),
            Threshold::Percentage(Percent::HUNDRED)
        );
        assert_eq!(
            "4294967295".parse::<Threshold>().unwrap(),
            Threshold::Count(u32::MAX)
        );
    }

    #[test]
    fn reject_malformed() {
        for invalid in &[
            "", "%", "-1", "+1", " 1", "1 ", "1.5", "1.5%", "ten", "10%%", "%10", "101%",
            "255%", "256%", "4294967296",
        ] {
            assert!(
                invalid.parse::<Threshold>().is_err(),
                "`{}` should be rejected",
                invalid
            );
        }
    }

    #[test]
    fn error_messages() {
        let err = "".parse::<Threshold>().unwrap_err();
        assert_eq!(err.to_string(), "threshold cannot be empty");
        let err = "abc".parse::<Threshold>().unwrap_err();
        assert!(err.to_string().starts_with("`abc` is not a threshold"));
        let err = "300%".parse::<Threshold>().unwrap_err();
        assert_eq!(err.to_string(), "threshold `300%` is out of range");
    }

    #[test]
    fn percentage_constructor() {
        assert_eq!(
            Threshold::percentage(100).unwrap(),
            Threshold::Percentage(Percent::HUNDRED)
        );
        assert_eq!(Percent::new(0).unwrap(), Percent::ZERO);
        assert_eq!(Percent::try_from(42).unwrap().get(), 42);
        for out_of_range in [101u8, 150, u8::MAX] {
            let err = Threshold::percentage(out_of_range).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("threshold `{}%` is out of range", out_of_range)
            );
            assert!(Percent::new(out_of_range).is_err());
        }
    }

    #[test]
    fn concurrency_must_be_non_zero() {
        assert!(!Threshold::Count(0).is_valid_concurrency());
        assert!(!Threshold::percentage(0).unwrap().is_valid_concurrency());
        assert!(Threshold::Count(1).is_valid_concurrency());
        assert!(Threshold::percentage(1).unwrap().is_valid_concurrency());
        assert!(Threshold::percentage(0).unwrap().is_zero());
    }

    #[test]
    fn serde_uses_the_wire_string() {
        let five = Threshold::percentage(5).unwrap();
        assert_eq!(serde_json::to_string(&five).unwrap(), r#""5%""#);
        assert_eq!(
            serde_json::from_str::<Threshold>(r#""12""#).unwrap(),
            Threshold::Count(12)
        );
        assert!(serde_json::from_str::<Threshold>(r#""120%""#).is_err());
        assert!(serde_json::from_str::<Threshold>("12").is_err());
    }

    #[test]
    fn serde_round_trips_the_boundaries() {
        for threshold in [
            Threshold::Count(0),
            Threshold::Count(u32::MAX),
            Threshold::Percentage(Percent::ZERO),
            Threshold::Percentage(Percent::HUNDRED),
        ] {
            let json = serde_json::to_string(&threshold).unwrap();
            assert_eq!(serde_json::from_str::<Threshold>(&json).unwrap(), threshold);
        }
    }

    proptest! {
        #[test]
        fn count_round_trip(count in any::<u32>()) {
            let threshold = Threshold::from(count);
            prop_assert_eq!(threshold.to_string().parse::<Threshold>().unwrap(), threshold);
        }

        #[test]
        fn percentage_round_trip(percent in 0u8..=100) {
            let threshold = Threshold::percentage(percent).unwrap();
            prop_assert_eq!(threshold.to_string().parse::<Threshold>().unwrap(), threshold);
        }

        #[test]
        fn every_buildable_percentage_survives_serde(percent in any::<u8>()) {
            match Percent::new(percent) {
                Ok(percent) => {
                    let threshold = Threshold::Percentage(percent);
                    let json = serde_json::to_string(&threshold).unwrap();
                    prop_assert_eq!(serde_json::from_str::<Threshold>(&json).unwrap(), threshold);
                }
                Err(_) => prop_assert!(percent > 100),
            }
        }

        #[test]
        fn parse_never_panics(input in "\\PC*") {
            let _ = input.parse::<Threshold>();
        }
    }
}
