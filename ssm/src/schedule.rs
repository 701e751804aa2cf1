/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Schedule expressions used by associations and maintenance windows.

use std::error::Error as StdError;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Unit of a `rate(...)` expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RateUnit {
    /// `minute` / `minutes`
    Minutes,
    /// `hour` / `hours`
    Hours,
    /// `day` / `days`
    Days,
}

impl RateUnit {
    fn as_str(&self, value: u32) -> &'static str {
        match (self, value == 1) {
            (RateUnit::Minutes, true) => "minute",
            (RateUnit::Minutes, false) => "minutes",
            (RateUnit::Hours, true) => "hour",
            (RateUnit::Hours, false) => "hours",
            (RateUnit::Days, true) => "day",
            (RateUnit::Days, false) => "days",
        }
    }

    fn parse(unit: &str, value: u32) -> Option<Self> {
        let (unit, singular) = match unit {
            "minute" => (RateUnit::Minutes, true),
            "minutes" => (RateUnit::Minutes, false),
            "hour" => (RateUnit::Hours, true),
            "hours" => (RateUnit::Hours, false),
            "day" => (RateUnit::Days, true),
            "days" => (RateUnit::Days, false),
            _ => return None,
        };
        // `rate(1 minute)` and `rate(5 minutes)`, never `rate(1 minutes)`
        if singular == (value == 1) {
            Some(unit)
        } else {
            None
        }
    }
}

/// When an association or maintenance window runs.
///
/// Accepts the three wire forms `cron(...)`, `rate(N unit)` and `at(...)`. The body of a cron
/// or at expression is kept verbatim since the service owns its grammar. Every value that can be
/// built renders to a string that parses back to the same value.
///
/// ```
/// use ssm::model::{RateUnit, ScheduleExpression};
///
/// let rate: ScheduleExpression = "rate(30 minutes)".parse().unwrap();
/// assert_eq!(rate, ScheduleExpression::rate(30, RateUnit::Minutes).unwrap());
///
/// let cron: ScheduleExpression = "cron(0 2 ? * SUN *)".parse().unwrap();
/// assert_eq!(cron, ScheduleExpression::cron("0 2 ? * SUN *").unwrap());
/// assert_eq!(cron.to_string(), "cron(0 2 ? * SUN *)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScheduleExpression {
    /// `cron(<fields>)`
    Cron(ScheduleBody),
    /// `rate(<value> <unit>)`
    Rate {
        /// How many units pass between runs.
        value: NonZeroU32,
        /// The unit of `value`.
        unit: RateUnit,
    },
    /// `at(<timestamp>)`, a single run.
    At(ScheduleBody),
}

impl ScheduleExpression {
    /// Creates a cron expression, failing if `fields` is blank.
    pub fn cron(fields: impl Into<String>) -> Result<Self, ParseScheduleError> {
        ScheduleBody::new("cron", fields.into()).map(ScheduleExpression::Cron)
    }

    /// Creates a rate expression, failing if `value` is zero.
    pub fn rate(value: u32, unit: RateUnit) -> Result<Self, ParseScheduleError> {
        match NonZeroU32::new(value) {
            Some(value) => Ok(ScheduleExpression::Rate { value, unit }),
            None => Err(ParseScheduleErrorKind::InvalidRate(format!(
                "rate({} {})",
                value,
                unit.as_str(value)
            ))
            .into()),
        }
    }

    /// Creates a one-time expression, failing if `timestamp` is blank.
    pub fn at(timestamp: impl Into<String>) -> Result<Self, ParseScheduleError> {
        ScheduleBody::new("at", timestamp.into()).map(ScheduleExpression::At)
    }
}

/// The verbatim body of a `cron(...)` or `at(...)` expression. Never blank.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScheduleBody(String);

impl ScheduleBody {
    fn new(kind: &str, body: String) -> Result<Self, ParseScheduleError> {
        if body.trim().is_empty() {
            return Err(ParseScheduleErrorKind::EmptyBody(format!("{}({})", kind, body)).into());
        }
        Ok(ScheduleBody(body))
    }

    /// Returns the body without the surrounding `cron(` / `at(` and `)`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ScheduleBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScheduleBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn body<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    input.strip_prefix(prefix)?.strip_suffix(')')
}

fn parse_rate(input: &str, rate: &str) -> Result<ScheduleExpression, ParseScheduleError> {
    let invalid = || ParseScheduleError::from(ParseScheduleErrorKind::InvalidRate(input.to_owned()));
    let mut parts = rate.split(' ');
    let (value, unit) = match (parts.next(), parts.next(), parts.next()) {
        (Some(value), Some(unit), None) => (value, unit),
        _ => return Err(invalid()),
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let value = value
        .parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(invalid)?;
    let unit = RateUnit::parse(unit, value.get()).ok_or_else(invalid)?;
    Ok(ScheduleExpression::Rate { value, unit })
}

impl FromStr for ScheduleExpression {
    type Err = ParseScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseScheduleErrorKind::Empty.into());
        }
        if let Some(cron) = body(s, "cron(") {
            return ScheduleExpression::cron(cron);
        }
        if let Some(at) = body(s, "at(") {
            return ScheduleExpression::at(at);
        }
        if let Some(rate) = body(s, "rate(") {
            return parse_rate(s, rate);
        }
        Err(ParseScheduleErrorKind::Unrecognized(s.to_owned()).into())
    }
}

impl fmt::Display for ScheduleExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleExpression::Cron(cron) => write!(f, "cron({})", cron),
            ScheduleExpression::Rate { value, unit } => {
                write!(f, "rate({} {})", value, unit.as_str(value.get()))
            }
            ScheduleExpression::At(at) => write!(f, "at({})", at),
        }
    }
}

impl smithy_types::display::DisplayValue for ScheduleExpression {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl TryFrom<&str> for ScheduleExpression {
    type Error = ParseScheduleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for ScheduleExpression {
    type Error = ParseScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScheduleExpression> for String {
    fn from(value: ScheduleExpression) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseScheduleErrorKind {
    Empty,
    EmptyBody(String),
    InvalidRate(String),
    Unrecognized(String),
}

/// Error returned when a string is not a valid [`ScheduleExpression`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseScheduleError {
    kind: ParseScheduleErrorKind,
}

impl From<ParseScheduleErrorKind> for ParseScheduleError {
    fn from(kind: ParseScheduleErrorKind) -> Self {
        Self { kind }
    }
}

impl fmt::Display for ParseScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseScheduleErrorKind::*;
        match &self.kind {
            Empty => write!(f, "schedule expression cannot be empty"),
            EmptyBody(value) => write!(f, "schedule expression `{}` has an empty body", value),
            InvalidRate(value) => write!(
                f,
                "invalid rate expression `{}`: expected `rate(N minute|minutes|hour|hours|day|days)` with N > 0",
                value
            ),
            Unrecognized(value) => write!(
                f,
                "`{}` is not a schedule expression: expected cron(...), rate(...) or at(...)",
                value
            ),
        }
    }
}

impl StdError for ParseScheduleError {}

#[cfg(test)]
mod test {
    use super::{RateUnit, ScheduleExpression};
    use proptest::prelude::*;
    use std::num::NonZeroU32;

    #[test]
    fn parse_each_form() {
        let cron = "cron(0 0 ? * SUN *)".parse::<ScheduleExpression>().unwrap();
        assert_eq!(cron, ScheduleExpression::cron("0 0 ? * SUN *").unwrap());
        match &cron {
            ScheduleExpression::Cron(fields) => assert_eq!(fields.as_str(), "0 0 ? * SUN *"),
            other => panic!("expected a cron expression, got {:?}", other),
        }
        assert_eq!(
            "at(2020-07-07T15:55:00)".parse::<ScheduleExpression>().unwrap(),
            ScheduleExpression::at("2020-07-07T15:55:00").unwrap()
        );
        assert_eq!(
            "rate(1 day)".parse::<ScheduleExpression>().unwrap(),
            ScheduleExpression::Rate {
                value: NonZeroU32::new(1).unwrap(),
                unit: RateUnit::Days
            }
        );
        assert_eq!(
            "rate(12 hours)".parse::<ScheduleExpression>().unwrap(),
            ScheduleExpression::rate(12, RateUnit::Hours).unwrap()
        );
    }

    #[test]
    fn rate_unit_must_agree_with_value() {
        assert!("rate(1 minutes)".parse::<ScheduleExpression>().is_err());
        assert!("rate(2 minute)".parse::<ScheduleExpression>().is_err());
        assert!("rate(1 minute)".parse::<ScheduleExpression>().is_ok());
    }

    #[test]
    fn reject_malformed() {
        for invalid in &[
            "",
            "cron()",
            "cron(   )",
            "cron(0 0 * * ? *",
            "CRON(0 0 * * ? *)",
            "at()",
            "rate()",
            "rate(0 minutes)",
            "rate(-5 minutes)",
            "rate(5)",
            "rate(5 weeks)",
            "rate(5  minutes)",
            "rate(5 minutes extra)",
            "rate(99999999999 days)",
            "every 5 minutes",
        ] {
            assert!(
                invalid.parse::<ScheduleExpression>().is_err(),
                "`{}` should be rejected",
                invalid
            );
        }
    }

    #[test]
    fn constructors_reject_what_the_parser_rejects() {
        assert_eq!(
            ScheduleExpression::rate(1, RateUnit::Hours).unwrap().to_string(),
            "rate(1 hour)"
        );
        let err = ScheduleExpression::rate(0, RateUnit::Hours).unwrap_err();
        assert!(err.to_string().contains("rate(0 hours)"));

        let err = ScheduleExpression::cron("  ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "schedule expression `cron(  )` has an empty body"
        );
        assert!(ScheduleExpression::cron("").is_err());
        assert!(ScheduleExpression::at("").is_err());
    }

    #[test]
    fn serde_uses_the_wire_string() {
        let schedule = ScheduleExpression::rate(30, RateUnit::Minutes).unwrap();
        assert_eq!(
            serde_json::to_string(&schedule).unwrap(),
            r#""rate(30 minutes)""#
        );
        assert_eq!(
            serde_json::from_str::<ScheduleExpression>(r#""rate(30 minutes)""#).unwrap(),
            schedule
        );
        assert!(serde_json::from_str::<ScheduleExpression>(r#""weekly""#).is_err());
    }

    #[test]
    fn serde_round_trips_the_boundaries() {
        for schedule in [
            ScheduleExpression::rate(1, RateUnit::Minutes).unwrap(),
            ScheduleExpression::rate(2, RateUnit::Minutes).unwrap(),
            ScheduleExpression::rate(u32::MAX, RateUnit::Days).unwrap(),
            ScheduleExpression::cron("x").unwrap(),
            ScheduleExpression::cron(" 0 0 * * ? * ").unwrap(),
            ScheduleExpression::at("2020-07-07T15:55:00").unwrap(),
        ] {
            let json = serde_json::to_string(&schedule).unwrap();
            assert_eq!(
                serde_json::from_str::<ScheduleExpression>(&json).unwrap(),
                schedule
            );
        }
    }

    fn unit() -> impl Strategy<Value = RateUnit> {
        prop_oneof![
            Just(RateUnit::Minutes),
            Just(RateUnit::Hours),
            Just(RateUnit::Days)
        ]
    }

    proptest! {
        #[test]
        fn every_buildable_rate_survives_serde(value in any::<u32>(), unit in unit()) {
            match ScheduleExpression::rate(value, unit) {
                Ok(schedule) => {
                    let json = serde_json::to_string(&schedule).unwrap();
                    prop_assert_eq!(
                        serde_json::from_str::<ScheduleExpression>(&json).unwrap(),
                        schedule
                    );
                }
                Err(_) => prop_assert_eq!(value, 0),
            }
        }

        #[test]
        fn every_buildable_cron_round_trips(fields in "\\PC*") {
            if let Ok(schedule) = ScheduleExpression::cron(fields.clone()) {
                prop_assert_eq!(schedule.to_string().parse::<ScheduleExpression>().unwrap(), schedule);
            } else {
                prop_assert!(fields.trim().is_empty());
            }
        }
    }
}
