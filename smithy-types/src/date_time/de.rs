/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::{DateTime, Format};
use serde::de::{Error, Visitor};
use std::fmt;

struct DateTimeVisitor;

impl<'de> Visitor<'de> for DateTimeVisitor {
    type Value = DateTime;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("epoch seconds or an RFC-3339 date-time")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(DateTime::from_secs(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        i64::try_from(v)
            .map(DateTime::from_secs)
            .map_err(|_| E::custom("epoch seconds out of range"))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        if v.is_finite() {
            Ok(DateTime::from_secs_f64(v))
        } else {
            Err(E::custom("epoch seconds must be finite"))
        }
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        DateTime::from_str(v, Format::DateTime)
            .or_else(|_| DateTime::from_str(v, Format::EpochSeconds))
            .map_err(E::custom)
    }
}

impl<'de> serde::Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(DateTimeVisitor)
    }
}

#[cfg(test)]
mod test {
    use crate::DateTime;

    #[test]
    fn deserialize_epoch_seconds() {
        let datetime: DateTime = serde_json::from_str("1576540098").unwrap();
        assert_eq!(datetime, DateTime::from_secs(1576540098));

        let datetime: DateTime = serde_json::from_str("1576540098.5").unwrap();
        assert_eq!(datetime, DateTime::from_secs_and_nanos(1576540098, 500_000_000));
    }

    #[test]
    fn deserialize_rfc3339() {
        let datetime: DateTime = serde_json::from_str(r#""2019-12-16T23:48:18Z""#).unwrap();
        assert_eq!(datetime, DateTime::from_secs(1576540098));
    }

    #[test]
    fn deserialize_garbage() {
        assert!(serde_json::from_str::<DateTime>(r#""yesterday""#).is_err());
        assert!(serde_json::from_str::<DateTime>("true").is_err());
    }
}
