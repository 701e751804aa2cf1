/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::DateTime;

/// Timestamps are written as epoch seconds, the default timestamp format of the JSON protocols.
impl serde::Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.has_subsec_nanos() {
            serializer.serialize_f64(self.as_secs_f64())
        } else {
            serializer.serialize_i64(self.seconds)
        }
    }
}

#[cfg(test)]
mod test {
    use crate::DateTime;

    #[test]
    fn whole_seconds_serialize_as_integers() {
        let datetime = DateTime::from_secs(1576540098);
        assert_eq!(serde_json::to_string(&datetime).unwrap(), "1576540098");
    }

    #[test]
    fn fractional_seconds_serialize_as_floats() {
        let datetime = DateTime::from_secs_and_nanos(1576540098, 500_000_000);
        assert_eq!(serde_json::to_string(&datetime).unwrap(), "1576540098.5");
    }
}
