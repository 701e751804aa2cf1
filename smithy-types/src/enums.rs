/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Support for the `Unknown` variant of generated enums.

use std::fmt;

/// Opaque holder for an enum value that the generated enum does not know about.
///
/// Services add enum values over time. Lenient conversions (`From<&str>`) keep such values in
/// the `Unknown` variant so that they survive a round trip, while strict parsing (`FromStr`)
/// rejects them.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UnknownVariantValue(String);

impl UnknownVariantValue {
    #[doc(hidden)]
    pub fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        tracing::debug!(enum_name, value = %value, "preserving unrecognized enum value");
        Self(value)
    }

    /// Returns the raw wire value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownVariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::UnknownVariantValue;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn unknown_values_are_logged() {
        let value = UnknownVariantValue::new("PingStatus", "Hibernating");
        assert_eq!(value.as_str(), "Hibernating");
        assert_eq!(value.to_string(), "Hibernating");
        assert!(logs_contain("preserving unrecognized enum value"));
        assert!(logs_contain("Hibernating"));
    }
}
