/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors raised while constructing generated shapes.

use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
enum BuildErrorKind {
    /// A key was added to a map field that already contains it.
    DuplicateKey { field: &'static str, key: String },
}

/// An error that occurred while building a shape.
#[derive(Debug)]
pub struct BuildError {
    kind: BuildErrorKind,
}

impl BuildError {
    /// Creates an error for a duplicate key added to the map field `field`.
    pub fn duplicate_key(field: &'static str, key: impl Into<String>) -> Self {
        Self {
            kind: BuildErrorKind::DuplicateKey {
                field,
                key: key.into(),
            },
        }
    }

    /// Returns the name of the field the error refers to.
    pub fn field(&self) -> &'static str {
        match &self.kind {
            BuildErrorKind::DuplicateKey { field, .. } => *field,
        }
    }

    /// Returns the offending key if the error was caused by a duplicate map key.
    pub fn duplicate(&self) -> Option<&str> {
        match &self.kind {
            BuildErrorKind::DuplicateKey { key, .. } => Some(key),
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            BuildErrorKind::DuplicateKey { field, key } => {
                write!(f, "duplicated key `{}` provided for `{}`", key, field)
            }
        }
    }
}

impl StdError for BuildError {}

/// The error returned when strictly parsing a string into a generated enum fails.
///
/// Parsing fails for the empty string and for any value that is not one of the enum's known
/// wire values. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariantError {
    enum_name: &'static str,
    value: String,
}

impl UnknownVariantError {
    #[doc(hidden)]
    pub fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            enum_name,
            value: value.into(),
        }
    }

    /// Returns the name of the enum that was being parsed.
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    /// Returns the rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "cannot parse an empty string into {}", self.enum_name)
        } else {
            write!(f, "unknown variant `{}` for {}", self.value, self.enum_name)
        }
    }
}

impl StdError for UnknownVariantError {}

#[cfg(test)]
mod test {
    use super::{BuildError, UnknownVariantError};

    #[test]
    fn build_error_messages() {
        let err = BuildError::duplicate_key("parameters", "commands");
        assert_eq!(err.field(), "parameters");
        assert_eq!(err.duplicate(), Some("commands"));
        assert_eq!(
            err.to_string(),
            "duplicated key `commands` provided for `parameters`"
        );
    }

    #[test]
    fn unknown_variant_messages() {
        let err = UnknownVariantError::new("PingStatus", "");
        assert_eq!(err.to_string(), "cannot parse an empty string into PingStatus");

        let err = UnknownVariantError::new("PingStatus", "online");
        assert_eq!(err.enum_name(), "PingStatus");
        assert_eq!(err.value(), "online");
        assert_eq!(err.to_string(), "unknown variant `online` for PingStatus");
    }
}
