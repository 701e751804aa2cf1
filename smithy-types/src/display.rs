/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Helpers for the `Display` impls of generated shapes.
//!
//! A shape renders as `{FieldName: value, OtherField: value}`. Unset fields are skipped, so a
//! shape with nothing set renders as `{}`. Lists render as `[a, b]` and maps as `{k=v, k2=v2}`.

use crate::{Blob, DateTime};
use std::collections::BTreeMap;
use std::fmt;

/// Replacement text for fields modeled as sensitive.
pub const REDACTED: &str = "*** Sensitive Data Redacted ***";

/// A value that can appear inside a rendered shape.
///
/// Generated shapes and enums implement this by delegating to their `Display` impl.
pub trait DisplayValue {
    /// Writes the value into the formatter.
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! display_value_via_display {
    ($($ty:ty),+) => {
        $(
            impl DisplayValue for $ty {
                fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

display_value_via_display!(str, String, bool, i32, i64, u32, DateTime);

impl DisplayValue for Blob {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({} bytes)", self.len())
    }
}

impl<T: DisplayValue> DisplayValue for [T] {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            item.fmt_value(f)?;
        }
        f.write_str("]")
    }
}

impl<T: DisplayValue> DisplayValue for Vec<T> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt_value(f)
    }
}

impl<K: DisplayValue, V: DisplayValue> DisplayValue for BTreeMap<K, V> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (key, value)) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            key.fmt_value(f)?;
            f.write_str("=")?;
            value.fmt_value(f)?;
        }
        f.write_str("}")
    }
}

/// Renders the fields of a shape, modeled on [`fmt::DebugStruct`].
///
/// # Example
/// ```
/// use smithy_types::display::DisplayRecord;
/// use std::fmt;
///
/// struct Target {
///     key: Option<String>,
///     values: Option<Vec<String>>,
/// }
///
/// impl fmt::Display for Target {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         let mut record = DisplayRecord::new(f);
///         record.field("Key", self.key.as_deref());
///         record.field("Values", self.values.as_ref());
///         record.finish()
///     }
/// }
///
/// let target = Target { key: Some("tag:Env".to_string()), values: None };
/// assert_eq!(target.to_string(), "{Key: tag:Env}");
/// ```
#[must_use = "must eventually call `finish()` on DisplayRecord"]
pub struct DisplayRecord<'a, 'b: 'a> {
    fmt: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b: 'a> DisplayRecord<'a, 'b> {
    /// Starts rendering a shape.
    pub fn new(fmt: &'a mut fmt::Formatter<'b>) -> Self {
        let result = fmt.write_str("{");
        DisplayRecord {
            fmt,
            result,
            has_fields: false,
        }
    }

    /// Renders `name: value` if the value is set.
    pub fn field<T: DisplayValue + ?Sized>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        if let Some(value) = value {
            self.result = self.result.and_then(|_| {
                if self.has_fields {
                    self.fmt.write_str(", ")?;
                }
                self.fmt.write_str(name)?;
                self.fmt.write_str(": ")?;
                value.fmt_value(self.fmt)
            });
            self.has_fields = true;
        }
        self
    }

    /// Renders `name` with redacted contents if the value is set.
    pub fn redacted<T: ?Sized>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        if value.is_some() {
            self.field(name, Some(REDACTED));
        }
        self
    }

    /// Finishes the shape and returns any error encountered while writing.
    pub fn finish(&mut self) -> fmt::Result {
        self.result.and_then(|_| self.fmt.write_str("}"))
    }
}

impl fmt::Debug for DisplayRecord<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayRecord")
            .field("has_fields", &self.has_fields)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::{DisplayRecord, DisplayValue};
    use crate::{Blob, DateTime};
    use std::collections::BTreeMap;
    use std::fmt;

    struct Rendered<'a, T: ?Sized>(&'a T);

    impl<T: DisplayValue + ?Sized> fmt::Display for Rendered<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fmt_value(f)
        }
    }

    #[derive(Default)]
    struct Sample {
        name: Option<String>,
        count: Option<i32>,
        tags: Option<Vec<String>>,
        secret: Option<String>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut record = DisplayRecord::new(f);
            record.field("Name", self.name.as_deref());
            record.field("Count", self.count.as_ref());
            record.field("Tags", self.tags.as_ref());
            record.redacted("Secret", self.secret.as_ref());
            record.finish()
        }
    }

    #[test]
    fn empty_record() {
        assert_eq!(Sample::default().to_string(), "{}");
    }

    #[test]
    fn single_field_has_no_separator() {
        let sample = Sample {
            count: Some(3),
            ..Default::default()
        };
        assert_eq!(sample.to_string(), "{Count: 3}");
    }

    #[test]
    fn fields_render_in_order() {
        let sample = Sample {
            name: Some("n".into()),
            count: Some(-1),
            tags: Some(vec!["a".into(), "b".into()]),
            secret: Some("hunter2".into()),
        };
        assert_eq!(
            sample.to_string(),
            "{Name: n, Count: -1, Tags: [a, b], Secret: *** Sensitive Data Redacted ***}"
        );
    }

    #[test]
    fn collections() {
        let empty: Vec<String> = vec![];
        assert_eq!(Rendered(&empty).to_string(), "[]");

        let mut map = BTreeMap::new();
        map.insert("b".to_string(), vec!["2".to_string()]);
        map.insert("a".to_string(), vec!["1".to_string(), "1".to_string()]);
        assert_eq!(Rendered(&map).to_string(), "{a=[1, 1], b=[2]}");
    }

    #[test]
    fn scalars() {
        assert_eq!(Rendered(&true).to_string(), "true");
        assert_eq!(
            Rendered(&DateTime::from_secs(1576540098)).to_string(),
            "2019-12-16T23:48:18Z"
        );
        assert_eq!(Rendered(&Blob::new("abc")).to_string(), "Blob(3 bytes)");
    }
}
