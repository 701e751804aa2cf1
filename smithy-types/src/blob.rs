/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Binary Blob Type
///
/// Blobs represent protocol-agnostic binary content.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    /// Creates a new blob from the given `input`.
    pub fn new<T: Into<Vec<u8>>>(input: T) -> Self {
        Blob {
            inner: input.into(),
        }
    }

    /// Consumes the `Blob` and returns a `Vec<u8>` with its contents.
    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }

    /// Returns the number of bytes in the blob.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the blob holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<Vec<u8>> for Blob {
    fn from(value: Vec<u8>) -> Self {
        Blob::new(value)
    }
}

impl From<&[u8]> for Blob {
    fn from(value: &[u8]) -> Self {
        Blob::new(value)
    }
}

impl From<&str> for Blob {
    fn from(value: &str) -> Self {
        Blob::new(value.as_bytes())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Blob;
    use serde::de::{Error, Visitor};
    use std::fmt;

    /// Blobs are base64 encoded strings in the JSON protocols.
    impl serde::Serialize for Blob {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(&base64::encode(&self.inner))
        }
    }

    struct BlobVisitor;

    impl<'de> Visitor<'de> for BlobVisitor {
        type Value = Blob;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a base64 encoded string")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            base64::decode(v).map(Blob::new).map_err(E::custom)
        }
    }

    impl<'de> serde::Deserialize<'de> for Blob {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(BlobVisitor)
        }
    }

    #[cfg(test)]
    mod test {
        use crate::Blob;

        #[test]
        fn base64_on_the_wire() {
            let blob = Blob::new("hello");
            let json = serde_json::to_string(&blob).unwrap();
            assert_eq!(json, r#""aGVsbG8=""#);
            assert_eq!(serde_json::from_str::<Blob>(&json).unwrap(), blob);
            assert!(serde_json::from_str::<Blob>(r#""not base64!""#).is_err());
        }
    }
}

#[cfg(test)]
mod test {
    use super::Blob;

    #[test]
    fn blob_conversions() {
        let blob = Blob::from("abc");
        assert_eq!(blob.as_ref(), b"abc");
        assert_eq!(blob.len(), 3);
        assert!(!blob.is_empty());
        assert_eq!(Blob::from(vec![1u8, 2]).into_inner(), vec![1, 2]);
        assert!(Blob::default().is_empty());
    }
}
