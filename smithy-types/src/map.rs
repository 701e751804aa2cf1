/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Map-valued shape fields.

use crate::error::BuildError;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Adds `key` to the map stored in `slot`, creating the map on first use.
///
/// Insertion is strictly additive: if `key` is already present the map is left untouched and a
/// [`BuildError`] naming `field` and `key` is returned.
pub fn insert_unique<V>(
    slot: &mut Option<BTreeMap<String, V>>,
    field: &'static str,
    key: String,
    value: V,
) -> Result<(), BuildError> {
    match slot.get_or_insert_with(BTreeMap::new).entry(key) {
        Entry::Occupied(existing) => {
            tracing::debug!(field, key = %existing.key(), "rejecting duplicate map key");
            Err(BuildError::duplicate_key(field, existing.key().clone()))
        }
        Entry::Vacant(vacant) => {
            vacant.insert(value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::insert_unique;
    use std::collections::BTreeMap;
    use tracing_test::traced_test;

    #[test]
    fn creates_map_lazily() {
        let mut slot: Option<BTreeMap<String, i32>> = None;
        insert_unique(&mut slot, "counts", "a".into(), 1).unwrap();
        assert_eq!(slot.unwrap().get("a"), Some(&1));
    }

    #[test]
    #[traced_test]
    fn duplicate_keys_are_rejected() {
        let mut slot: Option<BTreeMap<String, i32>> = None;
        insert_unique(&mut slot, "counts", "a".into(), 1).unwrap();
        let err = insert_unique(&mut slot, "counts", "a".into(), 2).unwrap_err();
        assert_eq!(err.to_string(), "duplicated key `a` provided for `counts`");
        assert_eq!(slot.as_ref().unwrap().get("a"), Some(&1));
        assert_eq!(slot.unwrap().len(), 1);
        assert!(logs_contain("rejecting duplicate map key"));
    }
}
