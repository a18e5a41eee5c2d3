//! Partially specified display preferences.
//!
//! A [`Preferences`] value is one layer of reader intent: a sparse map where
//! an absent key means "defer to the next layer". Layers are immutable; edits
//! return a new layer, so a caller holding the previous one never observes a
//! change. A `BTreeMap` backs the layer to keep iteration order deterministic.

use std::collections::BTreeMap;

use crate::settings::value::{SettingKey, Value};

/// One immutable, sparse preference layer.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preferences {
    values: BTreeMap<SettingKey, Value>,
}

impl Preferences {
    /// An empty layer: every setting defers.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stated preference for `key`, if any.
    pub fn get(&self, key: &SettingKey) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterate stated preferences in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&SettingKey, &Value)> {
        self.values.iter()
    }

    /// A new layer with `key` set to `value`.
    ///
    /// No validation happens here; out-of-range values are accepted and
    /// corrected at resolution time, so intermediate states are always
    /// representable.
    pub fn with(&self, key: impl Into<SettingKey>, value: impl Into<Value>) -> Self {
        let mut values = self.values.clone();
        values.insert(key.into(), value.into());
        Self { values }
    }

    /// A new layer with `key` cleared (deferring to lower layers).
    pub fn without(&self, key: &SettingKey) -> Self {
        let mut values = self.values.clone();
        values.remove(key);
        Self { values }
    }

    /// Apply one incremental change: `Some` replaces, `None` clears.
    pub fn edit(&self, key: impl Into<SettingKey>, value: Option<Value>) -> Self {
        let key = key.into();
        match value {
            Some(value) => self.with(key, value),
            None => self.without(&key),
        }
    }
}

impl FromIterator<(SettingKey, Value)> for Preferences {
    fn from_iter<I: IntoIterator<Item = (SettingKey, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
