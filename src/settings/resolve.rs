//! Preference-to-settings resolution.
//!
//! `resolve` merges a precedence-ordered stack of sparse [`Preferences`]
//! layers against one adapter's [`AdapterProfile`] into a fully populated
//! [`Settings`] value. Resolution is pure and never fails: every setting ends
//! up with a value that satisfies the adapter's constraints, in the worst
//! case the adapter's own default.

use std::collections::BTreeMap;
use std::mem::discriminant;

use crate::settings::preferences::Preferences;
use crate::settings::profile::AdapterProfile;
use crate::settings::value::{keys, Axis, Fit, ReadingProgression, SettingKey, Spread, Value};

/// Fully resolved, constraint-satisfying values for one adapter.
///
/// Rebuilt from scratch by every [`resolve`] call; never partially
/// constructed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    values: BTreeMap<SettingKey, Value>,
}

impl Settings {
    pub fn get(&self, key: &SettingKey) -> Option<&Value> {
        self.values.get(key)
    }

    /// Iterate resolved values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&SettingKey, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn fit(&self) -> Option<Fit> {
        self.get(&keys::FIT).and_then(Value::as_fit)
    }

    pub fn axis(&self) -> Option<Axis> {
        self.get(&keys::AXIS).and_then(Value::as_axis)
    }

    pub fn reading_progression(&self) -> Option<ReadingProgression> {
        self.get(&keys::READING_PROGRESSION)
            .and_then(Value::as_progression)
    }

    pub fn spread(&self) -> Option<Spread> {
        self.get(&keys::SPREAD).and_then(Value::as_spread)
    }

    pub fn scroll(&self) -> Option<bool> {
        self.get(&keys::SCROLL).and_then(Value::as_bool)
    }

    pub fn page_spacing(&self) -> Option<f64> {
        self.get(&keys::PAGE_SPACING).and_then(Value::as_number)
    }
}

/// Resolve `layers` (lowest to highest precedence) against `profile`.
///
/// Per setting, the highest-precedence stated preference wins and is then
/// validated against the declared constraint; settings no layer states fall
/// back to the adapter default. Each setting resolves independently; the
/// profile's reconciliation pass, if any, runs once after every value is
/// final, so per-setting resolution stays order-independent and idempotent.
pub fn resolve(profile: &AdapterProfile, layers: &[Preferences]) -> Settings {
    let mut values = BTreeMap::new();

    for (key, default) in profile.entries() {
        let chosen = layers.iter().rev().find_map(|layer| layer.get(key));
        let value = match (chosen, profile.constraint(key)) {
            (Some(chosen), Some(constraint)) => constraint.apply(chosen, default),
            // Unconstrained settings still reject values of the wrong shape.
            (Some(chosen), None) if discriminant(chosen) == discriminant(default) => {
                chosen.clone()
            }
            (Some(_), None) => default.clone(),
            (None, _) => default.clone(),
        };
        values.insert(key.clone(), value);
    }

    if let Some(reconcile) = profile.reconcile() {
        reconcile(profile, &mut values);
    }

    Settings { values }
}
