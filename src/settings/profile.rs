//! Adapter capability declarations.
//!
//! Each rendering adapter registers one [`AdapterProfile`]: the settings it
//! supports, their defaults, and the legal domain for each ([`Constraint`]).
//! Registration validates the table eagerly so resolution can never fail;
//! a default that violates its own constraint is a bug in the adapter and is
//! rejected on the spot.

use std::collections::BTreeMap;

use crate::error::ProfileError;
use crate::settings::value::{keys, SettingKey, Value};

/// Legal domain for one setting.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Value must be one of a non-empty allowed set.
    OneOf(Vec<Value>),
    /// Numeric value clamped to `[min, max]` and snapped to multiples of
    /// `step` counted from `min`. A step of zero means clamp only.
    Range { min: f64, max: f64, step: f64 },
}

impl Constraint {
    /// Validate `chosen` against this constraint, substituting `default` when
    /// the value cannot be made legal.
    ///
    /// Enumerated: membership or the default, never an arbitrary member of
    /// the allowed set. Numeric: clamp, then snap to the nearest step with
    /// ties rounding away from the lower bound.
    pub(crate) fn apply(&self, chosen: &Value, default: &Value) -> Value {
        match self {
            Constraint::OneOf(allowed) => {
                if allowed.contains(chosen) {
                    chosen.clone()
                } else {
                    default.clone()
                }
            }
            Constraint::Range { min, max, step } => match chosen.as_number() {
                // NaN carries no intent to clamp; it falls back like a value
                // of the wrong shape.
                Some(number) if !number.is_nan() => {
                    Value::Number(snap(number, *min, *max, *step))
                }
                _ => default.clone(),
            },
        }
    }

    fn check(&self, key: &SettingKey, default: &Value) -> Result<(), ProfileError> {
        match self {
            Constraint::OneOf(allowed) => {
                if allowed.is_empty() {
                    return Err(ProfileError::EmptyChoices {
                        key: key.to_string(),
                    });
                }
                // Membership must be tested directly: `apply` substitutes the
                // default for out-of-set values, so a round-trip through it
                // cannot detect a default that is itself out of set.
                if !allowed.contains(default) {
                    return Err(ProfileError::DefaultViolatesConstraint {
                        key: key.to_string(),
                    });
                }
            }
            Constraint::Range { min, max, step } => {
                if !min.is_finite() || !max.is_finite() || min > max || *step < 0.0 {
                    return Err(ProfileError::InvalidRange {
                        key: key.to_string(),
                    });
                }
                // The default must survive its own validation unchanged,
                // otherwise the resolver's fallback guarantee does not hold.
                if self.apply(default, default) != *default {
                    return Err(ProfileError::DefaultViolatesConstraint {
                        key: key.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Clamp to `[min, max]`, then snap to the nearest multiple of `step` counted
/// from `min`, rounding half away from the lower bound.
fn snap(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let clamped = value.clamp(min, max);
    if step <= 0.0 {
        return clamped;
    }
    let steps = ((clamped - min) / step).round();
    (min + steps * step).clamp(min, max)
}

/// Cross-setting reconciliation hook, applied after all per-setting values
/// are validated. Receives the profile so rules can consult declared
/// constraints.
pub type ReconcileFn = fn(&AdapterProfile, &mut BTreeMap<SettingKey, Value>);

/// One adapter's declared settings table: defaults, constraints, and an
/// optional reconciliation pass.
#[derive(Debug, Clone)]
pub struct AdapterProfile {
    defaults: BTreeMap<SettingKey, Value>,
    constraints: BTreeMap<SettingKey, Constraint>,
    reconcile: Option<ReconcileFn>,
}

impl AdapterProfile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    /// Keys this adapter supports, in deterministic order.
    pub fn keys(&self) -> impl Iterator<Item = &SettingKey> {
        self.defaults.keys()
    }

    pub fn default_for(&self, key: &SettingKey) -> Option<&Value> {
        self.defaults.get(key)
    }

    /// Supported keys with their defaults, in deterministic order.
    pub fn entries(&self) -> impl Iterator<Item = (&SettingKey, &Value)> {
        self.defaults.iter()
    }

    pub fn constraint(&self, key: &SettingKey) -> Option<&Constraint> {
        self.constraints.get(key)
    }

    pub(crate) fn reconcile(&self) -> Option<ReconcileFn> {
        self.reconcile
    }
}

/// Builder for [`AdapterProfile`]; `register` performs the eager validation.
#[derive(Debug, Default)]
pub struct ProfileBuilder {
    defaults: BTreeMap<SettingKey, Value>,
    constraints: BTreeMap<SettingKey, Constraint>,
    reconcile: Option<ReconcileFn>,
}

impl ProfileBuilder {
    /// Declare an unconstrained setting with its default.
    pub fn setting(mut self, key: impl Into<SettingKey>, default: impl Into<Value>) -> Self {
        self.defaults.insert(key.into(), default.into());
        self
    }

    /// Declare a constrained setting with its default.
    pub fn constrained(
        mut self,
        key: impl Into<SettingKey>,
        default: impl Into<Value>,
        constraint: Constraint,
    ) -> Self {
        let key = key.into();
        self.defaults.insert(key.clone(), default.into());
        self.constraints.insert(key, constraint);
        self
    }

    /// Install a cross-setting reconciliation pass.
    pub fn reconcile(mut self, reconcile: ReconcileFn) -> Self {
        self.reconcile = Some(reconcile);
        self
    }

    /// Validate the declared table and produce the immutable profile.
    pub fn register(self) -> Result<AdapterProfile, ProfileError> {
        for (key, constraint) in &self.constraints {
            let default = self
                .defaults
                .get(key)
                .ok_or_else(|| ProfileError::MissingDefault {
                    key: key.to_string(),
                })?;
            constraint.check(key, default)?;
        }
        Ok(AdapterProfile {
            defaults: self.defaults,
            constraints: self.constraints,
            reconcile: self.reconcile,
        })
    }
}

/// Canonical fixed-layout coupling: scrolling disables page spacing and
/// first-page offsetting.
///
/// When `scroll` resolves to `true`, `pageSpacing` is forced to its range
/// minimum (or `0` when unconstrained) and `offsetFirstPage` to `false`.
/// Adapters with this coupling install the rule via
/// [`ProfileBuilder::reconcile`].
pub fn fixed_layout_reconcile(profile: &AdapterProfile, values: &mut BTreeMap<SettingKey, Value>) {
    let scrolling = values
        .get(&keys::SCROLL)
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !scrolling {
        return;
    }

    if values.contains_key(&keys::PAGE_SPACING) {
        let minimum = match profile.constraint(&keys::PAGE_SPACING) {
            Some(Constraint::Range { min, .. }) => *min,
            _ => 0.0,
        };
        values.insert(keys::PAGE_SPACING, Value::Number(minimum));
    }
    if values.contains_key(&keys::OFFSET_FIRST_PAGE) {
        values.insert(keys::OFFSET_FIRST_PAGE, Value::Bool(false));
    }
}
