//! Display preference and settings resolution.
//!
//! This module contains:
//! - Shared value domain ([`Value`], [`SettingKey`], the fit/axis/spread enums)
//! - Sparse preference layers ([`Preferences`]) with copy-on-edit semantics
//! - Adapter capability declarations ([`AdapterProfile`], [`Constraint`])
//! - The pure [`resolve`] function producing validated [`Settings`]

mod preferences;
mod profile;
mod resolve;
mod value;

pub use preferences::Preferences;
pub use profile::{fixed_layout_reconcile, AdapterProfile, Constraint, ProfileBuilder, ReconcileFn};
pub use resolve::{resolve, Settings};
pub use value::{keys, Axis, Fit, ReadingProgression, SettingKey, Spread, Value};
