//! Shared setting value domain.
//!
//! Display preferences use fundamentally different value shapes across
//! rendering adapters, but the domain concepts recur (fit mode, scroll axis,
//! progression direction, spread). Those are modeled as closed enums shared by
//! every adapter, while [`SettingKey`] keeps the key space open so an adapter
//! can declare settings this crate has never heard of.

use std::borrow::Cow;
use std::fmt;

/// How a page is scaled into the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fit {
    Contain,
    Cover,
    Width,
    Height,
}

/// Main scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Direction the reading progression advances in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadingProgression {
    Ltr,
    Rtl,
}

/// Whether facing pages are displayed as a spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spread {
    Auto,
    Never,
    Always,
}

/// Name of one setting.
///
/// Keys are plain strings so adapters can extend the space; the well-known
/// ones live in [`keys`]. `Cow` lets the common constant case avoid
/// allocation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettingKey(Cow<'static, str>);

impl SettingKey {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for SettingKey {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

/// Well-known setting keys shared across adapters.
pub mod keys {
    use super::SettingKey;

    pub const FIT: SettingKey = SettingKey::from_static("fit");
    pub const AXIS: SettingKey = SettingKey::from_static("axis");
    pub const READING_PROGRESSION: SettingKey = SettingKey::from_static("readingProgression");
    pub const SPREAD: SettingKey = SettingKey::from_static("spread");
    pub const SCROLL: SettingKey = SettingKey::from_static("scroll");
    pub const PAGE_SPACING: SettingKey = SettingKey::from_static("pageSpacing");
    pub const OFFSET_FIRST_PAGE: SettingKey = SettingKey::from_static("offsetFirstPage");
}

/// One concrete setting value.
///
/// Closed tagged union over the shared domain concepts plus booleans and
/// bounded numbers; adapter-specific enumerations ride on the shared variants
/// or on [`Value::Number`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Bool(bool),
    Number(f64),
    Fit(Fit),
    Axis(Axis),
    Progression(ReadingProgression),
    Spread(Spread),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_fit(&self) -> Option<Fit> {
        match self {
            Value::Fit(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_axis(&self) -> Option<Axis> {
        match self {
            Value::Axis(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_progression(&self) -> Option<ReadingProgression> {
        match self {
            Value::Progression(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_spread(&self) -> Option<Spread> {
        match self {
            Value::Spread(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<Fit> for Value {
    fn from(value: Fit) -> Self {
        Value::Fit(value)
    }
}

impl From<Axis> for Value {
    fn from(value: Axis) -> Self {
        Value::Axis(value)
    }
}

impl From<ReadingProgression> for Value {
    fn from(value: ReadingProgression) -> Self {
        Value::Progression(value)
    }
}

impl From<Spread> for Value {
    fn from(value: Spread) -> Self {
        Value::Spread(value)
    }
}
