//! Error types for folio operations.

use thiserror::Error;

/// Errors that can occur while assembling a [`Publication`](crate::Publication)
/// from a source document.
///
/// Assembly is a classification boundary: any failure inside the opener or the
/// capability provider is caught and reclassified into one of these two kinds,
/// never propagated raw.
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// The source could not be opened or decoded at all (malformed container,
    /// unsupported encoding).
    #[error("unreadable source: {0}")]
    Unreadable(String),

    /// The source decoded but yielded zero readable units.
    #[error("source contains no readable units")]
    Empty,
}

/// Errors that can occur while computing positions.
///
/// A failed computation is not cached; a later call may retry.
#[derive(Error, Debug)]
pub enum PositionsError {
    /// The capability provider failed mid-read (e.g. an I/O error).
    #[error("position computation failed: {0}")]
    ComputationFailed(String),
}

/// Errors reported by [`DocumentOpener`](crate::DocumentOpener) and
/// [`CapabilityProvider`](crate::CapabilityProvider) implementations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed source: {0}")]
    Malformed(String),
}

/// Errors raised when registering an adapter profile whose declared table is
/// inconsistent.
///
/// These are programming-time invariant violations, reported eagerly by
/// [`ProfileBuilder::register`](crate::settings::ProfileBuilder::register) so
/// that resolution itself can never fail.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The declared default for a setting does not satisfy its own constraint.
    #[error("default for '{key}' violates its declared constraint")]
    DefaultViolatesConstraint { key: String },

    /// An enumerated constraint declared an empty allowed set.
    #[error("enumerated constraint for '{key}' has no allowed values")]
    EmptyChoices { key: String },

    /// A numeric constraint declared a non-finite or inverted range, or a
    /// negative step.
    #[error("numeric constraint for '{key}' has an invalid range")]
    InvalidRange { key: String },

    /// A constraint was declared for a setting with no default.
    #[error("no default declared for '{key}'")]
    MissingDefault { key: String },
}
