//! Lazily computed pagination.
//!
//! Computing positions can require reading the whole source, so it is deferred
//! until the first query and then cached for the lifetime of the publication
//! (documents are immutable once opened). The cache is a single slot published
//! through a [`OnceLock`]: the first successful computation wins, later reads
//! are lock-free. A failed computation publishes nothing, so a later call may
//! retry.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use crate::error::PositionsError;
use crate::provider::CapabilityProvider;

/// One addressable locator within a publication's linear extent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Zero-based sequence index, strictly increasing across the list.
    pub index: u32,
    /// Normalized progression in `[0, 1]`: `index / unit_count`.
    pub progression: f64,
    /// Display label for the unit (e.g. "iv", "23"), when the source has one.
    pub page_label: Option<String>,
}

/// Compute-once position list bound to one capability provider.
pub struct Positions {
    provider: Arc<dyn CapabilityProvider>,
    cache: OnceLock<Vec<Position>>,
    compute: Mutex<()>,
}

impl Positions {
    pub(crate) fn new(provider: Arc<dyn CapabilityProvider>) -> Self {
        Self {
            provider,
            cache: OnceLock::new(),
            compute: Mutex::new(()),
        }
    }

    /// The ordered position list, computing it on first call.
    ///
    /// Concurrent first callers serialize on an internal guard so the provider
    /// is queried at most once per successful computation; once a result is
    /// published, reads take no lock.
    pub fn get(&self) -> Result<&[Position], PositionsError> {
        if let Some(cached) = self.cache.get() {
            return Ok(cached);
        }
        let _guard = self.lock_compute();
        // A concurrent caller may have published while we waited.
        if let Some(cached) = self.cache.get() {
            return Ok(cached);
        }
        let computed = self.compute_positions()?;
        Ok(self.cache.get_or_init(|| computed))
    }

    /// Whether the list has been computed yet (never triggers computation).
    pub fn is_computed(&self) -> bool {
        self.cache.get().is_some()
    }

    fn lock_compute(&self) -> MutexGuard<'_, ()> {
        match self.compute.lock() {
            Ok(guard) => guard,
            // The guard protects no data, only the compute critical section,
            // so a panic in another computation does not invalidate it.
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn compute_positions(&self) -> Result<Vec<Position>, PositionsError> {
        let count = self
            .provider
            .unit_count()
            .map_err(|err| PositionsError::ComputationFailed(err.to_string()))?;

        match count {
            Some(count) if count > 1 => Ok((0..count)
                .map(|index| Position {
                    index,
                    progression: f64::from(index) / f64::from(count),
                    page_label: self.provider.page_label(index),
                })
                .collect()),
            Some(1) => Ok(vec![Position {
                index: 0,
                progression: 0.0,
                page_label: self.provider.page_label(0),
            }]),
            // Zero or unknown unit count: one position covering the whole
            // document.
            _ => Ok(vec![Position {
                index: 0,
                progression: 0.0,
                page_label: None,
            }]),
        }
    }
}

impl fmt::Debug for Positions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cache.get() {
            Some(positions) => f
                .debug_struct("Positions")
                .field("computed", &positions.len())
                .finish(),
            None => f.debug_struct("Positions").field("computed", &false).finish(),
        }
    }
}
