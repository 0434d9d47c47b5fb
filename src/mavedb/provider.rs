//! Effect measurement source trait and mock implementation.

use std::collections::HashMap;

use crate::registry::AlleleId;
use crate::Result;

use super::types::{EffectMeasurement, ScoreSet};

/// Source of variant effect measurements and score sets.
///
/// Unlike allele resolution, these operations surface transport failures:
/// a measurement or score set that cannot be fetched is an error, while a
/// 404 is a legitimate "not found" result.
pub trait EffectProvider {
    /// Fetch a score set by URN. `Ok(None)` means the score set does not
    /// exist; any other failure is an error.
    fn fetch_score_set(&self, urn: &str) -> Result<Option<ScoreSet>>;

    /// Fetch the effect measurements matched exactly to an allele ID.
    /// An unknown allele yields an empty vector.
    fn fetch_measurements(&self, allele_id: &AlleleId) -> Result<Vec<EffectMeasurement>>;
}

/// In-memory effect provider for testing.
///
/// # Example
///
/// ```
/// use ferro_mave::mavedb::{EffectProvider, MockEffectProvider, ScoreSet};
///
/// let mut provider = MockEffectProvider::new();
/// provider.add_score_set(ScoreSet {
///     urn: Some("urn:mavedb:00000050-a-1".to_string()),
///     ..Default::default()
/// });
/// assert!(provider.fetch_score_set("urn:mavedb:00000050-a-1").unwrap().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockEffectProvider {
    score_sets: HashMap<String, ScoreSet>,
    measurements: HashMap<String, Vec<EffectMeasurement>>,
}

impl MockEffectProvider {
    /// Create a new empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a score set, indexed by its URN.
    pub fn add_score_set(&mut self, score_set: ScoreSet) {
        let urn = score_set.urn.clone().unwrap_or_default();
        self.score_sets.insert(urn, score_set);
    }

    /// Register a measurement for an allele ID, preserving insertion order.
    pub fn add_measurement(&mut self, allele_id: impl Into<String>, measurement: EffectMeasurement) {
        self.measurements
            .entry(allele_id.into())
            .or_default()
            .push(measurement);
    }
}

impl EffectProvider for MockEffectProvider {
    fn fetch_score_set(&self, urn: &str) -> Result<Option<ScoreSet>> {
        Ok(self.score_sets.get(urn).cloned())
    }

    fn fetch_measurements(&self, allele_id: &AlleleId) -> Result<Vec<EffectMeasurement>> {
        Ok(self
            .measurements
            .get(allele_id.as_str())
            .cloned()
            .unwrap_or_default())
    }
}
