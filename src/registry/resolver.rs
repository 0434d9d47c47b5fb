//! Allele resolution trait and mock implementation.

use std::collections::HashMap;

use super::types::AlleleId;

/// Resolves a variant description to canonical allele identifiers.
///
/// Implementations must not fail: an unreachable registry, an error status,
/// or an unassigned allele all produce an empty result. Identifiers are
/// returned in registry order.
pub trait AlleleResolver {
    /// Resolve an HGVS variant description to zero or more allele IDs.
    fn resolve(&self, hgvs: &str) -> Vec<AlleleId>;
}

/// In-memory resolver for testing.
///
/// # Example
///
/// ```
/// use ferro_mave::registry::{AlleleResolver, MockResolver};
///
/// let mut resolver = MockResolver::new();
/// resolver.add_allele("NM_000088.3:c.10A>G", "CA000123");
/// resolver.add_allele("NM_000088.3:c.10A>G", "PA000456");
///
/// let ids = resolver.resolve("NM_000088.3:c.10A>G");
/// assert_eq!(ids.len(), 2);
/// assert!(resolver.resolve("NM_999999.1:c.1A>G").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockResolver {
    alleles: HashMap<String, Vec<AlleleId>>,
}

impl MockResolver {
    /// Create a new empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an allele identifier for a variant.
    ///
    /// Repeated calls for the same variant append, preserving order.
    pub fn add_allele(&mut self, hgvs: impl Into<String>, id: impl Into<String>) {
        self.alleles
            .entry(hgvs.into())
            .or_default()
            .push(AlleleId::new(id));
    }
}

impl AlleleResolver for MockResolver {
    fn resolve(&self, hgvs: &str) -> Vec<AlleleId> {
        self.alleles.get(hgvs).cloned().unwrap_or_default()
    }
}
