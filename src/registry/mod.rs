//! ClinGen Allele Registry client.
//!
//! This module resolves HGVS variant descriptions to canonical allele
//! identifiers using the ClinGen Allele Registry. It provides the
//! [`AlleleResolver`] trait as the seam between the pipeline and the
//! registry, an HTTP implementation ([`RegistryClient`]), and an in-memory
//! mock ([`MockResolver`]) for testing.
//!
//! # Resolution contract
//!
//! Resolution never fails: transport errors, non-success statuses, and
//! undecodable bodies all yield an empty identifier list. The pipeline
//! decides whether an empty result is fatal.
//!
//! # Example
//!
//! ```
//! use ferro_mave::registry::{AlleleResolver, MockResolver};
//!
//! let mut resolver = MockResolver::new();
//! resolver.add_allele("NM_000251.3:c.2197G>A", "CA034588");
//!
//! let ids = resolver.resolve("NM_000251.3:c.2197G>A");
//! assert_eq!(ids.len(), 1);
//! assert_eq!(ids[0].as_str(), "CA034588");
//! ```
//!
//! # References
//!
//! - [ClinGen Allele Registry](https://reg.clinicalgenome.org/)

mod client;
mod resolver;
mod types;

pub use client::RegistryClient;
pub use resolver::{AlleleResolver, MockResolver};
pub use types::{AlleleId, AlleleResource};

/// Default base URL for the ClinGen Allele Registry.
pub const DEFAULT_REGISTRY_URL: &str = "https://reg.clinicalgenome.org";
