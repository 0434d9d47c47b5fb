// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-mave: MaveDB variant effect lookup
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Resolves HGVS variant descriptions to canonical ClinGen allele
//! identifiers, fetches the matching MaveDB variant effect measurements,
//! classifies each functional score against the score set's calibrated
//! interpretation ranges, and flattens the results into one record per
//! measurement.
//!
//! # Example
//!
//! ```
//! use ferro_mave::{MockEffectProvider, MockResolver, VariantLookup};
//! use ferro_mave::mavedb::{EffectMeasurement, Experiment, ScoreSet, ScoreSetRef};
//!
//! let mut resolver = MockResolver::new();
//! resolver.add_allele("NM_000251.3:c.2197G>A", "CA034588");
//!
//! let mut effects = MockEffectProvider::new();
//! let mut score_data = serde_json::Map::new();
//! score_data.insert("score".to_string(), serde_json::json!(-1.25));
//! effects.add_measurement("CA034588", EffectMeasurement {
//!     urn: Some("urn:mavedb:00000050-a-1#44".to_string()),
//!     data: ferro_mave::mavedb::MeasurementData { score_data, ..Default::default() },
//!     score_set: ScoreSetRef { urn: "urn:mavedb:00000050-a-1".to_string() },
//! });
//! effects.add_score_set(ScoreSet {
//!     urn: Some("urn:mavedb:00000050-a-1".to_string()),
//!     experiment: Some(Experiment::default()),
//!     ..Default::default()
//! });
//!
//! let lookup = VariantLookup::new(resolver, effects);
//! let records = lookup.run(&["NM_000251.3:c.2197G>A".to_string()]).unwrap();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].score, -1.25);
//! ```

pub mod classify;
pub mod error;
pub mod keywords;
pub mod mavedb;
pub mod pipeline;
pub mod record;
pub mod registry;

// Re-export commonly used types
pub use error::MaveLookupError;
pub use mavedb::{EffectProvider, MaveDbClient, MockEffectProvider};
pub use pipeline::{read_variant_queries, write_records, VariantLookup};
pub use record::VariantEffectRecord;
pub use registry::{AlleleId, AlleleResolver, MockResolver, RegistryClient};

/// Result type alias for ferro-mave operations
pub type Result<T> = std::result::Result<T, MaveLookupError>;
