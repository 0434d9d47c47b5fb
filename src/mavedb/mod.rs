//! MaveDB variant effect database client.
//!
//! MaveDB hosts functional effect measurements from multiplexed assays of
//! variant effect (MAVEs), grouped into score sets with calibrated
//! interpretation ranges and experiment metadata. This module provides the
//! [`EffectProvider`] trait as the seam between the pipeline and the API, an
//! HTTP implementation ([`MaveDbClient`]), an in-memory mock
//! ([`MockEffectProvider`]), and the serde types for the consumed payloads.
//!
//! Two lookups are used:
//!
//! - score set by URN (`GET /score-sets/{urn}`; 404 means "not found" and is
//!   not an error)
//! - effect measurements by ClinGen allele ID
//!   (`POST /variants/clingen-allele-id-lookups`; only the first element's
//!   exact-match structure is consulted)
//!
//! # Example
//!
//! ```
//! use ferro_mave::mavedb::{EffectProvider, MockEffectProvider, ScoreSet};
//!
//! let mut provider = MockEffectProvider::new();
//! provider.add_score_set(ScoreSet {
//!     urn: Some("urn:mavedb:00000050-a-1".to_string()),
//!     title: Some("MSH2 deep mutational scan".to_string()),
//!     ..Default::default()
//! });
//!
//! let score_set = provider.fetch_score_set("urn:mavedb:00000050-a-1").unwrap();
//! assert!(score_set.is_some());
//! assert!(provider.fetch_score_set("urn:mavedb:missing").unwrap().is_none());
//! ```
//!
//! # References
//!
//! - [MaveDB](https://www.mavedb.org/)
//! - [MaveDB API](https://api.mavedb.org/docs)

mod client;
mod provider;
mod types;

pub use client::MaveDbClient;
pub use provider::{EffectProvider, MockEffectProvider};
pub use types::{
    Calibration, ControlledKeyword, EffectMeasurement, Experiment, ExperimentKeyword,
    MeasurementData, OddsPath, PublicationAuthor, PublicationIdentifier, ScoreRange, ScoreRanges,
    ScoreSet, ScoreSetRef, SourceIdentifier,
};

/// Default base URL for the MaveDB API.
pub const DEFAULT_MAVEDB_URL: &str = "https://api.mavedb.org/api/v1";
