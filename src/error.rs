//! Error types for ferro-mave.
//!
//! The lookup pipeline distinguishes transient upstream failures, legitimate
//! not-found results, upstream schema breakage, and missing required linkage
//! between records. Only the allele registry swallows transport errors (its
//! resolver contract is infallible); everywhere else they surface here.

use thiserror::Error;

/// Main error type for ferro-mave operations.
#[derive(Error, Debug)]
pub enum MaveLookupError {
    /// No canonical allele identifier could be resolved for a variant.
    ///
    /// This aborts the whole run: an unresolvable input row means the
    /// remaining output could not be joined back to its query.
    #[error("No allele ID for {hgvs}")]
    NoAlleleFound { hgvs: String },

    /// A measurement references a score set the API does not have.
    #[error("Missing score set {urn} for variant (URN {variant_urn})")]
    MissingScoreSet { urn: String, variant_urn: String },

    /// A score set carries no parent experiment.
    #[error("Missing experiment for score set {score_set_urn}")]
    MissingExperiment { score_set_urn: String },

    /// HTTP transport failure or non-success status outside the resolver.
    #[error("HTTP request to {url} failed: {msg}")]
    Http { url: String, msg: String },

    /// The response body did not have the documented shape.
    ///
    /// Treated as fatal because it signals an upstream contract change
    /// rather than missing data.
    #[error("Unexpected response from {url}: {msg}")]
    SchemaViolation { url: String, msg: String },

    /// The input table lacks a required column.
    #[error("Input is missing required column '{column}'")]
    MissingColumn { column: String },

    /// CSV read/write failure.
    #[error("CSV error: {msg}")]
    Csv { msg: String },

    /// File I/O failure.
    #[error("I/O error: {msg}")]
    Io { msg: String },
}

impl From<csv::Error> for MaveLookupError {
    fn from(e: csv::Error) -> Self {
        MaveLookupError::Csv { msg: e.to_string() }
    }
}

impl From<std::io::Error> for MaveLookupError {
    fn from(e: std::io::Error) -> Self {
        MaveLookupError::Io { msg: e.to_string() }
    }
}
