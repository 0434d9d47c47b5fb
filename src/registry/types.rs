//! Allele registry resource types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Registry identifiers the service returns before an allele is assigned.
///
/// A resource whose `@id` ends in one of these is treated as having no
/// identifier at all.
const UNASSIGNED_IDS: &[&str] = &["_:CA", "_:PA"];

/// A canonical allele identifier from the ClinGen Allele Registry.
///
/// Identifiers carry a type prefix: `CA` for canonical (DNA) alleles,
/// `PA` for protein alleles (e.g. `CA034588`, `PA2157`). The prefix is
/// used to tell which of several related identifiers is exact for a given
/// sequence type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlleleId(String);

impl AlleleId {
    /// Create an allele identifier from a bare registry ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The bare identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for canonical (DNA) allele identifiers (`CA` prefix).
    pub fn is_dna(&self) -> bool {
        self.0.starts_with("CA")
    }

    /// True for protein allele identifiers (`PA` prefix).
    pub fn is_protein(&self) -> bool {
        self.0.starts_with("PA")
    }

    /// Extract the bare identifier from a registry resource `@id` URL.
    ///
    /// The registry self-identifier looks like
    /// `http://reg.genome.network/allele/CA034588`; the bare ID is the
    /// substring after the final `/`. Unassigned placeholders (`_:CA`,
    /// `_:PA`) yield `None`.
    pub fn from_resource_id(id_url: &str) -> Option<Self> {
        let bare = id_url.rsplit('/').next().unwrap_or(id_url);
        if bare.is_empty() || UNASSIGNED_IDS.contains(&bare) {
            return None;
        }
        Some(Self(bare.to_string()))
    }
}

impl fmt::Display for AlleleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One allele resource from the registry.
///
/// Only the self-identifier is consumed; the rest of the resource
/// (transcript alleles, external records, ...) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AlleleResource {
    /// Resource self-identifier URL.
    #[serde(rename = "@id")]
    pub id: Option<String>,
}

impl AlleleResource {
    /// The bare allele identifier for this resource, if assigned.
    pub fn allele_id(&self) -> Option<AlleleId> {
        self.id.as_deref().and_then(AlleleId::from_resource_id)
    }
}

/// Registry responses arrive either as a single resource or as an array.
///
/// Both shapes normalize to a sequence of resources.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AlleleResponse {
    /// Array-shaped response.
    Many(Vec<AlleleResource>),
    /// Single-object response.
    One(AlleleResource),
}

impl AlleleResponse {
    /// Normalize to a sequence of allele resources.
    pub fn into_resources(self) -> Vec<AlleleResource> {
        match self {
            AlleleResponse::Many(resources) => resources,
            AlleleResponse::One(resource) => vec![resource],
        }
    }
}
