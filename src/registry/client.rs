//! HTTP client for the ClinGen Allele Registry.

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::MaveLookupError;
use crate::Result;

use super::resolver::AlleleResolver;
use super::types::{AlleleId, AlleleResponse};

/// Fixed per-request timeout for registry lookups.
const REGISTRY_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP client for the ClinGen Allele Registry.
///
/// Queries `GET {base}/allele?hgvs=<variant>` and extracts bare allele
/// identifiers from the returned resources. Any transport or decoding
/// failure resolves to an empty identifier list; the registry being down
/// must not abort a run on its own.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RegistryClient {
    /// Create a client against the given registry base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let client = reqwest::blocking::Client::builder()
            .timeout(REGISTRY_TIMEOUT)
            .build()
            .map_err(|e| MaveLookupError::Http {
                url: base_url.clone(),
                msg: format!("Failed to create HTTP client: {}", e),
            })?;
        Ok(Self { base_url, client })
    }

    /// The allele query URL for a variant, with the HGVS string encoded.
    fn allele_url(&self, hgvs: &str) -> Option<Url> {
        let mut url = Url::parse(&format!("{}/allele", self.base_url)).ok()?;
        url.query_pairs_mut().append_pair("hgvs", hgvs);
        Some(url)
    }

    /// Fetch allele resources for a variant, swallowing all failures.
    fn fetch_alleles(&self, hgvs: &str) -> Vec<AlleleId> {
        let Some(url) = self.allele_url(hgvs) else {
            debug!(hgvs, base_url = %self.base_url, "invalid registry URL");
            return Vec::new();
        };
        debug!(%url, "querying allele registry");

        let response = match self.client.get(url.clone()).send() {
            Ok(response) => response,
            Err(e) => {
                debug!(hgvs, error = %e, "allele registry request failed");
                return Vec::new();
            }
        };
        if !response.status().is_success() {
            debug!(hgvs, status = %response.status(), "allele registry returned error status");
            return Vec::new();
        }

        let decoded: AlleleResponse = match response.json() {
            Ok(decoded) => decoded,
            Err(e) => {
                debug!(hgvs, error = %e, "allele registry response did not decode");
                return Vec::new();
            }
        };

        decoded
            .into_resources()
            .iter()
            .filter_map(|resource| resource.allele_id())
            .collect()
    }
}

impl AlleleResolver for RegistryClient {
    fn resolve(&self, hgvs: &str) -> Vec<AlleleId> {
        self.fetch_alleles(hgvs)
    }
}
