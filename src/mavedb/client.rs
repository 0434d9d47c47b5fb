//! HTTP client for the MaveDB API.

use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::MaveLookupError;
use crate::registry::AlleleId;
use crate::Result;

use super::provider::EffectProvider;
use super::types::{EffectMeasurement, ScoreSet};

/// Blocking HTTP client for the MaveDB REST API.
///
/// Requests inherit the client's default timeout; there is no retry. A 404
/// on either endpoint is a legitimate "not found" result, any other
/// non-success status is an error, and a response body outside the
/// documented shape is a fatal schema violation.
#[derive(Debug, Clone)]
pub struct MaveDbClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl MaveDbClient {
    /// Create a client against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| MaveLookupError::Http {
                url: base_url.clone(),
                msg: format!("Failed to create HTTP client: {}", e),
            })?;
        Ok(Self { base_url, client })
    }
}

impl EffectProvider for MaveDbClient {
    fn fetch_score_set(&self, urn: &str) -> Result<Option<ScoreSet>> {
        let url = format!("{}/score-sets/{}", self.base_url, urn);
        debug!(%url, "fetching score set");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| MaveLookupError::Http {
                url: url.clone(),
                msg: e.to_string(),
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(MaveLookupError::Http {
                url,
                msg: format!("HTTP {}", response.status()),
            });
        }

        let score_set = response
            .json::<ScoreSet>()
            .map_err(|e| MaveLookupError::SchemaViolation {
                url,
                msg: format!("score set did not decode: {}", e),
            })?;
        Ok(Some(score_set))
    }

    fn fetch_measurements(&self, allele_id: &AlleleId) -> Result<Vec<EffectMeasurement>> {
        let url = format!("{}/variants/clingen-allele-id-lookups", self.base_url);
        debug!(%url, allele_id = %allele_id, "fetching effect measurements");

        let body = json!({ "clingenAlleleIds": [allele_id.as_str()] });
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| MaveLookupError::Http {
                url: url.clone(),
                msg: e.to_string(),
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(MaveLookupError::Http {
                url,
                msg: format!("HTTP {}", response.status()),
            });
        }

        let value = response
            .json::<Value>()
            .map_err(|e| MaveLookupError::Http {
                url: url.clone(),
                msg: format!("response body did not decode: {}", e),
            })?;
        parse_lookup_response(&url, value)
    }
}

/// Extract exact-match measurements from a lookup response body.
///
/// The response must be an array of per-identifier matches; only the first
/// element's `exactMatch.variantEffectMeasurements` is consulted. An empty
/// array means the allele is unknown to MaveDB. Any other shape is a schema
/// violation.
fn parse_lookup_response(url: &str, value: Value) -> Result<Vec<EffectMeasurement>> {
    let Value::Array(matches) = value else {
        return Err(MaveLookupError::SchemaViolation {
            url: url.to_string(),
            msg: "expected JSON response to be a list".to_string(),
        });
    };
    let Some(first) = matches.into_iter().next() else {
        return Ok(Vec::new());
    };
    if !first.is_object() {
        return Err(MaveLookupError::SchemaViolation {
            url: url.to_string(),
            msg: "expected first array element to be an object".to_string(),
        });
    }

    let measurements = first
        .get("exactMatch")
        .and_then(|m| m.get("variantEffectMeasurements"))
        .cloned()
        .unwrap_or(Value::Null);
    if measurements.is_null() {
        return Ok(Vec::new());
    }

    serde_json::from_value(measurements).map_err(|e| MaveLookupError::SchemaViolation {
        url: url.to_string(),
        msg: format!("variant effect measurements did not decode: {}", e),
    })
}
