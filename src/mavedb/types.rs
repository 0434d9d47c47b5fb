//! MaveDB API payload types.
//!
//! Only the fields the lookup pipeline consumes are modeled; everything else
//! in the API responses is ignored during deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One variant effect measurement tied to a canonical allele.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectMeasurement {
    /// Measurement URN (e.g. `urn:mavedb:00000050-a-1#44`).
    pub urn: Option<String>,
    /// Score and count data for this measurement.
    #[serde(default)]
    pub data: MeasurementData,
    /// Reference to the parent score set.
    pub score_set: ScoreSetRef,
}

impl EffectMeasurement {
    /// The numeric functional score, if the measurement has one.
    pub fn score(&self) -> Option<f64> {
        self.data.score_data.get("score").and_then(Value::as_f64)
    }

    /// The score data block re-serialized as JSON text.
    pub fn score_data_json(&self) -> String {
        Value::Object(self.data.score_data.clone()).to_string()
    }

    /// The count data block as JSON text, or `None` when empty.
    pub fn count_data_json(&self) -> Option<String> {
        if self.data.count_data.is_empty() {
            None
        } else {
            Some(Value::Object(self.data.count_data.clone()).to_string())
        }
    }
}

/// Structured data attached to a measurement.
///
/// The wire keys are snake_case, unlike the rest of the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurementData {
    /// Score block; the `score` entry is the functional score.
    #[serde(default)]
    pub score_data: serde_json::Map<String, Value>,
    /// Raw count block, passed through to the output verbatim.
    #[serde(default)]
    pub count_data: serde_json::Map<String, Value>,
}

/// Parent score-set reference carried on each measurement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreSetRef {
    /// Score set URN.
    pub urn: String,
}

/// A MaveDB score set: one batch of measurements with shared provenance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSet {
    pub urn: Option<String>,
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub published_date: Option<String>,
    /// Primary publications describing the score set.
    #[serde(default)]
    pub primary_publication_identifiers: Vec<PublicationIdentifier>,
    /// Calibrated interpretation ranges, when a calibration exists.
    pub score_ranges: Option<ScoreRanges>,
    /// Parent experiment. Required linkage: a score set without one is a
    /// fatal condition for the pipeline.
    pub experiment: Option<Experiment>,
}

impl ScoreSet {
    /// The first primary publication, if any.
    pub fn primary_publication(&self) -> Option<&PublicationIdentifier> {
        self.primary_publication_identifiers.first()
    }
}

/// A publication citation attached to a score set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationIdentifier {
    pub db_name: Option<String>,
    pub identifier: Option<String>,
    #[serde(default)]
    pub authors: Vec<PublicationAuthor>,
    pub publication_year: Option<i32>,
    pub publication_journal: Option<String>,
}

impl PublicationIdentifier {
    /// Name of the author flagged as primary, if any.
    pub fn first_author(&self) -> Option<&str> {
        self.authors
            .iter()
            .find(|author| author.primary)
            .and_then(|author| author.name.as_deref())
    }
}

/// One author on a publication citation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicationAuthor {
    pub name: Option<String>,
    /// True for the publication's primary author.
    #[serde(default)]
    pub primary: bool,
}

/// Calibration container on a score set.
///
/// Several competing calibration methods may be present at once; selection
/// between them is by fixed priority (see [`crate::classify`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRanges {
    pub scott_calibration: Option<Calibration>,
    pub cvfg_all_variants: Option<Calibration>,
    pub investigator_provided: Option<Calibration>,
}

/// One calibration: an ordered set of labeled score ranges plus citations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calibration {
    /// Research-use-only calibrations are never reported.
    #[serde(default)]
    pub research_use_only: bool,
    /// Ranges in declared order; the first containing range wins.
    #[serde(default)]
    pub ranges: Vec<ScoreRange>,
    /// Citations for the calibration itself.
    #[serde(default)]
    pub source: Vec<SourceIdentifier>,
    /// Citations for the evidence-strength assignment. The wire key is
    /// spelled `odssPathSource` by the API.
    #[serde(rename = "odssPathSource", default)]
    pub odds_path_source: Vec<SourceIdentifier>,
}

impl Calibration {
    /// First calibration citation, if any.
    pub fn calibration_source(&self) -> Option<&SourceIdentifier> {
        self.source.first()
    }

    /// First evidence-strength citation, if any.
    pub fn evidence_strength_source(&self) -> Option<&SourceIdentifier> {
        self.odds_path_source.first()
    }
}

/// A labeled score interval with clinical-evidence annotations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRange {
    pub label: Option<String>,
    /// Classification tag (e.g. `abnormal`, `normal`).
    pub classification: Option<String>,
    /// `[min, max]` bounds; `null` on either side means unbounded. A range
    /// with no interval at all never matches.
    pub range: Option<(Option<f64>, Option<f64>)>,
    #[serde(default)]
    pub inclusive_lower_bound: bool,
    #[serde(default)]
    pub inclusive_upper_bound: bool,
    /// Odds-of-pathogenicity annotation for scores in this range.
    pub odds_path: Option<OddsPath>,
}

impl ScoreRange {
    /// The odds-of-pathogenicity ratio, if annotated.
    pub fn odds_path_ratio(&self) -> Option<f64> {
        self.odds_path.as_ref().and_then(|o| o.ratio)
    }

    /// The ACMG evidence-strength label, if annotated.
    pub fn evidence_strength(&self) -> Option<&str> {
        self.odds_path.as_ref().and_then(|o| o.evidence.as_deref())
    }
}

/// Odds-of-pathogenicity annotation on a score range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OddsPath {
    pub ratio: Option<f64>,
    /// ACMG evidence-strength label (e.g. `PS3_moderate`).
    pub evidence: Option<String>,
}

/// A database citation (`dbName` + identifier).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceIdentifier {
    pub db_name: Option<String>,
    pub identifier: Option<String>,
}

/// A MaveDB experiment: the parent record of one or more score sets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    pub urn: Option<String>,
    pub title: Option<String>,
    pub short_description: Option<String>,
    /// Controlled-vocabulary keywords describing the experiment method.
    /// Keys are not guaranteed unique; first match per key is canonical.
    #[serde(default)]
    pub keywords: Vec<ExperimentKeyword>,
}

/// One experiment keyword entry: a controlled term plus free-text detail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperimentKeyword {
    /// The controlled-vocabulary term.
    pub keyword: ControlledKeyword,
    /// Optional free-text description for this experiment.
    pub description: Option<String>,
}

impl ExperimentKeyword {
    /// Create a keyword entry from a vocabulary key and label.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            keyword: ControlledKeyword {
                key: key.into(),
                label: Some(label.into()),
            },
            description: None,
        }
    }

    /// Attach a free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The controlled-vocabulary label, if present.
    pub fn label(&self) -> Option<&str> {
        self.keyword.label.as_deref()
    }
}

/// A controlled-vocabulary term.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControlledKeyword {
    /// Vocabulary key (e.g. `variant-library-creation-method`).
    pub key: String,
    /// Human-readable label (e.g. `Endogenous locus library method`).
    pub label: Option<String>,
}
