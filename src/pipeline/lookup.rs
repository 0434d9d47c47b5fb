//! Pipeline orchestration.

use tracing::{debug, info};

use crate::classify::classify;
use crate::error::MaveLookupError;
use crate::keywords::{detects_nmd, detects_splicing, extract_field, field_columns, keys};
use crate::mavedb::{EffectMeasurement, EffectProvider};
use crate::record::VariantEffectRecord;
use crate::registry::{AlleleId, AlleleResolver};
use crate::Result;

/// The variant lookup pipeline, generic over its two collaborators.
///
/// # Example
///
/// ```
/// use ferro_mave::pipeline::VariantLookup;
/// use ferro_mave::registry::MockResolver;
/// use ferro_mave::mavedb::MockEffectProvider;
///
/// let lookup = VariantLookup::new(MockResolver::new(), MockEffectProvider::new());
/// // An unresolvable variant aborts the run
/// assert!(lookup.run(&["NM_000251.3:c.2197G>A".to_string()]).is_err());
/// ```
#[derive(Debug)]
pub struct VariantLookup<R, M> {
    resolver: R,
    effects: M,
}

impl<R: AlleleResolver, M: EffectProvider> VariantLookup<R, M> {
    /// Create a pipeline from an allele resolver and an effect provider.
    pub fn new(resolver: R, effects: M) -> Self {
        Self { resolver, effects }
    }

    /// Process all queries in order, collecting the flattened records.
    ///
    /// Any fatal condition (unresolvable variant, missing score set or
    /// experiment, transport failure on the effect source) aborts the whole
    /// run; there is no per-row recovery.
    pub fn run(&self, queries: &[String]) -> Result<Vec<VariantEffectRecord>> {
        let mut records = Vec::new();
        for hgvs in queries {
            records.extend(self.lookup_variant(hgvs)?);
        }
        Ok(records)
    }

    /// Process one variant query.
    pub fn lookup_variant(&self, hgvs: &str) -> Result<Vec<VariantEffectRecord>> {
        let allele_ids = self.resolver.resolve(hgvs);
        if allele_ids.is_empty() {
            return Err(MaveLookupError::NoAlleleFound {
                hgvs: hgvs.to_string(),
            });
        }
        info!(hgvs, alleles = allele_ids.len(), "resolved variant");

        let mut records = Vec::new();
        for allele_id in &allele_ids {
            let measurements = self.effects.fetch_measurements(allele_id)?;
            debug!(allele_id = %allele_id, measurements = measurements.len(), "fetched measurements");
            for measurement in &measurements {
                if let Some(record) = self.build_record(hgvs, allele_id, measurement)? {
                    records.push(record);
                }
            }
        }
        Ok(records)
    }

    /// Build the output record for one measurement.
    ///
    /// Returns `Ok(None)` for measurements without a score: their
    /// score-dependent fields cannot be computed, so the row is omitted
    /// rather than emitted half-empty. Missing score set or experiment
    /// linkage is fatal even for score-less measurements.
    fn build_record(
        &self,
        hgvs: &str,
        allele_id: &AlleleId,
        measurement: &EffectMeasurement,
    ) -> Result<Option<VariantEffectRecord>> {
        let score_set_urn = &measurement.score_set.urn;
        let variant_urn = measurement.urn.clone();

        let score_set = self.effects.fetch_score_set(score_set_urn)?.ok_or_else(|| {
            MaveLookupError::MissingScoreSet {
                urn: score_set_urn.clone(),
                variant_urn: variant_urn.clone().unwrap_or_default(),
            }
        })?;
        let experiment =
            score_set
                .experiment
                .as_ref()
                .ok_or_else(|| MaveLookupError::MissingExperiment {
                    score_set_urn: score_set_urn.clone(),
                })?;

        let Some(score) = measurement.score() else {
            debug!(variant_urn = variant_urn.as_deref().unwrap_or(""), "no score; skipping");
            return Ok(None);
        };

        let classification = score_set
            .score_ranges
            .as_ref()
            .and_then(|ranges| classify(score, ranges));
        let range = classification.map(|c| c.range);
        let calibration = classification.map(|c| c.calibration);
        let calibration_source = calibration.and_then(|c| c.calibration_source());
        let evidence_source = calibration.and_then(|c| c.evidence_strength_source());

        let publication = score_set.primary_publication();

        let keywords = &experiment.keywords;
        let library_method = extract_field(keywords, keys::VARIANT_LIBRARY_CREATION_METHOD);

        let (variant_library_creation_method_label, variant_library_creation_method_description) =
            field_columns(keywords, keys::VARIANT_LIBRARY_CREATION_METHOD);
        let (
            endogenous_locus_library_method_system_label,
            endogenous_locus_library_method_system_description,
        ) = field_columns(keywords, keys::ENDOGENOUS_LOCUS_LIBRARY_METHOD_SYSTEM);
        let (
            endogenous_locus_library_method_mechanism_label,
            endogenous_locus_library_method_mechanism_description,
        ) = field_columns(keywords, keys::ENDOGENOUS_LOCUS_LIBRARY_METHOD_MECHANISM);
        let (
            in_vitro_construct_library_method_system_label,
            in_vitro_construct_library_method_system_description,
        ) = field_columns(keywords, keys::IN_VITRO_CONSTRUCT_LIBRARY_METHOD_SYSTEM);
        let (
            in_vitro_construct_library_method_mechanism_label,
            in_vitro_construct_library_method_mechanism_description,
        ) = field_columns(keywords, keys::IN_VITRO_CONSTRUCT_LIBRARY_METHOD_MECHANISM);
        let (delivery_method_label, delivery_method_description) =
            field_columns(keywords, keys::DELIVERY_METHOD);
        let (phenotypic_assay_model_system_label, phenotypic_assay_model_system_description) =
            field_columns(keywords, keys::PHENOTYPIC_ASSAY_MODEL_SYSTEM);
        let (
            phenotypic_assay_profiling_strategy_label,
            phenotypic_assay_profiling_strategy_description,
        ) = field_columns(keywords, keys::PHENOTYPIC_ASSAY_PROFILING_STRATEGY);
        let (
            phenotypic_assay_readout_dimensionality_label,
            phenotypic_assay_readout_dimensionality_description,
        ) = field_columns(keywords, keys::PHENOTYPIC_ASSAY_READOUT_DIMENSIONALITY);
        let (phenotypic_assay_readout_method_label, phenotypic_assay_readout_method_description) =
            field_columns(keywords, keys::PHENOTYPIC_ASSAY_READOUT_METHOD);
        let (
            phenotypic_assay_selection_method_label,
            phenotypic_assay_selection_method_description,
        ) = field_columns(keywords, keys::PHENOTYPIC_ASSAY_SELECTION_METHOD);
        let (
            phenotypic_assay_replicate_structure_label,
            phenotypic_assay_replicate_structure_description,
        ) = field_columns(keywords, keys::PHENOTYPIC_ASSAY_REPLICATE_STRUCTURE);
        let (phenotypic_assay_mechanism_label, phenotypic_assay_mechanism_description) =
            field_columns(keywords, keys::PHENOTYPIC_ASSAY_MECHANISM);

        let record = VariantEffectRecord {
            hgvs: hgvs.to_string(),
            clingen_allele_id: allele_id.as_str().to_string(),
            mavedb_variant_urn: variant_urn,
            mavedb_score_set_urn: score_set_urn.clone(),
            score,
            score_data: measurement.score_data_json(),
            count_data: measurement.count_data_json(),
            score_range_label: range.and_then(|r| r.label.clone()),
            score_range_classification: range.and_then(|r| r.classification.clone()),
            odds_path: range.and_then(|r| r.odds_path_ratio()),
            acmg_evidence_strength: range.and_then(|r| r.evidence_strength().map(str::to_string)),
            variant_effect_measurement_source_db: publication.and_then(|p| p.db_name.clone()),
            variant_effect_measurement_source_identifier: publication
                .and_then(|p| p.identifier.clone()),
            variant_effect_measurement_source_first_author: publication
                .and_then(|p| p.first_author().map(str::to_string)),
            variant_effect_measurement_source_publication_year: publication
                .and_then(|p| p.publication_year),
            variant_effect_measurement_source_publication_journal: publication
                .and_then(|p| p.publication_journal.clone()),
            calibration_source_db: calibration_source.and_then(|s| s.db_name.clone()),
            calibration_source_identifier: calibration_source.and_then(|s| s.identifier.clone()),
            evidence_strength_source_db: evidence_source.and_then(|s| s.db_name.clone()),
            evidence_strength_source_identifier: evidence_source.and_then(|s| s.identifier.clone()),
            score_set_title: score_set.title.clone(),
            score_set_description: score_set.short_description.clone(),
            score_set_published_date: score_set.published_date.clone(),
            experiment_urn: experiment.urn.clone(),
            experiment_title: experiment.title.clone(),
            experiment_description: experiment.short_description.clone(),
            variant_library_creation_method_label,
            variant_library_creation_method_description,
            endogenous_locus_library_method_system_label,
            endogenous_locus_library_method_system_description,
            endogenous_locus_library_method_mechanism_label,
            endogenous_locus_library_method_mechanism_description,
            in_vitro_construct_library_method_system_label,
            in_vitro_construct_library_method_system_description,
            in_vitro_construct_library_method_mechanism_label,
            in_vitro_construct_library_method_mechanism_description,
            delivery_method_label,
            delivery_method_description,
            phenotypic_assay_model_system_label,
            phenotypic_assay_model_system_description,
            phenotypic_assay_profiling_strategy_label,
            phenotypic_assay_profiling_strategy_description,
            phenotypic_assay_readout_dimensionality_label,
            phenotypic_assay_readout_dimensionality_description,
            phenotypic_assay_readout_method_label,
            phenotypic_assay_readout_method_description,
            phenotypic_assay_selection_method_label,
            phenotypic_assay_selection_method_description,
            phenotypic_assay_replicate_structure_label,
            phenotypic_assay_replicate_structure_description,
            phenotypic_assay_mechanism_label,
            phenotypic_assay_mechanism_description,
            detects_nmd: detects_nmd(score_set_urn, library_method),
            detects_splicing: detects_splicing(score_set_urn, library_method),
        };
        Ok(Some(record))
    }
}
