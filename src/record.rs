//! Flattened output records.
//!
//! One record per (variant query, allele identifier, effect measurement)
//! combination. Every output column is a named, typed field so the column
//! set is fixed at compile time; optional fields serialize as empty CSV
//! cells. Field declaration order is the output column order.

use serde::Serialize;

/// One row of the output table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VariantEffectRecord {
    /// The input variant description.
    pub hgvs: String,
    /// Canonical allele the variant resolved to.
    pub clingen_allele_id: String,
    /// URN of the effect measurement.
    pub mavedb_variant_urn: Option<String>,
    /// URN of the measurement's score set.
    pub mavedb_score_set_urn: String,
    /// The functional score.
    pub score: f64,
    /// Full score data block as JSON text.
    pub score_data: String,
    /// Count data block as JSON text; empty when the source had none.
    pub count_data: Option<String>,

    // Classification of the score against the primary calibration.
    pub score_range_label: Option<String>,
    pub score_range_classification: Option<String>,
    pub odds_path: Option<f64>,
    pub acmg_evidence_strength: Option<String>,

    // Primary publication of the score set.
    pub variant_effect_measurement_source_db: Option<String>,
    pub variant_effect_measurement_source_identifier: Option<String>,
    pub variant_effect_measurement_source_first_author: Option<String>,
    pub variant_effect_measurement_source_publication_year: Option<i32>,
    pub variant_effect_measurement_source_publication_journal: Option<String>,

    // Citations for the calibration and its evidence-strength assignment.
    pub calibration_source_db: Option<String>,
    pub calibration_source_identifier: Option<String>,
    pub evidence_strength_source_db: Option<String>,
    pub evidence_strength_source_identifier: Option<String>,

    // Score set and experiment descriptors.
    pub score_set_title: Option<String>,
    pub score_set_description: Option<String>,
    pub score_set_published_date: Option<String>,
    pub experiment_urn: Option<String>,
    pub experiment_title: Option<String>,
    pub experiment_description: Option<String>,

    // Experiment method keywords, one label/description pair per
    // controlled-vocabulary key (see `crate::keywords::keys`).
    pub variant_library_creation_method_label: Option<String>,
    pub variant_library_creation_method_description: Option<String>,
    pub endogenous_locus_library_method_system_label: Option<String>,
    pub endogenous_locus_library_method_system_description: Option<String>,
    pub endogenous_locus_library_method_mechanism_label: Option<String>,
    pub endogenous_locus_library_method_mechanism_description: Option<String>,
    pub in_vitro_construct_library_method_system_label: Option<String>,
    pub in_vitro_construct_library_method_system_description: Option<String>,
    pub in_vitro_construct_library_method_mechanism_label: Option<String>,
    pub in_vitro_construct_library_method_mechanism_description: Option<String>,
    pub delivery_method_label: Option<String>,
    pub delivery_method_description: Option<String>,
    pub phenotypic_assay_model_system_label: Option<String>,
    pub phenotypic_assay_model_system_description: Option<String>,
    pub phenotypic_assay_profiling_strategy_label: Option<String>,
    pub phenotypic_assay_profiling_strategy_description: Option<String>,
    pub phenotypic_assay_readout_dimensionality_label: Option<String>,
    pub phenotypic_assay_readout_dimensionality_description: Option<String>,
    pub phenotypic_assay_readout_method_label: Option<String>,
    pub phenotypic_assay_readout_method_description: Option<String>,
    pub phenotypic_assay_selection_method_label: Option<String>,
    pub phenotypic_assay_selection_method_description: Option<String>,
    pub phenotypic_assay_replicate_structure_label: Option<String>,
    pub phenotypic_assay_replicate_structure_description: Option<String>,
    pub phenotypic_assay_mechanism_label: Option<String>,
    pub phenotypic_assay_mechanism_description: Option<String>,

    // Assay capability flags derived from the library creation method.
    pub detects_nmd: Option<bool>,
    pub detects_splicing: Option<bool>,
}

impl VariantEffectRecord {
    /// Output column names in order.
    ///
    /// Kept in sync with the field declarations; the header is written from
    /// this list so that an empty result still produces a complete header
    /// row.
    pub const COLUMNS: &'static [&'static str] = &[
        "hgvs",
        "clingen_allele_id",
        "mavedb_variant_urn",
        "mavedb_score_set_urn",
        "score",
        "score_data",
        "count_data",
        "score_range_label",
        "score_range_classification",
        "odds_path",
        "acmg_evidence_strength",
        "variant_effect_measurement_source_db",
        "variant_effect_measurement_source_identifier",
        "variant_effect_measurement_source_first_author",
        "variant_effect_measurement_source_publication_year",
        "variant_effect_measurement_source_publication_journal",
        "calibration_source_db",
        "calibration_source_identifier",
        "evidence_strength_source_db",
        "evidence_strength_source_identifier",
        "score_set_title",
        "score_set_description",
        "score_set_published_date",
        "experiment_urn",
        "experiment_title",
        "experiment_description",
        "variant_library_creation_method_label",
        "variant_library_creation_method_description",
        "endogenous_locus_library_method_system_label",
        "endogenous_locus_library_method_system_description",
        "endogenous_locus_library_method_mechanism_label",
        "endogenous_locus_library_method_mechanism_description",
        "in_vitro_construct_library_method_system_label",
        "in_vitro_construct_library_method_system_description",
        "in_vitro_construct_library_method_mechanism_label",
        "in_vitro_construct_library_method_mechanism_description",
        "delivery_method_label",
        "delivery_method_description",
        "phenotypic_assay_model_system_label",
        "phenotypic_assay_model_system_description",
        "phenotypic_assay_profiling_strategy_label",
        "phenotypic_assay_profiling_strategy_description",
        "phenotypic_assay_readout_dimensionality_label",
        "phenotypic_assay_readout_dimensionality_description",
        "phenotypic_assay_readout_method_label",
        "phenotypic_assay_readout_method_description",
        "phenotypic_assay_selection_method_label",
        "phenotypic_assay_selection_method_description",
        "phenotypic_assay_replicate_structure_label",
        "phenotypic_assay_replicate_structure_description",
        "phenotypic_assay_mechanism_label",
        "phenotypic_assay_mechanism_description",
        "detects_nmd",
        "detects_splicing",
    ];
}
