//! Experiment keyword extraction.
//!
//! MaveDB experiments are annotated with controlled-vocabulary keywords
//! describing how the variant library was built, delivered, and assayed.
//! This module extracts a fixed set of those keywords into per-field
//! label/description column pairs and derives two capability flags —
//! whether the assay design can detect nonsense-mediated decay (NMD) and
//! splicing effects — from the library creation method.

use crate::mavedb::ExperimentKeyword;

/// Controlled-vocabulary keys extracted into output columns.
pub mod keys {
    pub const VARIANT_LIBRARY_CREATION_METHOD: &str = "variant-library-creation-method";
    pub const ENDOGENOUS_LOCUS_LIBRARY_METHOD_SYSTEM: &str =
        "endogenous-locus-library-method-system";
    pub const ENDOGENOUS_LOCUS_LIBRARY_METHOD_MECHANISM: &str =
        "endogenous-locus-library-method-mechanism";
    pub const IN_VITRO_CONSTRUCT_LIBRARY_METHOD_SYSTEM: &str =
        "in-vitro-construct-library-method-system";
    pub const IN_VITRO_CONSTRUCT_LIBRARY_METHOD_MECHANISM: &str =
        "in-vitro-construct-library-method-mechanism";
    pub const DELIVERY_METHOD: &str = "delivery-method";
    pub const PHENOTYPIC_ASSAY_MODEL_SYSTEM: &str = "phenotypic-assay-model-system";
    pub const PHENOTYPIC_ASSAY_PROFILING_STRATEGY: &str = "phenotypic-assay-profiling-strategy";
    pub const PHENOTYPIC_ASSAY_READOUT_DIMENSIONALITY: &str =
        "phenotypic-assay-readout-dimensionality";
    pub const PHENOTYPIC_ASSAY_READOUT_METHOD: &str = "phenotypic-assay-readout-method";
    pub const PHENOTYPIC_ASSAY_SELECTION_METHOD: &str = "phenotypic-assay-selection-method";
    pub const PHENOTYPIC_ASSAY_REPLICATE_STRUCTURE: &str = "phenotypic-assay-replicate-structure";
    pub const PHENOTYPIC_ASSAY_MECHANISM: &str = "phenotypic-assay-mechanism";

    /// All extracted keys, in output column order.
    pub const ALL: &[&str] = &[
        VARIANT_LIBRARY_CREATION_METHOD,
        ENDOGENOUS_LOCUS_LIBRARY_METHOD_SYSTEM,
        ENDOGENOUS_LOCUS_LIBRARY_METHOD_MECHANISM,
        IN_VITRO_CONSTRUCT_LIBRARY_METHOD_SYSTEM,
        IN_VITRO_CONSTRUCT_LIBRARY_METHOD_MECHANISM,
        DELIVERY_METHOD,
        PHENOTYPIC_ASSAY_MODEL_SYSTEM,
        PHENOTYPIC_ASSAY_PROFILING_STRATEGY,
        PHENOTYPIC_ASSAY_READOUT_DIMENSIONALITY,
        PHENOTYPIC_ASSAY_READOUT_METHOD,
        PHENOTYPIC_ASSAY_SELECTION_METHOD,
        PHENOTYPIC_ASSAY_REPLICATE_STRUCTURE,
        PHENOTYPIC_ASSAY_MECHANISM,
    ];
}

/// Library creation label marking edits made at the endogenous locus.
pub const ENDOGENOUS_LOCUS_LABEL: &str = "Endogenous locus library method";

/// Endogenous-locus score sets whose assay nevertheless cannot detect NMD.
///
/// Singleton special cases, kept as literal URNs. Add entries here rather
/// than branching inline.
const NMD_EXEMPT_ENDOGENOUS_URNS: &[&str] = &["urn:mavedb:00000055-a-1"];

/// Non-endogenous score sets whose assay design detects NMD and splicing
/// effects anyway.
const CAPABILITY_INCLUSION_URNS: &[&str] = &["urn:mavedb:00000113-a-1"];

/// Find the first keyword entry with the given vocabulary key.
///
/// Keys are not guaranteed unique in the source list; the first entry per
/// key is canonical. Returns `None` when the key is absent entirely.
pub fn extract_field<'a>(
    keywords: &'a [ExperimentKeyword],
    key: &str,
) -> Option<&'a ExperimentKeyword> {
    keywords.iter().find(|entry| entry.keyword.key == key)
}

/// The label/description column pair for one vocabulary key.
pub fn field_columns(
    keywords: &[ExperimentKeyword],
    key: &str,
) -> (Option<String>, Option<String>) {
    match extract_field(keywords, key) {
        Some(entry) => (
            entry.label().map(str::to_string),
            entry.description.clone(),
        ),
        None => (None, None),
    }
}

/// Whether the assay can detect nonsense-mediated decay.
///
/// `None` when the library creation method keyword is absent. Endogenous
/// locus libraries detect NMD unless the score set is in the exemption
/// table; all other library methods do not, unless the score set is in the
/// inclusion table.
pub fn detects_nmd(score_set_urn: &str, library_method: Option<&ExperimentKeyword>) -> Option<bool> {
    let method = library_method?;
    if method.label() == Some(ENDOGENOUS_LOCUS_LABEL) {
        Some(!NMD_EXEMPT_ENDOGENOUS_URNS.contains(&score_set_urn))
    } else {
        Some(CAPABILITY_INCLUSION_URNS.contains(&score_set_urn))
    }
}

/// Whether the assay can detect splicing effects.
///
/// `None` when the library creation method keyword is absent. Endogenous
/// locus libraries always detect splicing; all other library methods do
/// not, unless the score set is in the inclusion table.
pub fn detects_splicing(
    score_set_urn: &str,
    library_method: Option<&ExperimentKeyword>,
) -> Option<bool> {
    let method = library_method?;
    if method.label() == Some(ENDOGENOUS_LOCUS_LABEL) {
        Some(true)
    } else {
        Some(CAPABILITY_INCLUSION_URNS.contains(&score_set_urn))
    }
}
