//! End-to-end pipeline tests.
//!
//! These drive the full lookup flow over the in-memory mock collaborators:
//! resolve an HGVS variant, fetch its effect measurements, classify scores
//! against the score set calibration, extract experiment metadata, and
//! check the flattened records and CSV output.

use std::fs;

use ferro_mave::keywords::keys;
use ferro_mave::mavedb::{
    Calibration, EffectMeasurement, Experiment, ExperimentKeyword, MeasurementData,
    MockEffectProvider, OddsPath, PublicationAuthor, PublicationIdentifier, ScoreRange,
    ScoreRanges, ScoreSet, ScoreSetRef, SourceIdentifier,
};
use ferro_mave::registry::MockResolver;
use ferro_mave::{
    read_variant_queries, write_records, MaveLookupError, VariantEffectRecord, VariantLookup,
};

const HGVS: &str = "NM_000251.3:c.2197G>A";
const ALLELE: &str = "CA034588";
const SCORE_SET_URN: &str = "urn:mavedb:00000050-a-1";
const VARIANT_URN: &str = "urn:mavedb:00000050-a-1#44";

fn measurement_with_score(score: f64) -> EffectMeasurement {
    let mut score_data = serde_json::Map::new();
    score_data.insert("score".to_string(), serde_json::json!(score));
    score_data.insert("sd".to_string(), serde_json::json!(0.08));
    let mut count_data = serde_json::Map::new();
    count_data.insert("rep1".to_string(), serde_json::json!(120));
    EffectMeasurement {
        urn: Some(VARIANT_URN.to_string()),
        data: MeasurementData {
            score_data,
            count_data,
        },
        score_set: ScoreSetRef {
            urn: SCORE_SET_URN.to_string(),
        },
    }
}

/// A score set with a two-range Scott calibration, a primary publication,
/// and a keyword-annotated experiment.
fn fixture_score_set() -> ScoreSet {
    ScoreSet {
        urn: Some(SCORE_SET_URN.to_string()),
        title: Some("MSH2 deep mutational scan".to_string()),
        short_description: Some("Saturation mutagenesis of MSH2 in HAP1 cells".to_string()),
        published_date: Some("2021-03-12".to_string()),
        primary_publication_identifiers: vec![PublicationIdentifier {
            db_name: Some("PubMed".to_string()),
            identifier: Some("33357406".to_string()),
            authors: vec![
                PublicationAuthor {
                    name: Some("Jia X".to_string()),
                    primary: true,
                },
                PublicationAuthor {
                    name: Some("Burugula BB".to_string()),
                    primary: false,
                },
            ],
            publication_year: Some(2021),
            publication_journal: Some("Am J Hum Genet".to_string()),
        }],
        score_ranges: Some(ScoreRanges {
            scott_calibration: Some(Calibration {
                research_use_only: false,
                ranges: vec![
                    ScoreRange {
                        label: Some("abnormal".to_string()),
                        classification: Some("abnormal".to_string()),
                        range: Some((None, Some(-0.748))),
                        inclusive_upper_bound: true,
                        odds_path: Some(OddsPath {
                            ratio: Some(24.9),
                            evidence: Some("PS3_strong".to_string()),
                        }),
                        ..Default::default()
                    },
                    ScoreRange {
                        label: Some("normal".to_string()),
                        classification: Some("normal".to_string()),
                        range: Some((Some(-0.3), None)),
                        inclusive_lower_bound: true,
                        odds_path: Some(OddsPath {
                            ratio: Some(0.05),
                            evidence: Some("BS3_strong".to_string()),
                        }),
                        ..Default::default()
                    },
                ],
                source: vec![SourceIdentifier {
                    db_name: Some("PubMed".to_string()),
                    identifier: Some("38459979".to_string()),
                }],
                odds_path_source: vec![SourceIdentifier {
                    db_name: Some("PubMed".to_string()),
                    identifier: Some("38459979".to_string()),
                }],
            }),
            ..Default::default()
        }),
        experiment: Some(Experiment {
            urn: Some("urn:mavedb:00000050-a".to_string()),
            title: Some("MSH2 variant effect mapping".to_string()),
            short_description: Some("CRISPR knock-in screen of MSH2 variants".to_string()),
            keywords: vec![
                ExperimentKeyword::new(
                    keys::VARIANT_LIBRARY_CREATION_METHOD,
                    "Endogenous locus library method",
                ),
                ExperimentKeyword::new(keys::DELIVERY_METHOD, "Electroporation")
                    .with_description("Nucleofection of HAP1 cells"),
                ExperimentKeyword::new(keys::PHENOTYPIC_ASSAY_MODEL_SYSTEM, "Haploid cell line"),
            ],
        }),
        ..Default::default()
    }
}

fn fixture_pipeline() -> VariantLookup<MockResolver, MockEffectProvider> {
    let mut resolver = MockResolver::new();
    resolver.add_allele(HGVS, ALLELE);
    let mut effects = MockEffectProvider::new();
    effects.add_measurement(ALLELE, measurement_with_score(-1.25));
    effects.add_score_set(fixture_score_set());
    VariantLookup::new(resolver, effects)
}

#[test]
fn test_single_variant_fully_classified_row() {
    let lookup = fixture_pipeline();
    let records = lookup.run(&[HGVS.to_string()]).unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.hgvs, HGVS);
    assert_eq!(record.clingen_allele_id, ALLELE);
    assert_eq!(record.mavedb_variant_urn.as_deref(), Some(VARIANT_URN));
    assert_eq!(record.mavedb_score_set_urn, SCORE_SET_URN);
    assert_eq!(record.score, -1.25);

    // -1.25 <= -0.748 falls in the abnormal range
    assert_eq!(record.score_range_label.as_deref(), Some("abnormal"));
    assert_eq!(record.score_range_classification.as_deref(), Some("abnormal"));
    assert_eq!(record.odds_path, Some(24.9));
    assert_eq!(record.acmg_evidence_strength.as_deref(), Some("PS3_strong"));
    assert_eq!(record.calibration_source_identifier.as_deref(), Some("38459979"));
    assert_eq!(record.evidence_strength_source_db.as_deref(), Some("PubMed"));

    // Publication provenance
    assert_eq!(record.variant_effect_measurement_source_db.as_deref(), Some("PubMed"));
    assert_eq!(
        record.variant_effect_measurement_source_first_author.as_deref(),
        Some("Jia X")
    );
    assert_eq!(record.variant_effect_measurement_source_publication_year, Some(2021));

    // Score set / experiment descriptors
    assert_eq!(record.score_set_title.as_deref(), Some("MSH2 deep mutational scan"));
    assert_eq!(record.experiment_urn.as_deref(), Some("urn:mavedb:00000050-a"));

    // Keyword columns
    assert_eq!(
        record.variant_library_creation_method_label.as_deref(),
        Some("Endogenous locus library method")
    );
    assert_eq!(record.delivery_method_label.as_deref(), Some("Electroporation"));
    assert_eq!(
        record.delivery_method_description.as_deref(),
        Some("Nucleofection of HAP1 cells")
    );
    assert_eq!(
        record.phenotypic_assay_model_system_label.as_deref(),
        Some("Haploid cell line")
    );
    assert!(record.phenotypic_assay_mechanism_label.is_none());

    // Endogenous locus library, not the exempt score set
    assert_eq!(record.detects_nmd, Some(true));
    assert_eq!(record.detects_splicing, Some(true));

    // Data passthrough
    assert!(record.score_data.contains("\"score\":-1.25"));
    assert_eq!(record.count_data.as_deref(), Some(r#"{"rep1":120}"#));
}

#[test]
fn test_score_between_ranges_leaves_classification_empty() {
    let mut resolver = MockResolver::new();
    resolver.add_allele(HGVS, ALLELE);
    let mut effects = MockEffectProvider::new();
    // -0.5 sits in the gap between the abnormal and normal ranges
    effects.add_measurement(ALLELE, measurement_with_score(-0.5));
    effects.add_score_set(fixture_score_set());

    let lookup = VariantLookup::new(resolver, effects);
    let records = lookup.run(&[HGVS.to_string()]).unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert!(record.score_range_label.is_none());
    assert!(record.score_range_classification.is_none());
    assert!(record.odds_path.is_none());
    assert!(record.acmg_evidence_strength.is_none());
    assert!(record.calibration_source_db.is_none());
    assert!(record.evidence_strength_source_identifier.is_none());
    // Non-classification fields still populated
    assert_eq!(record.score, -0.5);
    assert_eq!(record.score_set_title.as_deref(), Some("MSH2 deep mutational scan"));
}

#[test]
fn test_research_use_only_calibration_suppressed_end_to_end() {
    let mut score_set = fixture_score_set();
    if let Some(ranges) = score_set.score_ranges.as_mut() {
        if let Some(scott) = ranges.scott_calibration.as_mut() {
            scott.research_use_only = true;
        }
    }

    let mut resolver = MockResolver::new();
    resolver.add_allele(HGVS, ALLELE);
    let mut effects = MockEffectProvider::new();
    effects.add_measurement(ALLELE, measurement_with_score(-1.25));
    effects.add_score_set(score_set);

    let lookup = VariantLookup::new(resolver, effects);
    let records = lookup.run(&[HGVS.to_string()]).unwrap();
    assert_eq!(records.len(), 1);
    // The score would match the abnormal range, but research-only
    // calibrations are never reported
    assert!(records[0].score_range_label.is_none());
    assert!(records[0].odds_path.is_none());
}

#[test]
fn test_resolution_failure_aborts_run() {
    let lookup = fixture_pipeline();
    let queries = vec![HGVS.to_string(), "NM_999999.9:c.1A>G".to_string()];
    let err = lookup.run(&queries).unwrap_err();
    assert!(matches!(err, MaveLookupError::NoAlleleFound { .. }));
}

#[test]
fn test_multiple_alleles_processed_in_order() {
    let mut resolver = MockResolver::new();
    resolver.add_allele(HGVS, ALLELE);
    resolver.add_allele(HGVS, "PA2157");

    let mut effects = MockEffectProvider::new();
    effects.add_measurement(ALLELE, measurement_with_score(-1.25));
    let mut protein_measurement = measurement_with_score(0.1);
    protein_measurement.urn = Some("urn:mavedb:00000050-a-1#99".to_string());
    effects.add_measurement("PA2157", protein_measurement);
    effects.add_score_set(fixture_score_set());

    let lookup = VariantLookup::new(resolver, effects);
    let records = lookup.run(&[HGVS.to_string()]).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].clingen_allele_id, ALLELE);
    assert_eq!(records[1].clingen_allele_id, "PA2157");
    assert_eq!(
        records[1].mavedb_variant_urn.as_deref(),
        Some("urn:mavedb:00000050-a-1#99")
    );
}

#[test]
fn test_idempotent_runs_produce_identical_records() {
    let lookup = fixture_pipeline();
    let queries = vec![HGVS.to_string()];
    let first = lookup.run(&queries).unwrap();
    let second = lookup.run(&queries).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_csv_round_trip() {
    let lookup = fixture_pipeline();
    let records = lookup.run(&[HGVS.to_string()]).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("variants.csv");
    let output = dir.path().join("effects.csv");
    fs::write(&input, format!("hgvs\n{}\n", HGVS)).unwrap();

    let queries = read_variant_queries(&input).unwrap();
    assert_eq!(queries, vec![HGVS.to_string()]);

    write_records(&output, &records).unwrap();
    let text = fs::read_to_string(&output).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        VariantEffectRecord::COLUMNS.join(",")
    );
    let row = lines.next().unwrap();
    assert!(row.contains(ALLELE));
    assert!(row.contains("abnormal"));
    assert!(row.contains("PS3_strong"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_byte_identical_output_across_runs() {
    let lookup = fixture_pipeline();
    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.csv");
    let second_path = dir.path().join("second.csv");

    let queries = vec![HGVS.to_string()];
    write_records(&first_path, &lookup.run(&queries).unwrap()).unwrap();
    write_records(&second_path, &lookup.run(&queries).unwrap()).unwrap();

    assert_eq!(fs::read(&first_path).unwrap(), fs::read(&second_path).unwrap());
}
