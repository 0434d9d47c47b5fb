//! Score range classification against calibrated interpretation scales.
//!
//! A score set may carry several competing calibrations; exactly one is
//! primary, chosen by a fixed priority over the calibration sources. The
//! classifier locates the first range of the primary calibration that
//! contains a score and returns it together with the calibration, so the
//! caller can pull both the range annotations and the calibration's
//! citations.
//!
//! # Example
//!
//! ```
//! use ferro_mave::classify::classify;
//! use ferro_mave::mavedb::{Calibration, ScoreRange, ScoreRanges};
//!
//! let ranges = ScoreRanges {
//!     scott_calibration: Some(Calibration {
//!         ranges: vec![ScoreRange {
//!             label: Some("abnormal".to_string()),
//!             range: Some((Some(-4.0), Some(-0.748))),
//!             inclusive_lower_bound: true,
//!             ..Default::default()
//!         }],
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let hit = classify(-1.2, &ranges).unwrap();
//! assert_eq!(hit.range.label.as_deref(), Some("abnormal"));
//! assert!(classify(0.3, &ranges).is_none());
//! ```

use crate::mavedb::{Calibration, ScoreRange, ScoreRanges};

/// The competing calibration sources a score set may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationSource {
    /// Scott et al. calibration.
    Scott,
    /// Clinical Variant Functional Group calibration over all variants.
    CvfgAllVariants,
    /// Calibration supplied by the original investigators.
    InvestigatorProvided,
}

/// Calibration selection priority, highest first.
///
/// Selection stops at the first source present, regardless of content.
pub const CALIBRATION_PRIORITY: &[CalibrationSource] = &[
    CalibrationSource::Scott,
    CalibrationSource::CvfgAllVariants,
    CalibrationSource::InvestigatorProvided,
];

/// Look up one calibration source in the container.
pub fn calibration_for(ranges: &ScoreRanges, source: CalibrationSource) -> Option<&Calibration> {
    match source {
        CalibrationSource::Scott => ranges.scott_calibration.as_ref(),
        CalibrationSource::CvfgAllVariants => ranges.cvfg_all_variants.as_ref(),
        CalibrationSource::InvestigatorProvided => ranges.investigator_provided.as_ref(),
    }
}

/// Select the primary calibration for a score set.
///
/// The priority table is tried in order, stopping at the first source
/// present. A research-use-only primary suppresses classification entirely:
/// there is no fallback to a lower-priority calibration.
pub fn primary_calibration(ranges: &ScoreRanges) -> Option<&Calibration> {
    let calibration = CALIBRATION_PRIORITY
        .iter()
        .find_map(|source| calibration_for(ranges, *source))?;
    if calibration.research_use_only {
        return None;
    }
    Some(calibration)
}

/// Test whether a score lies within a range's interval.
///
/// Bounds are checked independently: the score must be `> min` (`>=` when
/// the lower bound is inclusive) and `< max` (`<=` when the upper bound is
/// inclusive). A missing bound leaves that side unbounded; a range with no
/// interval never matches.
pub fn score_lies_in_range(score: f64, range: &ScoreRange) -> bool {
    let Some((min, max)) = range.range else {
        return false;
    };
    if let Some(min) = min {
        let below = if range.inclusive_lower_bound {
            score < min
        } else {
            score <= min
        };
        if below {
            return false;
        }
    }
    if let Some(max) = max {
        let above = if range.inclusive_upper_bound {
            score > max
        } else {
            score >= max
        };
        if above {
            return false;
        }
    }
    true
}

/// A classified score: the matched range and the calibration it came from.
#[derive(Debug, Clone, Copy)]
pub struct Classification<'a> {
    /// The calibration the range belongs to.
    pub calibration: &'a Calibration,
    /// The first range containing the score, in declared order.
    pub range: &'a ScoreRange,
}

/// Classify a score against a score set's calibrations.
///
/// Returns `None` when no calibration is available, the primary calibration
/// is research-use-only, or no range contains the score. Ranges are tested
/// in declared order and the first match wins, even if a later range would
/// also contain the score.
pub fn classify(score: f64, ranges: &ScoreRanges) -> Option<Classification<'_>> {
    let calibration = primary_calibration(ranges)?;
    let range = calibration
        .ranges
        .iter()
        .find(|range| score_lies_in_range(score, range))?;
    Some(Classification { calibration, range })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: Option<f64>, max: Option<f64>, inclusive_lower: bool, inclusive_upper: bool) -> ScoreRange {
        ScoreRange {
            range: Some((min, max)),
            inclusive_lower_bound: inclusive_lower,
            inclusive_upper_bound: inclusive_upper,
            ..Default::default()
        }
    }

    fn calibration_with(label: &str) -> Calibration {
        Calibration {
            ranges: vec![ScoreRange {
                label: Some(label.to_string()),
                range: Some((Some(0.0), Some(1.0))),
                inclusive_lower_bound: true,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_inclusive_lower_exclusive_upper_boundaries() {
        // [0, 1): 0 matches, 1 does not
        let r = range(Some(0.0), Some(1.0), true, false);
        assert!(score_lies_in_range(0.0, &r));
        assert!(score_lies_in_range(0.5, &r));
        assert!(!score_lies_in_range(1.0, &r));
        assert!(!score_lies_in_range(-0.001, &r));
    }

    #[test]
    fn test_exclusive_lower_inclusive_upper_boundaries() {
        // (0, 1]: 0 does not match, 1 does
        let r = range(Some(0.0), Some(1.0), false, true);
        assert!(!score_lies_in_range(0.0, &r));
        assert!(score_lies_in_range(1.0, &r));
    }

    #[test]
    fn test_unbounded_sides() {
        let below = range(None, Some(-0.748), false, true);
        assert!(score_lies_in_range(-100.0, &below));
        assert!(score_lies_in_range(-0.748, &below));
        assert!(!score_lies_in_range(-0.7, &below));

        let above = range(Some(0.5), None, true, false);
        assert!(score_lies_in_range(0.5, &above));
        assert!(score_lies_in_range(1e9, &above));
        assert!(!score_lies_in_range(0.4, &above));
    }

    #[test]
    fn test_range_without_interval_never_matches() {
        let r = ScoreRange::default();
        assert!(!score_lies_in_range(0.0, &r));
        assert!(!score_lies_in_range(f64::MAX, &r));
    }

    #[test]
    fn test_priority_scott_wins() {
        let ranges = ScoreRanges {
            scott_calibration: Some(calibration_with("scott")),
            cvfg_all_variants: Some(calibration_with("cvfg")),
            investigator_provided: Some(calibration_with("investigator")),
        };
        let hit = classify(0.5, &ranges).unwrap();
        assert_eq!(hit.range.label.as_deref(), Some("scott"));
    }

    #[test]
    fn test_priority_fallback_order() {
        let ranges = ScoreRanges {
            cvfg_all_variants: Some(calibration_with("cvfg")),
            investigator_provided: Some(calibration_with("investigator")),
            ..Default::default()
        };
        let hit = classify(0.5, &ranges).unwrap();
        assert_eq!(hit.range.label.as_deref(), Some("cvfg"));

        let ranges = ScoreRanges {
            investigator_provided: Some(calibration_with("investigator")),
            ..Default::default()
        };
        let hit = classify(0.5, &ranges).unwrap();
        assert_eq!(hit.range.label.as_deref(), Some("investigator"));
    }

    #[test]
    fn test_research_use_only_suppresses_without_fallback() {
        // Scott is present but research-only; cvfg would match the score.
        // The conservative policy discards the classification entirely.
        let mut scott = calibration_with("scott");
        scott.research_use_only = true;
        let ranges = ScoreRanges {
            scott_calibration: Some(scott),
            cvfg_all_variants: Some(calibration_with("cvfg")),
            ..Default::default()
        };
        assert!(classify(0.5, &ranges).is_none());
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let calibration = Calibration {
            ranges: vec![
                ScoreRange {
                    label: Some("first".to_string()),
                    range: Some((Some(0.0), Some(2.0))),
                    inclusive_lower_bound: true,
                    ..Default::default()
                },
                ScoreRange {
                    label: Some("second".to_string()),
                    range: Some((Some(0.0), Some(1.0))),
                    inclusive_lower_bound: true,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let ranges = ScoreRanges {
            scott_calibration: Some(calibration),
            ..Default::default()
        };
        let hit = classify(0.5, &ranges).unwrap();
        assert_eq!(hit.range.label.as_deref(), Some("first"));
    }

    #[test]
    fn test_no_calibration_yields_none() {
        assert!(classify(0.5, &ScoreRanges::default()).is_none());
    }

    #[test]
    fn test_score_outside_all_ranges_yields_none() {
        let ranges = ScoreRanges {
            scott_calibration: Some(calibration_with("scott")),
            ..Default::default()
        };
        assert!(classify(5.0, &ranges).is_none());
    }

    #[test]
    fn test_classification_exposes_calibration_citations() {
        use crate::mavedb::SourceIdentifier;

        let mut calibration = calibration_with("scott");
        calibration.source = vec![SourceIdentifier {
            db_name: Some("PubMed".to_string()),
            identifier: Some("38459979".to_string()),
        }];
        let ranges = ScoreRanges {
            scott_calibration: Some(calibration),
            ..Default::default()
        };
        let hit = classify(0.5, &ranges).unwrap();
        assert_eq!(
            hit.calibration
                .calibration_source()
                .unwrap()
                .db_name
                .as_deref(),
            Some("PubMed")
        );
    }
}
