//! Ground-truth validation.
//!
//! The bound computations are deliberately permissive: malformed boxes
//! clamp to zero overlap instead of failing (a wrong-but-bounded answer is
//! safe for pruning, a crash is not). This module is where such data gets
//! *reported* instead of silently absorbed, before a training run wastes
//! hours on annotations that never contribute.

mod report;

pub use report::{IssueCode, Severity, ValidationIssue, ValidationReport};

use crate::gt::GroundTruthSet;

/// Options for validation behavior.
#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    /// If true, treat warnings as errors.
    pub strict: bool,
}

/// Validates a ground-truth set and returns a report of all issues found.
///
/// Checks performed:
/// - Boxes must be ordered (left <= right, top <= bottom)
/// - Scores must not be NaN
/// - No positive-score boxes after a negative first entry (the
///   negative-image convention makes them unreachable)
///
/// An empty set is valid: it is the legitimate inference-mode input.
pub fn validate_ground_truth(set: &GroundTruthSet, _opts: &ValidateOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    let negative_image = set.is_negative_image();

    for (idx, bbox) in set.boxes().iter().enumerate() {
        if !bbox.is_ordered() {
            report.add(ValidationIssue::warning(
                IssueCode::UnorderedBox,
                format!(
                    "Box ({}, {}, {}, {}) has right < left or bottom < top",
                    bbox.left, bbox.top, bbox.right, bbox.bottom
                ),
                idx,
            ));
        }

        if bbox.score.is_nan() {
            report.add(ValidationIssue::error(
                IssueCode::NanScore,
                "Score is NaN; the negative-image sign test would treat it as positive",
                idx,
            ));
        }

        if negative_image && idx > 0 && bbox.score >= 0.0 {
            report.add(ValidationIssue::warning(
                IssueCode::PositiveAfterNegative,
                format!(
                    "Box with score {} follows a negative first entry and will never be consulted",
                    bbox.score
                ),
                idx,
            ));
        }
    }

    report
}
