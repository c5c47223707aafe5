//! Validation report types for structured error reporting.

use std::fmt;

use serde::Serialize;

/// The result of validating a ground-truth set.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ValidationReport {
    /// All issues found during validation.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Adds an issue to the report.
    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Returns the number of errors in the report.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Returns the number of warnings in the report.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    /// Returns true if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return writeln!(f, "Validation passed: no issues found");
        }

        writeln!(
            f,
            "Validation completed with {} error(s) and {} warning(s):",
            self.error_count(),
            self.warning_count()
        )?;
        writeln!(f)?;

        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }

        Ok(())
    }
}

/// A single validation issue (error or warning).
#[derive(Clone, Debug, Serialize)]
pub struct ValidationIssue {
    /// The severity of the issue.
    pub severity: Severity,

    /// A stable code for the issue type.
    pub code: IssueCode,

    /// A human-readable description of the issue.
    pub message: String,

    /// Index of the offending box in the ground-truth set.
    pub box_index: usize,
}

impl ValidationIssue {
    /// Creates a new validation issue.
    pub fn new(
        severity: Severity,
        code: IssueCode,
        message: impl Into<String>,
        box_index: usize,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            box_index,
        }
    }

    /// Creates a new error.
    pub fn error(code: IssueCode, message: impl Into<String>, box_index: usize) -> Self {
        Self::new(Severity::Error, code, message, box_index)
    }

    /// Creates a new warning.
    pub fn warning(code: IssueCode, message: impl Into<String>, box_index: usize) -> Self {
        Self::new(Severity::Warning, code, message, box_index)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
        };
        write!(
            f,
            "[{}] {:?} in box {}: {}",
            severity, self.code, self.box_index, self.message
        )
    }
}

/// The severity of a validation issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

/// Stable codes identifying the kind of validation issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum IssueCode {
    /// A box with right < left or bottom < top. The bound computations
    /// clamp safely around such boxes, but they never contribute overlap,
    /// which is rarely what the annotation meant.
    UnorderedBox,
    /// A positive-score box appearing after a negative first entry. The
    /// negative-image convention means such boxes are never consulted:
    /// the loss bound short-circuits to 1 without looking at them.
    PositiveAfterNegative,
    /// A box with a NaN score. Sign tests on NaN are always false, so the
    /// box would silently count as positive.
    NanScore,
}
