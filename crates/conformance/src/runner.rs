//! Executes a catalog against a validator.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use onboard_validator::foundation::Validate;

use crate::catalog::{Catalog, Expectation, Selection};
use crate::summary::Summary;

// ============================================================================
// CASE RECORDS
// ============================================================================

/// Whether a conformance case held: the validator's actual outcome matched
/// the expected one (and, for rejections, the expected error substring).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CaseStatus {
    Pass,
    Fail,
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        })
    }
}

/// One evaluated case, shaped for the report renderers.
#[derive(Debug, Clone, Serialize)]
pub struct CaseRecord {
    /// Stable identifier within the run, e.g. `mobile-007`.
    pub id: String,
    /// The catalog description.
    pub description: String,
    /// Conformance outcome.
    pub status: CaseStatus,
    /// The raw input.
    pub input: String,
    /// The validator's error messages, joined; `None` for accepted inputs.
    pub error: Option<String>,
}

/// Everything a run produced.
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    /// Per-case records, in catalog order.
    pub records: Vec<CaseRecord>,
    /// Aggregated counts.
    pub summary: Summary,
}

impl RunOutcome {
    /// Appends another run's records and counts.
    pub fn merge(&mut self, other: Self) {
        self.records.extend(other.records);
        self.summary.merge(other.summary);
    }
}

// ============================================================================
// RUNNER
// ============================================================================

/// Runs the selected catalog subset through `validator`.
///
/// A case holds when the validator's accept/reject decision matches the
/// expectation; rejected cases additionally require the expected error
/// substring (when the table names one) to appear in the validator's
/// messages.
pub fn run_catalog<V: Validate>(
    catalog: &Catalog,
    selection: Selection,
    validator: &V,
    id_prefix: &str,
) -> RunOutcome {
    let mut outcome = RunOutcome::default();

    for (index, case) in catalog.select(selection).enumerate() {
        let report = validator.check(&case.input);
        let actual = if report.is_valid() {
            Expectation::Pass
        } else {
            Expectation::Fail
        };
        let error = (!report.is_valid()).then(|| report.error_messages().join("; "));

        let mut matched = actual == case.expected;
        if matched && case.expected == Expectation::Fail {
            if let Some(expected_error) = &case.expected_error {
                let messages = error.as_deref().unwrap_or("");
                if !messages.contains(expected_error.as_ref()) {
                    matched = false;
                }
            }
        }

        let id = format!("{id_prefix}-{:03}", index + 1);
        debug!(
            id = %id,
            input = %case.input,
            expected = %case.expected,
            actual = %actual,
            matched,
            "case evaluated"
        );

        outcome.summary.record(matched);
        outcome.records.push(CaseRecord {
            id,
            description: case.description.to_string(),
            status: if matched {
                CaseStatus::Pass
            } else {
                CaseStatus::Fail
            },
            input: case.input.to_string(),
            error,
        });
    }

    info!(
        prefix = id_prefix,
        total = outcome.summary.total,
        passed = outcome.summary.passed,
        failed = outcome.summary.failed,
        "catalog run complete"
    );
    outcome
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TestCase;
    use onboard_validator::foundation::{Issue, ValidationReport};

    struct EvenLength;

    impl Validate for EvenLength {
        type Checked = usize;

        fn check(&self, raw: &str) -> ValidationReport<usize> {
            let mut issues = Vec::new();
            if raw.len() % 2 != 0 {
                issues.push(Issue::new("odd", "length must be even"));
            }
            ValidationReport::resolve(issues, || raw.len())
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            TestCase::passing("ab", "even input"),
            TestCase::failing("abc", "odd input", "must be even"),
        ])
    }

    #[test]
    fn matching_cases_pass() {
        let outcome = run_catalog(&catalog(), Selection::All, &EvenLength, "even");
        assert_eq!(outcome.summary.total, 2);
        assert_eq!(outcome.summary.failed, 0);
        assert!(outcome.records.iter().all(|r| r.status == CaseStatus::Pass));
    }

    #[test]
    fn ids_are_prefixed_and_ordered() {
        let outcome = run_catalog(&catalog(), Selection::All, &EvenLength, "even");
        let ids: Vec<_> = outcome.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["even-001", "even-002"]);
    }

    #[test]
    fn unexpected_acceptance_fails_the_case() {
        let catalog = Catalog::new(vec![TestCase::failing("ab", "should reject", "whatever")]);
        let outcome = run_catalog(&catalog, Selection::All, &EvenLength, "even");
        assert_eq!(outcome.summary.failed, 1);
        assert_eq!(outcome.records[0].status, CaseStatus::Fail);
        assert!(outcome.records[0].error.is_none());
    }

    #[test]
    fn wrong_error_substring_fails_the_case() {
        let catalog = Catalog::new(vec![TestCase::failing("abc", "odd input", "not the message")]);
        let outcome = run_catalog(&catalog, Selection::All, &EvenLength, "even");
        assert_eq!(outcome.summary.failed, 1);
        // The validator's real message is still surfaced for the report.
        assert!(outcome.records[0].error.as_deref().unwrap().contains("must be even"));
    }

    #[test]
    fn selection_restricts_the_run() {
        let outcome = run_catalog(&catalog(), Selection::Valid, &EvenLength, "even");
        assert_eq!(outcome.summary.total, 1);
        assert_eq!(outcome.records[0].input, "ab");
    }

    #[test]
    fn merge_concatenates_runs() {
        let mut all = run_catalog(&catalog(), Selection::Valid, &EvenLength, "a");
        all.merge(run_catalog(&catalog(), Selection::Invalid, &EvenLength, "b"));
        assert_eq!(all.summary.total, 2);
        assert_eq!(all.records.len(), 2);
    }
}
