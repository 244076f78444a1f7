//! Report rendering for conformance runs.
//!
//! Renders a [`RunOutcome`] to console text, Markdown, or JSON. The JSON
//! shape (`metadata` / `summary` / `results`) is the contract downstream
//! dashboards consume; the human-readable formats carry the same fields.

use std::fs;
use std::path::Path;

use chrono::Utc;
use thiserror::Error;

use crate::runner::{CaseStatus, RunOutcome};

// ============================================================================
// FORMATS AND ERRORS
// ============================================================================

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Plain text for terminals.
    #[default]
    Console,
    /// A Markdown document with summary and result tables.
    Markdown,
    /// The machine-readable report object.
    Json,
}

/// Failures while producing or persisting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// RENDERING
// ============================================================================

/// Renders the outcome in the requested format.
pub fn render(outcome: &RunOutcome, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Console => Ok(render_console(outcome)),
        ReportFormat::Markdown => Ok(render_markdown(outcome)),
        ReportFormat::Json => render_json(outcome),
    }
}

/// Renders and writes the outcome to `path`, creating parent directories.
pub fn write_report(
    outcome: &RunOutcome,
    format: ReportFormat,
    path: &Path,
) -> Result<(), ReportError> {
    let rendered = render(outcome, format)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, rendered)?;
    Ok(())
}

fn render_console(outcome: &RunOutcome) -> String {
    let summary = &outcome.summary;
    let mut out = String::new();
    out.push_str(&format!(
        "{} cases: {} passed, {} failed ({:.1}% pass rate)\n",
        summary.total,
        summary.passed,
        summary.failed,
        summary.pass_rate()
    ));
    for record in &outcome.records {
        out.push_str(&format!(
            "[{}] {} '{}' - {}\n",
            record.status, record.id, record.input, record.description
        ));
        if let Some(error) = &record.error {
            out.push_str(&format!("       {error}\n"));
        }
    }
    out
}

fn render_markdown(outcome: &RunOutcome) -> String {
    let summary = &outcome.summary;
    let mut out = String::new();
    out.push_str("# Conformance Report\n\n");
    out.push_str(&format!("Generated: {}\n\n", Utc::now().to_rfc3339()));

    out.push_str("## Summary\n\n");
    out.push_str("| Total | Passed | Failed | Pass rate |\n");
    out.push_str("|-------|--------|--------|-----------|\n");
    out.push_str(&format!(
        "| {} | {} | {} | {:.1}% |\n\n",
        summary.total,
        summary.passed,
        summary.failed,
        summary.pass_rate()
    ));

    out.push_str("## Results\n\n");
    out.push_str("| ID | Status | Input | Description | Error |\n");
    out.push_str("|----|--------|-------|-------------|-------|\n");
    for record in &outcome.records {
        let marker = match record.status {
            CaseStatus::Pass => "✅ PASS",
            CaseStatus::Fail => "❌ FAIL",
        };
        out.push_str(&format!(
            "| {} | {} | `{}` | {} | {} |\n",
            record.id,
            marker,
            escape_cell(&record.input),
            escape_cell(&record.description),
            record.error.as_deref().map(escape_cell).unwrap_or_default(),
        ));
    }
    out
}

fn render_json(outcome: &RunOutcome) -> Result<String, ReportError> {
    let report = serde_json::json!({
        "metadata": {
            "project": "onboard",
            "version": env!("CARGO_PKG_VERSION"),
            "generated_at": Utc::now().to_rfc3339(),
        },
        "summary": {
            "total": outcome.summary.total,
            "passed": outcome.summary.passed,
            "failed": outcome.summary.failed,
            "pass_rate": outcome.summary.pass_rate(),
        },
        "results": outcome.records,
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

// Markdown table cells cannot hold raw pipes or newlines.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::runner::CaseRecord;
    use crate::summary::Summary;

    fn sample_outcome() -> RunOutcome {
        let mut summary = Summary::default();
        summary.record(true);
        summary.record(false);
        RunOutcome {
            records: vec![
                CaseRecord {
                    id: "mobile-001".into(),
                    description: "Valid number".into(),
                    status: CaseStatus::Pass,
                    input: "9552931377".into(),
                    error: None,
                },
                CaseRecord {
                    id: "mobile-002".into(),
                    description: "Pipe | in description".into(),
                    status: CaseStatus::Fail,
                    input: "12345".into(),
                    error: Some("Mobile number must be 10 digits (found 5)".into()),
                },
            ],
            summary,
        }
    }

    #[test]
    fn console_lists_every_record() {
        let text = render(&sample_outcome(), ReportFormat::Console).unwrap();
        assert!(text.contains("2 cases: 1 passed, 1 failed (50.0% pass rate)"));
        assert!(text.contains("[PASS] mobile-001"));
        assert!(text.contains("[FAIL] mobile-002"));
        assert!(text.contains("found 5"));
    }

    #[test]
    fn markdown_escapes_table_cells() {
        let text = render(&sample_outcome(), ReportFormat::Markdown).unwrap();
        assert!(text.contains("# Conformance Report"));
        assert!(text.contains("Pipe \\| in description"));
        assert!(text.contains("| 2 | 1 | 1 | 50.0% |"));
    }

    #[test]
    fn json_roundtrips_with_expected_shape() {
        let text = render(&sample_outcome(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["summary"]["total"], 2);
        assert_eq!(value["results"][0]["status"], "PASS");
        assert_eq!(value["results"][1]["error"],
            "Mobile number must be 10 digits (found 5)");
        assert!(value["metadata"]["generated_at"].is_string());
    }

    #[test]
    fn write_report_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/reports/run.json");
        write_report(&sample_outcome(), ReportFormat::Json, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"total\": 2"));
    }
}
