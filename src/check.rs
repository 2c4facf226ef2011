//! Line-oriented endpoint checking.
//!
//! Each input line holds one record: an address, optionally followed by a tab
//! and a display name. Blank lines and lines starting with `#` are skipped.
//! Every record is normalized through [`EmailEndpoint::new`] and reported in
//! the configured [`OutputFormat`].

use crate::config::OutputFormat;
use crate::domain::EmailEndpoint;
use anyhow::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Result of checking a single record.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    /// 1-based input line number
    pub line: usize,

    /// Whether the record produced an endpoint with an address
    pub valid: bool,

    /// Rendered endpoint, absent when the address was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered: Option<String>,

    /// Normalized endpoint, absent when the address was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<EmailEndpoint>,

    /// Validation error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Records checked (skipped lines excluded)
    pub checked: usize,

    /// Records that were rejected or had no address
    pub failed: usize,
}

impl CheckSummary {
    /// Whether every checked record was valid.
    pub fn all_valid(&self) -> bool {
        self.failed == 0
    }
}

/// Split a line into its address and display-name columns.
///
/// Returns `None` for blank lines and `#` comments.
pub fn parse_record(line: &str) -> Option<(&str, Option<&str>)> {
    if line.trim().is_empty() || line.trim_start().starts_with('#') {
        return None;
    }

    match line.split_once('\t') {
        Some((address, display_name)) => Some((address, Some(display_name))),
        None => Some((line, None)),
    }
}

/// Checks endpoint records and reports them in a fixed output format.
pub struct EndpointChecker {
    format: OutputFormat,
}

impl EndpointChecker {
    /// Create a checker that reports in `format`.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check one input line. Returns `None` for skipped lines.
    pub fn check_line(&self, line_no: usize, line: &str) -> Option<CheckOutcome> {
        let (address, display_name) = parse_record(line)?;

        let outcome = match EmailEndpoint::new(Some(address), display_name) {
            Ok(endpoint) => CheckOutcome {
                line: line_no,
                valid: endpoint.is_valid(),
                rendered: Some(endpoint.to_string()),
                endpoint: Some(endpoint),
                error: None,
            },
            Err(e) => {
                debug!(line = line_no, error = %e, "Record rejected");
                CheckOutcome {
                    line: line_no,
                    valid: false,
                    rendered: None,
                    endpoint: None,
                    error: Some(e.to_string()),
                }
            }
        };

        Some(outcome)
    }

    /// Format an outcome as a single output line (without the newline).
    pub fn format_outcome(&self, outcome: &CheckOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(outcome)?),
            OutputFormat::Text => Ok(match (&outcome.rendered, &outcome.error) {
                (_, Some(error)) => format!("line {}: {}", outcome.line, error),
                (Some(rendered), None) => rendered.clone(),
                (None, None) => String::new(),
            }),
        }
    }

    /// Check every line of `input`, writing one report line per record to `output`.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<CheckSummary> {
        let mut summary = CheckSummary::default();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let Some(outcome) = self.check_line(index + 1, &line) else {
                continue;
            };

            summary.checked += 1;
            if !outcome.valid {
                summary.failed += 1;
            }

            writeln!(output, "{}", self.format_outcome(&outcome)?)?;
        }

        output.flush()?;
        info!(
            checked = summary.checked,
            failed = summary.failed,
            "Endpoint check complete"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        assert_eq!(parse_record("a@b.com"), Some(("a@b.com", None)));
        assert_eq!(
            parse_record("a@b.com\tAlice"),
            Some(("a@b.com", Some("Alice")))
        );
        assert_eq!(parse_record("   "), None);
        assert_eq!(parse_record("  # comment"), None);
    }

    #[test]
    fn test_check_line_valid() {
        let checker = EndpointChecker::new(OutputFormat::Text);
        let outcome = checker.check_line(3, " a@b.com \tAlice").unwrap();
        assert_eq!(outcome.line, 3);
        assert!(outcome.valid);
        assert_eq!(outcome.rendered.as_deref(), Some("Alice <a@b.com>"));
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_check_line_rejected() {
        let checker = EndpointChecker::new(OutputFormat::Text);
        let outcome = checker.check_line(1, "not-an-email").unwrap();
        assert!(!outcome.valid);
        assert!(outcome.endpoint.is_none());
        assert_eq!(
            outcome.error.as_deref(),
            Some("Invalid parameter format: address")
        );
        assert_eq!(
            checker.format_outcome(&outcome).unwrap(),
            "line 1: Invalid parameter format: address"
        );
    }

    #[test]
    fn test_check_line_blank_address() {
        let checker = EndpointChecker::new(OutputFormat::Text);
        let outcome = checker.check_line(1, " \tAlice").unwrap();
        assert!(!outcome.valid);
        assert_eq!(outcome.rendered.as_deref(), Some("Invalid address"));
    }

    #[test]
    fn test_format_json() {
        let checker = EndpointChecker::new(OutputFormat::Json);
        let outcome = checker.check_line(2, "a@b.com").unwrap();
        let line = checker.format_outcome(&outcome).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["line"], 2);
        assert_eq!(value["valid"], true);
        assert_eq!(value["rendered"], "a@b.com");
        assert_eq!(value["endpoint"]["address"], "a@b.com");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_run_counts_failures() {
        let input = "# header\na@b.com\tAlice\n\nbogus\nc@d.org\n";
        let mut output = Vec::new();

        let checker = EndpointChecker::new(OutputFormat::Text);
        let summary = checker.run(input.as_bytes(), &mut output).unwrap();

        assert_eq!(summary, CheckSummary { checked: 3, failed: 1 });
        assert!(!summary.all_valid());
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Alice <a@b.com>\nline 4: Invalid parameter format: address\nc@d.org\n"
        );
    }
}
