//! Issue report formatting: plain text and JSON output.

use serde::Serialize;

use crate::issue::Issue;

/// Output format for lint reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    total: usize,
    issues: Vec<&'a Issue>,
}

/// Issues in report order: path, then line, then message.
#[must_use]
pub fn sorted_issues(issues: &[Issue]) -> Vec<&Issue> {
    let mut sorted: Vec<&Issue> = issues.iter().collect();
    sorted.sort_by(|a, b| a.report_cmp(b));
    sorted
}

/// Render issues in the given format.
///
/// A clean text report is empty so a passing run prints nothing.
#[must_use]
pub fn render_issues(issues: &[Issue], format: ReportFormat) -> String {
    match format {
        ReportFormat::Text => render_text(issues),
        ReportFormat::Json => render_json(issues),
    }
}

fn render_text(issues: &[Issue]) -> String {
    if issues.is_empty() {
        return String::new();
    }

    let mut output = format!("Found {} frontmatter issue(s):\n", issues.len());
    for issue in sorted_issues(issues) {
        output.push_str(&issue.to_string());
        output.push('\n');
    }
    output
}

fn render_json(issues: &[Issue]) -> String {
    let report = JsonReport {
        total: issues.len(),
        issues: sorted_issues(issues),
    };
    let mut output =
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string());
    output.push('\n');
    output
}
