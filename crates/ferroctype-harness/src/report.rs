//! Conformance report generation.
//!
//! Aggregates verification results into a deterministic, machine-readable
//! report with symbol-level roll-ups, plus a markdown rendering for humans.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::verify::VerificationResult;

/// Symbol-level aggregate row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolRow {
    pub symbol: String,
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    pub pass_rate_percent: f64,
}

/// Report summary counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceSummary {
    pub total_cases: u64,
    pub passed: u64,
    pub failed: u64,
    pub pass_rate_percent: f64,
}

/// Top-level conformance report payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub schema_version: String,
    pub campaign: String,
    pub family: String,
    pub generated_at_utc: String,
    pub summary: ConformanceSummary,
    pub symbol_rows: Vec<SymbolRow>,
    /// Failing cases only; passing cases are represented by the counters.
    pub failures: Vec<VerificationResult>,
}

impl ConformanceReport {
    /// Returns true when every case passed.
    pub fn all_passed(&self) -> bool {
        self.summary.failed == 0
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Build a deterministic report from verification results.
///
/// Rows are keyed and ordered by symbol name; failures keep the order the
/// results arrived in (fixture order is already stable).
pub fn build_report(
    campaign: &str,
    family: &str,
    generated_at_utc: &str,
    results: &[VerificationResult],
) -> ConformanceReport {
    let mut buckets: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for result in results {
        let bucket = buckets.entry(result.symbol.as_str()).or_insert((0, 0));
        bucket.0 += 1;
        if result.passed {
            bucket.1 += 1;
        }
    }

    let symbol_rows: Vec<SymbolRow> = buckets
        .into_iter()
        .map(|(symbol, (total, passed))| SymbolRow {
            symbol: symbol.to_string(),
            total,
            passed,
            failed: total - passed,
            pass_rate_percent: ratio_percent(passed, total),
        })
        .collect();

    let total_cases = results.len() as u64;
    let passed = results.iter().filter(|r| r.passed).count() as u64;
    let failed = total_cases - passed;

    ConformanceReport {
        schema_version: "v1".to_string(),
        campaign: campaign.to_string(),
        family: family.to_string(),
        generated_at_utc: generated_at_utc.to_string(),
        summary: ConformanceSummary {
            total_cases,
            passed,
            failed,
            pass_rate_percent: ratio_percent(passed, total_cases),
        },
        symbol_rows,
        failures: results.iter().filter(|r| !r.passed).cloned().collect(),
    }
}

/// Render the report as a markdown document.
pub fn render_markdown(report: &ConformanceReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# Conformance report: {} ({})\n\n",
        report.family, report.campaign
    ));
    out.push_str(&format!("Generated: {}\n\n", report.generated_at_utc));
    out.push_str(&format!(
        "**{}/{} cases passed ({:.2}%)**\n\n",
        report.summary.passed, report.summary.total_cases, report.summary.pass_rate_percent
    ));

    out.push_str("| Symbol | Total | Passed | Failed | Pass rate |\n");
    out.push_str("|---|---|---|---|---|\n");
    for row in &report.symbol_rows {
        out.push_str(&format!(
            "| `{}` | {} | {} | {} | {:.2}% |\n",
            row.symbol, row.total, row.passed, row.failed, row.pass_rate_percent
        ));
    }

    if !report.failures.is_empty() {
        out.push_str("\n## Failures\n\n");
        out.push_str("| Case | Input | Expected | Actual |\n");
        out.push_str("|---|---|---|---|\n");
        for failure in &report.failures {
            out.push_str(&format!(
                "| `{}` | {} | {} | {} |\n",
                failure.case_name, failure.input, failure.expected, failure.actual
            ));
        }
    }

    out
}

fn ratio_percent(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    (numerator as f64 * 100.0) / denominator as f64
}
