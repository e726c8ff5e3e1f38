//! Verdict and error formatting.
//!
//! Two modes:
//! - **Human** (default): `PASS: ...` / `FAIL: ...` with one line per mismatch
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use kvharness_core::Error;
use kvharness_oracle::Verdict;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a verdict.
pub fn format_verdict(verdict: &Verdict, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => verdict.to_string(),
        OutputMode::Json => serde_json::to_string_pretty(verdict)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": err.to_string()
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {}", err),
    }
}
