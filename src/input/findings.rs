//! Network Access Analyzer export loader.

use crate::error::{PostureError, Result};
use crate::types::Finding;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// `{"AnalysisFindings": [...]}` as written by `get-network-insights-access-scope-analysis-findings`.
#[derive(Debug, Deserialize)]
struct ExportDocument {
    #[serde(rename = "AnalysisFindings")]
    findings: Vec<Finding>,
}

/// Parse an export document held in memory.
///
/// A document opening with `[` is read as a bare array of findings; anything
/// else must be the export object. Choosing the shape up front keeps serde's
/// own message and position in the error.
pub fn parse_findings(content: &str, path: &Path) -> Result<Vec<Finding>> {
    let parsed = if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<Finding>>(content)
    } else {
        serde_json::from_str::<ExportDocument>(content).map(|document| document.findings)
    };
    parsed.map_err(|e| PostureError::json_parse_error(path, e))
}

/// Load every finding from an export file.
pub fn load_findings(path: &Path) -> Result<Vec<Finding>> {
    let content = fs::read_to_string(path).map_err(|e| PostureError::read_error(path, e))?;
    let findings = parse_findings(&content, path)?;
    debug!(path = %path.display(), count = findings.len(), "Loaded findings");
    Ok(findings)
}
