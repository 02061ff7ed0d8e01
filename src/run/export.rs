//! Network finding export pipeline: findings to filtered records to CSV.

use crate::error::Result;
use crate::extractor::extract_all;
use crate::input::{load_exclusions, load_findings};
use crate::output::RecordWriter;
use std::path::Path;
use tracing::info;

/// What an export run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOutcome {
    pub findings: usize,
    pub written: usize,
    pub suppressed: usize,
}

/// Extract every finding in `input`, drop excluded records, append the rest
/// to `output`.
pub fn run_export(input: &Path, output: &Path, exclusions: &Path) -> Result<ExportOutcome> {
    info!(input = %input.display(), output = %output.display(), "Exporting findings");
    let exclusions = load_exclusions(exclusions)?;
    let findings = load_findings(input)?;
    let extraction = extract_all(&findings, &exclusions)?;

    let written = RecordWriter::new(output).write_all(&extraction.records)?;

    Ok(ExportOutcome {
        findings: extraction.findings,
        written,
        suppressed: extraction.suppressed,
    })
}
