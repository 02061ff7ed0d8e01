//! Compliance report pipeline: results file to counters to report directory.

use crate::aggregator::{AggregateCounters, aggregate};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::input::ScanRecordReader;
use crate::output::ReportBundle;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

/// What a report run produced.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub counters: AggregateCounters,
    pub report_dir: PathBuf,
    pub written: Vec<PathBuf>,
}

/// Aggregate `input` and write the report under the configured output root.
pub fn run_report(input: &Path, config: &ReportConfig) -> Result<ReportOutcome> {
    run_report_at(input, config, Local::now())
}

/// [`run_report`] with an explicit report time.
pub fn run_report_at(
    input: &Path,
    config: &ReportConfig,
    now: DateTime<Local>,
) -> Result<ReportOutcome> {
    info!(input = %input.display(), "Processing results file");
    let counters = aggregate(ScanRecordReader::open(input)?)?;

    let bundle = ReportBundle::create(&config.output_root, now)?;
    let written = bundle.write_report(&counters, config)?;

    Ok(ReportOutcome {
        counters,
        report_dir: bundle.dir().to_path_buf(),
        written,
    })
}
