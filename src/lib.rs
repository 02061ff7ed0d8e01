pub mod aggregator;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod handlers;
pub mod input;
pub mod logging;
pub mod output;
pub mod reporter;
pub mod run;
pub mod suppression;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use aggregator::{AggregateCounters, Breakdown, SeverityCounts, aggregate};
pub use cli::{ExportCli, ReportCli};
pub use config::{Config, ConfigError, ReportConfig};
pub use error::{PostureError, Result};
pub use extractor::{ExtractedRecord, Extraction, extract, extract_all};
pub use input::{ScanRecordReader, load_exclusions, load_findings};
pub use output::{RecordWriter, ReportBundle};
pub use reporter::{
    ChartKind, Reporter, html::HtmlReporter, json::JsonReporter, terminal::TerminalReporter,
};
pub use run::{ExportOutcome, ReportOutcome, run_export, run_report};
pub use suppression::{ExclusionEntry, ExclusionSet};
pub use types::{Component, Finding, ScanRecord, Severity, Status};
