//! Output layer.
//!
//! Writes the artifacts of both pipelines:
//! - the timestamped report directory (charts, HTML page, JSON snapshot)
//! - the comma-separated export of extracted network findings

pub mod bundle;
pub mod records;

pub use bundle::{DIR_PREFIX, HTML_FILE, ReportBundle, SUMMARY_FILE};
pub use records::RecordWriter;
