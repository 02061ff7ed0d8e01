//! Pipeline execution.
//!
//! Each pipeline reads and processes its whole input before any output is
//! created, so a failing run never leaves a partial artifact behind.

mod export;
mod report;

pub use export::{ExportOutcome, run_export};
pub use report::{ReportOutcome, run_report, run_report_at};
