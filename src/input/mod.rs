//! Input layer: record sources for both pipelines.
//!
//! Each source is bounded and read in one pass. Reopening the file restarts
//! the sequence.
//! - `scan`: `;`-delimited Prowler results, yielded row by row
//! - `findings`: Network Access Analyzer JSON export
//! - `exclusions`: unheaded comma-separated exclusion list

pub mod exclusions;
pub mod findings;
pub mod scan;

pub use exclusions::load_exclusions;
pub use findings::load_findings;
pub use scan::ScanRecordReader;
