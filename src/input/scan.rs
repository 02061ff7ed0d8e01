//! Prowler results reader.

use crate::error::{PostureError, Result};
use crate::types::{
    ACCOUNT_ID_COLUMN, SERVICE_NAME_COLUMN, SEVERITY_COLUMN, STATUS_COLUMN, ScanRecord,
};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

const DELIMITER: u8 = b';';

/// Positions of the required columns within a row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    status: usize,
    severity: usize,
    service: usize,
    account_id: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord, path: &Path) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}') == column)
                .ok_or_else(|| PostureError::MissingColumn {
                    path: path.to_path_buf(),
                    column: column.to_string(),
                })
        };

        Ok(Self {
            status: find(STATUS_COLUMN)?,
            severity: find(SEVERITY_COLUMN)?,
            service: find(SERVICE_NAME_COLUMN)?,
            account_id: find(ACCOUNT_ID_COLUMN)?,
        })
    }
}

/// Lazily yields [`ScanRecord`]s from a `;`-delimited results file.
///
/// The header row is consumed on construction and must name `STATUS`,
/// `SEVERITY`, `SERVICE_NAME` and `ACCOUNT_ID`; other columns are ignored.
/// A data row too short to hold a required column yields
/// [`PostureError::MissingField`].
pub struct ScanRecordReader<R: Read> {
    path: PathBuf,
    reader: csv::Reader<R>,
    columns: ColumnIndex,
    row: csv::StringRecord,
    failed: bool,
}

impl ScanRecordReader<File> {
    /// Open a results file.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| PostureError::read_error(path, e))?;
        debug!(path = %path.display(), "Opened results file");
        Self::from_reader(file, path)
    }
}

impl<R: Read> ScanRecordReader<R> {
    /// Wrap any reader. `path` is only used in error messages.
    pub fn from_reader(reader: R, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| PostureError::csv_parse_error(&path, e))?
            .clone();
        let columns = ColumnIndex::from_headers(&headers, &path)?;

        Ok(Self {
            path,
            reader,
            columns,
            row: csv::StringRecord::new(),
            failed: false,
        })
    }

    fn field(&self, index: usize, name: &str, line: u64) -> Result<String> {
        self.row
            .get(index)
            .map(str::to_string)
            .ok_or_else(|| PostureError::MissingField {
                path: self.path.clone(),
                line,
                field: name.to_string(),
            })
    }

    fn current_record(&self) -> Result<ScanRecord> {
        let line = self.row.position().map(|p| p.line()).unwrap_or(0);
        Ok(ScanRecord {
            status: self.field(self.columns.status, STATUS_COLUMN, line)?,
            severity: self.field(self.columns.severity, SEVERITY_COLUMN, line)?,
            service: self.field(self.columns.service, SERVICE_NAME_COLUMN, line)?,
            account_id: self.field(self.columns.account_id, ACCOUNT_ID_COLUMN, line)?,
            line,
        })
    }
}

impl<R: Read> Iterator for ScanRecordReader<R> {
    type Item = Result<ScanRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let item = match self.reader.read_record(&mut self.row) {
            Ok(true) => self.current_record(),
            Ok(false) => return None,
            Err(e) => Err(PostureError::csv_parse_error(&self.path, e)),
        };

        // Stop after the first error so callers never see rows past it.
        self.failed = item.is_err();
        Some(item)
    }
}
