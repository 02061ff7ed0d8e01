//! Tabular export of extracted records.

use crate::error::{PostureError, Result};
use crate::extractor::{ExtractedRecord, FIELDS};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::info;

/// Appends extracted records to a comma-separated file.
///
/// A new file gets the 14-column header first; an existing one is appended
/// to as-is.
pub struct RecordWriter {
    path: PathBuf,
}

impl RecordWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write all records, returning how many rows were written.
    pub fn write_all(&self, records: &[ExtractedRecord]) -> Result<usize> {
        let exists = self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                if exists {
                    PostureError::append_error(&self.path, e)
                } else {
                    PostureError::create_error(&self.path, e)
                }
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);

        let to_error = |source| PostureError::Csv {
            path: self.path.clone(),
            source,
        };

        if !exists {
            writer.write_record(FIELDS).map_err(to_error)?;
        }
        for record in records {
            writer.write_record(record.as_row()).map_err(to_error)?;
        }
        writer
            .flush()
            .map_err(|e| PostureError::write_error(&self.path, e))?;

        info!(path = %self.path.display(), rows = records.len(), new_file = !exists, "Wrote records");
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "account,region,vpc_id,subnet_id,instance_id,instance_arn,instance_name,resource_id,resource_arn,secgroup_id,sgrule_direction,sgrule_cidr,sgrule_protocol,sgrule_portrange\r\n";

    fn record(resource: &str) -> ExtractedRecord {
        ExtractedRecord {
            account: "111111111111".to_string(),
            region: "us-east-1".to_string(),
            resource_id: resource.to_string(),
            sgrule_portrange: "22 to 22".to_string(),
            ..ExtractedRecord::default()
        }
    }

    #[test]
    fn test_new_file_gets_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        let written = RecordWriter::new(&path).write_all(&[record("eni-1")]).unwrap();
        assert_eq!(written, 1);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(HEADER));
        assert!(content.ends_with(
            "111111111111,us-east-1,N/A,N/A,N/A,N/A,N/A,eni-1,N/A,N/A,N/A,N/A,N/A,22 to 22\r\n"
        ));
    }

    #[test]
    fn test_existing_file_is_appended_without_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let writer = RecordWriter::new(&path);

        writer.write_all(&[record("eni-1")]).unwrap();
        writer.write_all(&[record("eni-2")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("account,region").count(), 1);
        assert_eq!(content.lines().count(), 3);
        assert!(content.contains("eni-2"));
    }

    #[test]
    fn test_empty_batch_still_creates_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        RecordWriter::new(&path).write_all(&[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), HEADER);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let mut r = record("eni-1");
        r.instance_name = "web, primary".to_string();

        RecordWriter::new(&path).write_all(&[r]).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"web, primary\""));
    }

    #[test]
    fn test_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = RecordWriter::new(&path).write_all(&[record("eni-1")]).unwrap_err();
        assert!(matches!(err, PostureError::Io { .. }));
    }
}
