//! Exclusion list loader.

use crate::error::{PostureError, Result};
use crate::suppression::{ExclusionEntry, ExclusionSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const COLUMNS: usize = 4;

/// Read exclusion entries from any reader. `path` is only used in error messages.
///
/// Rows are unheaded and comma-separated: resource id, security group id,
/// rule CIDR, rule port range. Columns past the fourth are ignored.
pub fn read_exclusions<R: Read>(reader: R, path: &Path) -> Result<ExclusionSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut set = ExclusionSet::new();
    for row in reader.records() {
        let row = row.map_err(|e| PostureError::csv_parse_error(path, e))?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        if row.len() < COLUMNS {
            return Err(PostureError::InvalidExclusion {
                path: path.to_path_buf(),
                line,
                message: format!("expected {COLUMNS} columns, found {}", row.len()),
            });
        }
        set.insert(ExclusionEntry::new(&row[0], &row[1], &row[2], &row[3]));
    }

    Ok(set)
}

/// Load the exclusion list once for the whole run.
pub fn load_exclusions(path: &Path) -> Result<ExclusionSet> {
    let file = File::open(path).map_err(|e| PostureError::read_error(path, e))?;
    let set = read_exclusions(file, path)?;
    debug!(path = %path.display(), entries = set.len(), "Loaded exclusions");
    Ok(set)
}
