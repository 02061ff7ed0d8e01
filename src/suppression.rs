//! Exclusion of known-acceptable network findings.
//!
//! An [`ExclusionEntry`] suppresses an extracted record only when all four of
//! its fields (resource id, security group id, rule CIDR, rule port range)
//! equal the record's. There is no partial or wildcard matching.

use crate::extractor::ExtractedRecord;
use std::collections::HashSet;

/// One row of the exclusion list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExclusionEntry {
    pub resource_id: String,
    pub secgroup_id: String,
    pub sgrule_cidr: String,
    pub sgrule_portrange: String,
}

impl ExclusionEntry {
    pub fn new(
        resource_id: impl Into<String>,
        secgroup_id: impl Into<String>,
        sgrule_cidr: impl Into<String>,
        sgrule_portrange: impl Into<String>,
    ) -> Self {
        Self {
            resource_id: resource_id.into(),
            secgroup_id: secgroup_id.into(),
            sgrule_cidr: sgrule_cidr.into(),
            sgrule_portrange: sgrule_portrange.into(),
        }
    }

    /// The entry a record would need in order to be suppressed.
    pub fn for_record(record: &ExtractedRecord) -> Self {
        Self::new(
            record.resource_id.as_str(),
            record.secgroup_id.as_str(),
            record.sgrule_cidr.as_str(),
            record.sgrule_portrange.as_str(),
        )
    }
}

/// The exclusion list, loaded once and never mutated while filtering.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    entries: HashSet<ExclusionEntry>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: ExclusionEntry) {
        self.entries.insert(entry);
    }

    pub fn contains(&self, entry: &ExclusionEntry) -> bool {
        self.entries.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether some entry equals the record on all four key fields.
    pub fn is_excluded(&self, record: &ExtractedRecord) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.contains(&ExclusionEntry::for_record(record))
    }

    /// Split records into survivors and the number suppressed, keeping order.
    pub fn filter(&self, records: Vec<ExtractedRecord>) -> (Vec<ExtractedRecord>, usize) {
        let before = records.len();
        let kept: Vec<_> = records
            .into_iter()
            .filter(|record| !self.is_excluded(record))
            .collect();
        let suppressed = before - kept.len();
        (kept, suppressed)
    }
}

impl FromIterator<ExclusionEntry> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = ExclusionEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
