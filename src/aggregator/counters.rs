//! Counter aggregation over scan records.

use crate::types::{ACCOUNT_ID_COLUMN, SERVICE_NAME_COLUMN, ScanRecord, Severity, Status};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Per-severity counts for one status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub low: u64,
    pub medium: u64,
    pub high: u64,
    pub critical: u64,
    /// Rows whose severity label is not one of the four known values.
    pub unclassified: u64,
}

impl SeverityCounts {
    pub fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Critical => self.critical,
        }
    }

    fn bump(&mut self, severity: Option<Severity>) {
        let slot = match severity {
            Some(Severity::Low) => &mut self.low,
            Some(Severity::Medium) => &mut self.medium,
            Some(Severity::High) => &mut self.high,
            Some(Severity::Critical) => &mut self.critical,
            None => &mut self.unclassified,
        };
        *slot += 1;
    }

    /// Sum over the four known severities.
    pub fn classified_total(&self) -> u64 {
        self.low + self.medium + self.high + self.critical
    }
}

/// How a single record was counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A row repeating the column names; counted nowhere else.
    Header,
    Counted(Status),
    /// Status other than PASS, FAIL or INFO; counted nowhere else.
    UnrecognizedStatus,
}

/// Every counter a report is built from.
///
/// One instance lives for one run and only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateCounters {
    pub fail_total: u64,
    pub pass_total: u64,
    pub info_total: u64,
    pub failures: SeverityCounts,
    pub passes: SeverityCounts,
    pub service_failures: BTreeMap<String, u64>,
    pub account_failures: BTreeMap<String, u64>,
    /// All data rows seen, headers included.
    pub rows_read: u64,
    pub header_rows: u64,
    pub unrecognized_status: u64,
}

impl AggregateCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one record.
    pub fn record(&mut self, record: &ScanRecord) -> Classification {
        self.rows_read += 1;

        if record.is_header_row() {
            self.header_rows += 1;
            return Classification::Header;
        }

        let Some(status) = Status::from_label(&record.status) else {
            warn!(line = record.line, status = %record.status, "Skipping row with unrecognized status");
            self.unrecognized_status += 1;
            return Classification::UnrecognizedStatus;
        };

        let severity = Severity::from_label(&record.severity);
        if severity.is_none() && status != Status::Info {
            debug!(line = record.line, severity = %record.severity, "Unclassified severity");
        }

        match status {
            Status::Fail => {
                self.fail_total += 1;
                self.failures.bump(severity);
                if record.service != SERVICE_NAME_COLUMN {
                    *self
                        .service_failures
                        .entry(record.service.clone())
                        .or_default() += 1;
                }
                if record.account_id != ACCOUNT_ID_COLUMN {
                    *self
                        .account_failures
                        .entry(record.account_id.clone())
                        .or_default() += 1;
                }
            }
            Status::Pass => {
                self.pass_total += 1;
                self.passes.bump(severity);
            }
            Status::Info => self.info_total += 1,
        }

        Classification::Counted(status)
    }

    /// Rows that landed in a status total.
    pub fn classified_rows(&self) -> u64 {
        self.fail_total + self.pass_total + self.info_total
    }

    /// Check the accounting identities between counter families.
    pub fn is_balanced(&self) -> bool {
        self.fail_total == self.failures.classified_total() + self.failures.unclassified
            && self.pass_total == self.passes.classified_total() + self.passes.unclassified
            && self.classified_rows() + self.unrecognized_status
                == self.rows_read - self.header_rows
            && self.service_failures.values().sum::<u64>() <= self.fail_total
            && self.account_failures.values().sum::<u64>() <= self.fail_total
    }

    /// Fail count for a service; zero when the service never failed.
    pub fn service_failures(&self, service: &str) -> u64 {
        self.service_failures.get(service).copied().unwrap_or(0)
    }

    /// Fail count for an account; zero when the account never failed.
    pub fn account_failures(&self, account_id: &str) -> u64 {
        self.account_failures.get(account_id).copied().unwrap_or(0)
    }
}
