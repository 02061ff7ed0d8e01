//! Prowler scan result rows.

use serde::{Deserialize, Serialize};

pub const STATUS_COLUMN: &str = "STATUS";
pub const SEVERITY_COLUMN: &str = "SEVERITY";
pub const SERVICE_NAME_COLUMN: &str = "SERVICE_NAME";
pub const ACCOUNT_ID_COLUMN: &str = "ACCOUNT_ID";

/// Columns every results file must name in its header row.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    STATUS_COLUMN,
    SEVERITY_COLUMN,
    SERVICE_NAME_COLUMN,
    ACCOUNT_ID_COLUMN,
];

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
    Info,
}

impl Status {
    /// Parse a status label. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "PASS" => Some(Status::Pass),
            "FAIL" => Some(Status::Fail),
            "INFO" => Some(Status::Info),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
            Status::Info => "INFO",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// Parse a severity label. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Capitalized label used in charts and reports.
    pub fn title(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// One data row of a results file, holding only the fields aggregation reads.
///
/// Values are kept verbatim; classification decides what an unknown status
/// or severity means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRecord {
    pub status: String,
    pub severity: String,
    pub service: String,
    pub account_id: String,
    /// 1-based line in the source file.
    pub line: u64,
}

impl ScanRecord {
    pub fn new(
        status: impl Into<String>,
        severity: impl Into<String>,
        service: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            status: status.into(),
            severity: severity.into(),
            service: service.into(),
            account_id: account_id.into(),
            line: 0,
        }
    }

    /// A row whose values repeat the column names, as left behind when
    /// several results files are concatenated.
    pub fn is_header_row(&self) -> bool {
        self.status == STATUS_COLUMN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_exact_match() {
        assert_eq!(Status::from_label("FAIL"), Some(Status::Fail));
        assert_eq!(Status::from_label("PASS"), Some(Status::Pass));
        assert_eq!(Status::from_label("INFO"), Some(Status::Info));
        assert_eq!(Status::from_label("fail"), None);
        assert_eq!(Status::from_label(" FAIL"), None);
        assert_eq!(Status::from_label("MANUAL"), None);
    }

    #[test]
    fn test_severity_exact_match() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_label(severity.as_str()), Some(severity));
        }
        assert_eq!(Severity::from_label("High"), None);
        assert_eq!(Severity::from_label("informational"), None);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
        assert_eq!(Severity::Low.title(), "Low");
    }

    #[test]
    fn test_header_row_detection() {
        let header = ScanRecord::new("STATUS", "SEVERITY", "SERVICE_NAME", "ACCOUNT_ID");
        assert!(header.is_header_row());

        let data = ScanRecord::new("FAIL", "high", "s3", "111111111111");
        assert!(!data.is_header_row());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&Status::Fail).unwrap();
        assert_eq!(json, "\"FAIL\"");
    }
}
