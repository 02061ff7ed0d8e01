//! Domain vocabulary shared by both pipelines.
//!
//! - `scan`: Prowler result rows and their status/severity classification
//! - `finding`: Network Access Analyzer findings normalized into a closed
//!   set of component variants

mod finding;
mod scan;

pub use finding::{
    Component, ComponentEntry, Finding, PortRange, RawFinding, ResourceRef, RuleRef, RulePeer,
    SecurityGroupRule,
};
pub use scan::{
    ACCOUNT_ID_COLUMN, REQUIRED_COLUMNS, SERVICE_NAME_COLUMN, SEVERITY_COLUMN, STATUS_COLUMN,
    ScanRecord, Severity, Status,
};
