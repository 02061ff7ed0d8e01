//! The five charts of a posture report.

use super::svg::{BarChart, PieChart};
use crate::aggregator::{AggregateCounters, Breakdown};
use crate::types::Severity;

/// One chart of the report, in the order the report shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    FailureSeverityCount,
    ResultsByFail,
    ResultsBySeverity,
    FailuresByService,
    FailuresByAccount,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::FailureSeverityCount,
        ChartKind::ResultsByFail,
        ChartKind::ResultsBySeverity,
        ChartKind::FailuresByService,
        ChartKind::FailuresByAccount,
    ];

    /// File name prefix; the bundle appends `-<date>-<time>.svg`.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            ChartKind::FailureSeverityCount => "ProcessedResultsByFailureSeverityCount",
            ChartKind::ResultsByFail => "ResultsByFail",
            ChartKind::ResultsBySeverity => "ResultsbySeverity",
            ChartKind::FailuresByService => "FailuresByService",
            ChartKind::FailuresByAccount => "FailuresByAccount",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::FailureSeverityCount => "Processed Results by Failure Severity Count",
            ChartKind::ResultsByFail => "Results by Failure Severity",
            ChartKind::ResultsBySeverity => "Results by severity",
            ChartKind::FailuresByService => "Failures by service",
            ChartKind::FailuresByAccount => "Failures by account ID",
        }
    }

    /// Section heading in the HTML report.
    pub fn heading(&self) -> &'static str {
        match self {
            ChartKind::FailureSeverityCount => "Failures by Severity",
            ChartKind::ResultsByFail => "Failures by Result",
            ChartKind::ResultsBySeverity => "Pass/Fail by Severity",
            ChartKind::FailuresByService => "Failures by Service",
            ChartKind::FailuresByAccount => "Failures by Account",
        }
    }

    pub fn file_name(&self, stamp: &str) -> String {
        format!("{}-{stamp}.svg", self.file_prefix())
    }

    /// Render this chart as an SVG document.
    pub fn render(&self, counters: &AggregateCounters) -> String {
        match self {
            ChartKind::FailureSeverityCount => {
                let info = std::iter::once(("Info".to_string(), counters.info_total));
                let failures = Severity::ALL.iter().map(|s| {
                    (format!("{} Failures", s.title()), counters.failures.get(*s))
                });
                BarChart::new(self.title(), "count")
                    .with_bars(info.chain(failures))
                    .render()
            }
            ChartKind::ResultsByFail => {
                PieChart::new(self.title(), Breakdown::failures_by_severity(counters).shares)
                    .render()
            }
            ChartKind::ResultsBySeverity => {
                PieChart::new(self.title(), Breakdown::results_by_severity(counters).shares)
                    .render()
            }
            ChartKind::FailuresByService => BarChart::new(self.title(), "Failure count")
                .with_bars(counters.service_failures.clone())
                .render(),
            ChartKind::FailuresByAccount => BarChart::new(self.title(), "Failure count")
                .with_bars(counters.account_failures.clone())
                .render(),
        }
    }
}
