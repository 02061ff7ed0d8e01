//! Percentage breakdowns of aggregate counters.

use super::counters::AggregateCounters;
use crate::types::Severity;
use serde::Serialize;

/// One labelled share of a whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub label: String,
    pub count: u64,
    /// Percentage of the breakdown total, 0.0 when the total is zero.
    pub percent: f64,
}

impl Share {
    /// Legend text such as `High, 42.5%`.
    pub fn legend(&self) -> String {
        format!("{}, {:.1}%", self.label, self.percent)
    }
}

/// A set of shares over a common total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub total: u64,
    pub shares: Vec<Share>,
}

impl Breakdown {
    /// Build from labelled counts; the total is their sum.
    pub fn from_counts(counts: impl IntoIterator<Item = (String, u64)>) -> Self {
        let counts: Vec<_> = counts.into_iter().collect();
        let total = counts.iter().map(|(_, c)| c).sum();
        let shares = counts
            .into_iter()
            .map(|(label, count)| Share {
                label,
                count,
                percent: percentage(count, total),
            })
            .collect();
        Self { total, shares }
    }

    /// FAIL rows split by the four known severities.
    pub fn failures_by_severity(counters: &AggregateCounters) -> Self {
        Self::from_counts(
            Severity::ALL
                .iter()
                .map(|s| (s.title().to_string(), counters.failures.get(*s))),
        )
    }

    /// INFO plus every severity-within-status counter.
    pub fn results_by_severity(counters: &AggregateCounters) -> Self {
        let info = std::iter::once(("Info".to_string(), counters.info_total));
        let failed = Severity::ALL
            .iter()
            .map(|s| (format!("{}-Failed", s.title()), counters.failures.get(*s)));
        let passed = Severity::ALL
            .iter()
            .map(|s| (format!("{}-Passed", s.title()), counters.passes.get(*s)));
        Self::from_counts(info.chain(failed).chain(passed))
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// `part / whole * 100`, or 0.0 for an empty whole.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScanRecord;

    fn counters() -> AggregateCounters {
        let mut counters = AggregateCounters::new();
        for (status, severity) in [
            ("FAIL", "low"),
            ("FAIL", "high"),
            ("FAIL", "high"),
            ("FAIL", "critical"),
            ("PASS", "medium"),
            ("INFO", "low"),
        ] {
            counters.record(&ScanRecord::new(status, severity, "s3", "1"));
        }
        counters
    }

    #[test]
    fn test_failures_by_severity() {
        let breakdown = Breakdown::failures_by_severity(&counters());
        assert_eq!(breakdown.total, 4);
        let labels: Vec<_> = breakdown.shares.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Low", "Medium", "High", "Critical"]);
        assert_eq!(breakdown.shares[2].count, 2);
        assert_eq!(breakdown.shares[2].legend(), "High, 50.0%");
    }

    #[test]
    fn test_results_by_severity_has_nine_shares() {
        let breakdown = Breakdown::results_by_severity(&counters());
        assert_eq!(breakdown.shares.len(), 9);
        assert_eq!(breakdown.total, 6);
        assert_eq!(breakdown.shares[0].label, "Info");
        assert_eq!(breakdown.shares[6].label, "Medium-Passed");
        assert_eq!(breakdown.shares[6].count, 1);
    }

    #[test]
    fn test_empty_total_is_zero_percent() {
        let breakdown = Breakdown::failures_by_severity(&AggregateCounters::new());
        assert!(breakdown.is_empty());
        assert!(breakdown.shares.iter().all(|s| s.percent == 0.0));
        assert_eq!(breakdown.shares[0].legend(), "Low, 0.0%");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(0, 0), 0.0);
    }
}
