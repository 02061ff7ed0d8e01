use crate::aggregator::AggregateCounters;
use crate::reporter::Reporter;
use crate::types::Severity;
use colored::Colorize;

const RULE_WIDTH: usize = 60;

/// Console summary of a posture run.
pub struct TerminalReporter {
    /// Print the row bookkeeping block.
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn rule(&self) -> String {
        format!("{}\n", "=".repeat(RULE_WIDTH).dimmed())
    }

    fn heading(&self, text: &str) -> String {
        format!("{}\n", text.bold())
    }

    fn severity_line(&self, severity: Severity, noun: &str, count: u64) -> String {
        let line = format!("{} {noun}: {count}", severity.title());
        let line = if count == 0 {
            line.normal()
        } else {
            match severity {
                Severity::Critical => line.red().bold(),
                Severity::High => line.yellow().bold(),
                Severity::Medium => line.cyan(),
                Severity::Low => line.white(),
            }
        };
        format!("{line}\n")
    }

    fn format_counts<'a>(
        &self,
        counts: impl IntoIterator<Item = (&'a String, &'a u64)>,
        width: usize,
    ) -> String {
        let mut output = String::new();
        for (key, value) in counts {
            output.push_str(&format!("{key:width$} {value}\n"));
        }
        output
    }

    fn format_bookkeeping(&self, counters: &AggregateCounters) -> String {
        let mut output = String::new();
        output.push_str(&format!("Total rows processed: {}\n", counters.rows_read));
        output.push_str(&format!(
            "Failures+Passes+Info: {}\n",
            counters.classified_rows()
        ));
        output.push_str(&format!("Header rows: {}\n", counters.header_rows));
        if counters.unrecognized_status > 0 {
            output.push_str(&format!(
                "{}\n",
                format!("Unrecognized status rows: {}", counters.unrecognized_status).yellow()
            ));
        }
        let unclassified = counters.failures.unclassified + counters.passes.unclassified;
        if unclassified > 0 {
            output.push_str(&format!(
                "{}\n",
                format!("Rows with unclassified severity: {unclassified}").yellow()
            ));
        }
        if counters.is_balanced() {
            output.push_str(&format!("{}\n", "Row counts balance.".green()));
        } else {
            output.push_str(&format!("{}\n", "Row counts do not balance!".red().bold()));
        }
        output
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, counters: &AggregateCounters) -> String {
        let mut output = String::new();

        output.push_str(&self.heading("Failures by service:"));
        output.push_str(&self.format_counts(&counters.service_failures, 15));
        output.push_str(&self.rule());

        output.push_str(&self.heading("Failures by account ID:"));
        output.push_str(&self.format_counts(&counters.account_failures, 20));
        output.push_str(&self.rule());

        output.push_str(&format!("{}\n", format!("Fail count: {}", counters.fail_total).red()));
        output.push_str(&format!("{}\n", format!("Pass count: {}", counters.pass_total).green()));
        output.push_str(&format!("Info count: {}\n", counters.info_total));
        output.push_str(&self.rule());

        for severity in Severity::ALL {
            output.push_str(&self.severity_line(severity, "failures", counters.failures.get(severity)));
        }
        output.push_str(&format!("Total failures: {}\n", counters.failures.classified_total()));
        output.push_str(&self.rule());

        for severity in Severity::ALL {
            output.push_str(&format!(
                "{} passes: {}\n",
                severity.title(),
                counters.passes.get(severity)
            ));
        }
        output.push_str(&format!("Total passes: {}\n", counters.passes.classified_total()));
        output.push_str(&self.rule());

        if self.verbose {
            output.push_str(&self.format_bookkeeping(counters));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScanRecord;

    fn counters() -> AggregateCounters {
        let mut counters = AggregateCounters::new();
        for (status, severity, service, account) in [
            ("FAIL", "high", "s3", "111111111111"),
            ("FAIL", "critical", "s3", "222222222222"),
            ("PASS", "low", "iam", "111111111111"),
            ("INFO", "low", "iam", "111111111111"),
            ("STATUS", "SEVERITY", "SERVICE_NAME", "ACCOUNT_ID"),
        ] {
            counters.record(&ScanRecord::new(status, severity, service, account));
        }
        counters
    }

    #[test]
    fn test_report_lists_services_and_accounts() {
        let output = TerminalReporter::new(false).report(&counters());

        assert!(output.contains("Failures by service:"));
        assert!(output.contains("s3              2"));
        assert!(output.contains("Failures by account ID:"));
        assert!(output.contains("111111111111         1"));
        assert!(output.contains("222222222222         1"));
    }

    #[test]
    fn test_report_status_and_severity_totals() {
        let output = TerminalReporter::new(false).report(&counters());

        assert!(output.contains("Fail count: 2"));
        assert!(output.contains("Pass count: 1"));
        assert!(output.contains("Info count: 1"));
        assert!(output.contains("High failures: 1"));
        assert!(output.contains("Critical failures: 1"));
        assert!(output.contains("Low passes: 1"));
        assert!(output.contains("Total failures: 2"));
        assert!(output.contains("Total passes: 1"));
    }

    #[test]
    fn test_report_bookkeeping_only_when_verbose() {
        let quiet = TerminalReporter::new(false).report(&counters());
        assert!(!quiet.contains("Total rows processed"));

        let verbose = TerminalReporter::default().report(&counters());
        assert!(verbose.contains("Total rows processed: 5"));
        assert!(verbose.contains("Failures+Passes+Info: 4"));
        assert!(verbose.contains("Header rows: 1"));
        assert!(verbose.contains("Row counts balance."));
    }

    #[test]
    fn test_report_flags_unrecognized_rows() {
        let mut counters = counters();
        counters.record(&ScanRecord::new("MANUAL", "low", "s3", "1"));
        let output = TerminalReporter::default().report(&counters);
        assert!(output.contains("Unrecognized status rows: 1"));
    }

    #[test]
    fn test_report_empty_counters() {
        let output = TerminalReporter::default().report(&AggregateCounters::new());
        assert!(output.contains("Fail count: 0"));
        assert!(output.contains("Total rows processed: 0"));
    }
}
