//! `posture-report` handler.

use super::{HandlerResult, fail};
use crate::cli::ReportCli;
use crate::config::Config;
use crate::reporter::{Reporter, TerminalReporter};
use crate::run::run_report;
use std::env;
use tracing::{debug, info};

/// Load config, run the report pipeline and print the console summary.
pub fn handle_report(cli: &ReportCli) -> HandlerResult {
    let cwd = env::current_dir().ok();
    let config = Config::load(cwd.as_deref());
    let input = cli
        .input
        .clone()
        .unwrap_or_else(|| config.report.default_input.clone());
    debug!(input = %input.display(), output_root = %config.report.output_root.display(), "Resolved report paths");

    println!("Processing file: {}", input.display());
    match run_report(&input, &config.report) {
        Ok(outcome) => {
            print!("{}", TerminalReporter::new(cli.verbose).report(&outcome.counters));
            println!("Report written to {}", outcome.report_dir.display());
            info!(files = outcome.written.len(), "Report complete");
            HandlerResult::Success
        }
        Err(e) => fail(&e),
    }
}
