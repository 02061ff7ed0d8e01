//! `naa-export` handler.

use super::{HandlerResult, fail};
use crate::cli::ExportCli;
use crate::run::run_export;

/// Run the export pipeline and print a one-line summary.
pub fn handle_export(cli: &ExportCli) -> HandlerResult {
    match run_export(&cli.input, &cli.output, &cli.exclusions) {
        Ok(outcome) => {
            println!(
                "Wrote {} record(s) to {} ({} finding(s), {} excluded)",
                outcome.written,
                cli.output.display(),
                outcome.findings,
                outcome.suppressed
            );
            HandlerResult::Success
        }
        Err(e) => fail(&e),
    }
}
