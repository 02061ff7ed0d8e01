use clap::Parser;
use posture_audit::{ReportCli, handlers::handle_report, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = ReportCli::parse();
    logging::init();
    handle_report(&cli).into()
}
