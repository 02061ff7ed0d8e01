use clap::Parser;
use posture_audit::{ExportCli, handlers::handle_export, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = ExportCli::parse();
    logging::init();
    handle_export(&cli).into()
}
