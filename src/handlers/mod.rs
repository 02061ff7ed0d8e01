//! CLI command handlers.
//!
//! Handlers own the mapping from pipeline results to console output and
//! process exit codes; everything below them returns `Result`.

mod export;
mod report;

use crate::error::PostureError;
use std::process::ExitCode;
use tracing::debug;

pub use export::handle_export;
pub use report::handle_report;

/// Result type for handler functions that can be tested.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResult {
    Success,
    Error(u8),
}

impl From<HandlerResult> for ExitCode {
    fn from(result: HandlerResult) -> Self {
        match result {
            HandlerResult::Success => ExitCode::SUCCESS,
            HandlerResult::Error(code) => ExitCode::from(code),
        }
    }
}

impl From<&PostureError> for HandlerResult {
    fn from(err: &PostureError) -> Self {
        HandlerResult::Error(err.exit_code())
    }
}

/// Report a pipeline error on stderr and pick the exit code.
fn fail(err: &PostureError) -> HandlerResult {
    eprintln!("Error: {}", err);
    debug!(root_cause = %err.root_cause(), "Run failed");
    HandlerResult::from(err)
}
