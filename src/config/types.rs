//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::error::ConfigError;

/// Prowler's default location for the access-denied filtered org results.
pub const DEFAULT_INPUT: &str =
    "/usr/local/prowler/output/prowler-fullorgresults-accessdeniedfiltered.txt";

/// Directory under which each report run creates its own timestamped folder.
pub const DEFAULT_OUTPUT_ROOT: &str = "/usr/local/prowler/output";

/// Main configuration structure for posture-audit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Compliance report settings.
    pub report: ReportConfig,
}

impl Config {
    /// Check values that deserialize fine but cannot produce a report.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report.image_width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "report.image_width",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Settings for the `posture-report` pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Results file read when no path is given on the command line.
    pub default_input: PathBuf,
    /// Parent directory for the timestamped visualization folder.
    pub output_root: PathBuf,
    /// Display width, in pixels, of each chart in the HTML report.
    pub image_width: u32,
    /// Also write the counters as `summary.json` next to the report.
    pub write_summary_json: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_input: PathBuf::from(DEFAULT_INPUT),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            image_width: 900,
            write_summary_json: true,
        }
    }
}
