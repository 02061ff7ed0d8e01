//! The timestamped report directory.

use crate::aggregator::AggregateCounters;
use crate::config::ReportConfig;
use crate::error::{PostureError, Result};
use crate::reporter::{ChartImage, ChartKind, HtmlReporter, JsonReporter, Reporter};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DIR_PREFIX: &str = "ResultsVisualizations";
pub const HTML_FILE: &str = "ProwlerReport.html";
pub const SUMMARY_FILE: &str = "summary.json";

const STAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";
const GENERATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A created report directory, ready to receive artifacts.
#[derive(Debug, Clone)]
pub struct ReportBundle {
    dir: PathBuf,
    stamp: String,
    generated_at: String,
}

impl ReportBundle {
    /// Create `<output_root>/ResultsVisualizations-<stamp>/`.
    pub fn create(output_root: &Path, now: DateTime<Local>) -> Result<Self> {
        let stamp = now.format(STAMP_FORMAT).to_string();
        let dir = output_root.join(format!("{DIR_PREFIX}-{stamp}"));
        fs::create_dir_all(&dir).map_err(|e| PostureError::create_error(&dir, e))?;
        debug!(dir = %dir.display(), "Created report directory");

        Ok(Self {
            dir,
            stamp,
            generated_at: now.format(GENERATED_FORMAT).to_string(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn stamp(&self) -> &str {
        &self.stamp
    }

    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        fs::write(&path, contents).map_err(|e| PostureError::write_error(&path, e))?;
        debug!(path = %path.display(), bytes = contents.len(), "Wrote artifact");
        Ok(path)
    }

    /// Write every chart, the HTML page and, if enabled, the JSON snapshot.
    ///
    /// Returns the written paths in write order.
    pub fn write_report(
        &self,
        counters: &AggregateCounters,
        config: &ReportConfig,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        let mut images = Vec::new();

        for kind in ChartKind::ALL {
            let file_name = kind.file_name(&self.stamp);
            written.push(self.write(&file_name, &kind.render(counters))?);
            images.push(ChartImage { kind, file_name });
        }

        let html = HtmlReporter::new(config.image_width, self.generated_at.as_str())
            .with_charts(images)
            .report(counters);
        written.push(self.write(HTML_FILE, &html)?);

        if config.write_summary_json {
            written.push(self.write(SUMMARY_FILE, &JsonReporter::new().report(counters))?);
        }

        info!(dir = %self.dir.display(), files = written.len(), "Report written");
        Ok(written)
    }
}
