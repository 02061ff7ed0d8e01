use crate::aggregator::AggregateCounters;
use crate::reporter::Reporter;
use crate::reporter::charts::ChartKind;
use crate::types::Severity;

/// A chart image the report links to, relative to the report itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    pub kind: ChartKind,
    pub file_name: String,
}

/// The `ProwlerReport.html` document.
pub struct HtmlReporter {
    image_width: u32,
    generated_at: String,
    charts: Vec<ChartImage>,
}

impl HtmlReporter {
    pub fn new(image_width: u32, generated_at: impl Into<String>) -> Self {
        Self {
            image_width,
            generated_at: generated_at.into(),
            charts: Vec::new(),
        }
    }

    pub fn with_charts(mut self, charts: Vec<ChartImage>) -> Self {
        self.charts = charts;
        self
    }

    fn severity_totals(counters: &AggregateCounters, passes: bool) -> String {
        let (counts, noun) = if passes {
            (&counters.passes, "passes")
        } else {
            (&counters.failures, "failures")
        };
        let mut lines: String = Severity::ALL
            .iter()
            .map(|s| format!("        <li>{} {noun}: {}</li>\n", s.title(), counts.get(*s)))
            .collect();
        lines.push_str(&format!(
            "        <li class=\"total\">Total {noun}: {}</li>\n",
            counts.classified_total()
        ));
        lines
    }
}

impl Reporter for HtmlReporter {
    fn report(&self, counters: &AggregateCounters) -> String {
        let charts_html: String = self
            .charts
            .iter()
            .map(|chart| {
                format!(
                    r#"
    <section class="chart">
        <h3>{}</h3>
        <img src="./{}" width="{}" alt="{}">
    </section>"#,
                    chart.kind.heading(),
                    html_escape(&chart.file_name),
                    self.image_width,
                    chart.kind.title(),
                )
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Prowler Report</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #1f2937;
            padding: 2rem;
        }}

        .chart {{
            margin-bottom: 2rem;
        }}

        ul {{
            list-style: none;
            padding: 0;
        }}

        .total {{
            font-weight: bold;
        }}
    </style>
</head>
<body>
    <h1>Prowler Report</h1>
    <p class="timestamp">{generated_at}</p>
{charts_html}

    <h2>Failures by Severity</h2>
    <ul>
{failures}    </ul>

    <h2>Passes by Severity</h2>
    <ul>
{passes}    </ul>
</body>
</html>
"#,
            generated_at = html_escape(&self.generated_at),
            failures = Self::severity_totals(counters, false),
            passes = Self::severity_totals(counters, true),
        )
    }
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
