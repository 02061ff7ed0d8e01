//! Minimal SVG chart primitives.
//!
//! Charts render to self-contained SVG documents so the report needs no
//! plotting backend. Geometry is fixed; only the data varies.

use super::html::html_escape;
use crate::aggregator::Share;
use std::f64::consts::PI;

const PALETTE: [&str; 9] = [
    "#2563eb", "#ca8a04", "#ea580c", "#dc2626", "#16a34a", "#7c3aed", "#0891b2", "#db2777",
    "#4b5563",
];

const FONT: &str = "font-family=\"-apple-system, 'Segoe UI', Roboto, sans-serif\"";

/// Horizontal bar chart, one bar per labelled value.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub bars: Vec<(String, u64)>,
}

impl BarChart {
    const WIDTH: f64 = 900.0;
    const LABEL_WIDTH: f64 = 220.0;
    const ROW_HEIGHT: f64 = 28.0;
    const TOP: f64 = 60.0;
    const BOTTOM: f64 = 50.0;

    pub fn new(title: impl Into<String>, x_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            bars: Vec::new(),
        }
    }

    pub fn with_bars(mut self, bars: impl IntoIterator<Item = (String, u64)>) -> Self {
        self.bars.extend(bars);
        self
    }

    pub fn render(&self) -> String {
        let plot_width = Self::WIDTH - Self::LABEL_WIDTH - 80.0;
        let height = Self::TOP + Self::ROW_HEIGHT * self.bars.len().max(1) as f64 + Self::BOTTOM;
        let max = self.bars.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1) as f64;

        let rows: String = self
            .bars
            .iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let y = Self::TOP + Self::ROW_HEIGHT * i as f64;
                let bar_width = *value as f64 / max * plot_width;
                format!(
                    r##"
  <text x="{label_x:.1}" y="{text_y:.1}" text-anchor="end" font-size="12">{label}</text>
  <rect x="{x:.1}" y="{bar_y:.1}" width="{bar_width:.1}" height="{bar_height:.1}" fill="{color}"/>
  <text x="{value_x:.1}" y="{text_y:.1}" font-size="12">{value}</text>"##,
                    label_x = Self::LABEL_WIDTH - 8.0,
                    text_y = y + Self::ROW_HEIGHT / 2.0 + 4.0,
                    label = html_escape(label),
                    x = Self::LABEL_WIDTH,
                    bar_y = y + 4.0,
                    bar_height = Self::ROW_HEIGHT - 8.0,
                    color = PALETTE[0],
                    value_x = Self::LABEL_WIDTH + bar_width + 6.0,
                )
            })
            .collect();

        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height:.0}" viewBox="0 0 {width} {height:.0}" {FONT}>
  <rect width="100%" height="100%" fill="white"/>
  <text x="{center:.1}" y="30" text-anchor="middle" font-size="16" font-weight="bold">{title}</text>{rows}
  <line x1="{axis_x:.1}" y1="{top:.1}" x2="{axis_x:.1}" y2="{axis_bottom:.1}" stroke="#1f2937"/>
  <text x="{x_label_x:.1}" y="{x_label_y:.1}" text-anchor="middle" font-size="12">{x_label}</text>
</svg>
"##,
            width = Self::WIDTH,
            center = Self::WIDTH / 2.0,
            title = html_escape(&self.title),
            axis_x = Self::LABEL_WIDTH,
            top = Self::TOP,
            axis_bottom = height - Self::BOTTOM,
            x_label_x = Self::LABEL_WIDTH + plot_width / 2.0,
            x_label_y = height - 15.0,
            x_label = html_escape(&self.x_label),
        )
    }
}

/// Pie chart with a percentage legend.
#[derive(Debug, Clone)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<Share>,
}

impl PieChart {
    const WIDTH: f64 = 900.0;
    const HEIGHT: f64 = 420.0;
    const CX: f64 = 220.0;
    const CY: f64 = 230.0;
    const RADIUS: f64 = 160.0;

    pub fn new(title: impl Into<String>, slices: Vec<Share>) -> Self {
        Self {
            title: title.into(),
            slices,
        }
    }

    fn point(angle: f64, radius: f64) -> (f64, f64) {
        (
            Self::CX + radius * angle.sin(),
            Self::CY - radius * angle.cos(),
        )
    }

    fn wedges(&self) -> String {
        let total: u64 = self.slices.iter().map(|s| s.count).sum();
        if total == 0 {
            return format!(
                r##"
  <circle cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke="#9ca3af"/>
  <text x="{cx}" y="{cy}" text-anchor="middle" font-size="14" fill="#6b7280">No data</text>"##,
                cx = Self::CX,
                cy = Self::CY,
                r = Self::RADIUS,
            );
        }

        let mut wedges = String::new();
        let mut start = 0.0_f64;
        for (i, slice) in self.slices.iter().enumerate() {
            if slice.count == 0 {
                continue;
            }
            let color = PALETTE[i % PALETTE.len()];
            let sweep = slice.count as f64 / total as f64 * 2.0 * PI;

            if slice.count == total {
                wedges.push_str(&format!(
                    r#"
  <circle cx="{}" cy="{}" r="{}" fill="{color}"/>"#,
                    Self::CX,
                    Self::CY,
                    Self::RADIUS
                ));
            } else {
                let (x1, y1) = Self::point(start, Self::RADIUS);
                let (x2, y2) = Self::point(start + sweep, Self::RADIUS);
                let large_arc = u8::from(sweep > PI);
                wedges.push_str(&format!(
                    r#"
  <path d="M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z" fill="{color}" stroke="white"/>"#,
                    cx = Self::CX,
                    cy = Self::CY,
                    r = Self::RADIUS,
                ));
            }

            let (lx, ly) = Self::point(start + sweep / 2.0, Self::RADIUS * 0.65);
            wedges.push_str(&format!(
                r#"
  <text x="{lx:.2}" y="{ly:.2}" text-anchor="middle" font-size="12" fill="white">{}</text>"#,
                slice.count
            ));
            start += sweep;
        }
        wedges
    }

    fn legend(&self) -> String {
        self.slices
            .iter()
            .enumerate()
            .map(|(i, slice)| {
                let y = 80.0 + 24.0 * i as f64;
                format!(
                    r#"
  <rect x="440" y="{box_y:.1}" width="14" height="14" fill="{color}"/>
  <text x="462" y="{text_y:.1}" font-size="12">{legend}</text>"#,
                    box_y = y - 11.0,
                    text_y = y,
                    color = PALETTE[i % PALETTE.len()],
                    legend = html_escape(&slice.legend()),
                )
            })
            .collect()
    }

    pub fn render(&self) -> String {
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" {FONT}>
  <rect width="100%" height="100%" fill="white"/>
  <text x="{center}" y="30" text-anchor="middle" font-size="16" font-weight="bold">{title}</text>{wedges}{legend}
</svg>
"##,
            width = Self::WIDTH,
            height = Self::HEIGHT,
            center = Self::WIDTH / 2.0,
            title = html_escape(&self.title),
            wedges = self.wedges(),
            legend = self.legend(),
        )
    }
}
