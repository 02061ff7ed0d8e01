pub mod charts;
pub mod html;
pub mod json;
pub mod svg;
pub mod terminal;

use crate::aggregator::AggregateCounters;

pub use charts::ChartKind;
pub use html::{ChartImage, HtmlReporter};
pub use json::JsonReporter;
pub use terminal::TerminalReporter;

pub trait Reporter {
    fn report(&self, counters: &AggregateCounters) -> String;
}
