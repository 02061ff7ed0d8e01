use crate::aggregator::AggregateCounters;
use crate::reporter::Reporter;

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, counters: &AggregateCounters) -> String {
        serde_json::to_string_pretty(counters)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize counters: {}"}}"#, e))
    }
}
