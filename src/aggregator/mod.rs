//! Aggregation layer.
//!
//! Classifies every scan record into status, severity-within-status,
//! per-service and per-account counters, and derives percentage breakdowns
//! for presentation.

pub mod counters;
pub mod summary;

pub use counters::{AggregateCounters, Classification, SeverityCounts};
pub use summary::{Breakdown, Share, percentage};

use crate::error::Result;
use crate::types::ScanRecord;
use tracing::info;

/// Count every record of a source.
///
/// The first source error aborts aggregation: totals over a partially read
/// file would not balance.
pub fn aggregate<I>(records: I) -> Result<AggregateCounters>
where
    I: IntoIterator<Item = Result<ScanRecord>>,
{
    let mut counters = AggregateCounters::new();
    for record in records {
        counters.record(&record?);
    }

    info!(
        rows = counters.rows_read,
        fail = counters.fail_total,
        pass = counters.pass_total,
        info = counters.info_total,
        "Aggregation complete"
    );
    Ok(counters)
}
