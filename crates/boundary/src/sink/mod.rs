//! Row output for batch reports.
//!
//! Two row schemas:
//! - [`SummaryRow`] — one per batch
//! - [`RecordReport`] — one per record, as produced by validation
//!
//! One backend: [`ndjson::NdjsonSink`], newline-delimited JSON to any `Write`.

pub mod ndjson;

use crate::report::{BatchReport, RecordReport};
use serde::Serialize;

/// One row per batch — summary statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub source: String,
    pub total: u64,
    pub valid: u64,
    pub invalid: u64,
    pub load_time_ms: u64,
    pub total_time_ms: u64,
}

impl<T> BatchReport<T> {
    /// Flatten the report into sink-ready rows.
    pub fn to_rows(&self) -> (SummaryRow, &[RecordReport<T>]) {
        let summary = SummaryRow {
            source: self.source.clone(),
            total: saturating_u64(self.total),
            valid: saturating_u64(self.valid),
            invalid: saturating_u64(self.invalid),
            load_time_ms: saturating_u64(self.load_time.as_millis()),
            total_time_ms: saturating_u64(self.total_time.as_millis()),
        };
        (summary, &self.records)
    }
}

/// Clamps to `u64::MAX` instead of wrapping.
fn saturating_u64<N: TryInto<u64>>(n: N) -> u64 {
    n.try_into().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn summary_counts_and_timings_saturate() {
        let report = BatchReport::<()>::build("huge", Vec::new(), Duration::MAX, Duration::from_millis(1500));
        let (summary, records) = report.to_rows();
        assert!(records.is_empty());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.load_time_ms, u64::MAX);
        assert_eq!(summary.total_time_ms, 1500);
        assert_eq!(saturating_u64(u128::MAX), u64::MAX);
        assert_eq!(saturating_u64(usize::MAX), usize::MAX as u64);
    }
}
