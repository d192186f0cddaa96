#![allow(dead_code)]

use std::sync::Arc;

use porthist::{HistoryDownloadManager, HistorySource, Sample};
use porthist_mock::{DynamicMockController, DynamicMockSource};

/// Port used by most tests.
pub const PORT: &str = "boiler.temperature";

/// Build samples from `(timestamp, value)` pairs.
pub fn samples(rows: &[(i64, f64)]) -> Vec<Sample> {
    rows.iter().map(|&(t, v)| Sample::new(t, v)).collect()
}

/// A dense series with one sample per `step` millis in `[from, to)`.
pub fn dense(from: i64, to: i64, step: usize) -> Vec<Sample> {
    (from..to)
        .step_by(step)
        .map(|t| Sample::new(t, 1.0))
        .collect()
}

/// Timestamps of a sample list.
pub fn stamps(samples: &[Sample]) -> Vec<i64> {
    samples.iter().map(|s| s.timestamp).collect()
}

/// `(from, to)` of each cached interval.
pub fn ranges(m: &HistoryDownloadManager) -> Vec<(i64, i64)> {
    m.cached_intervals()
        .iter()
        .map(|iv| (iv.from(), iv.to()))
        .collect()
}

/// Dynamic mock serving `series` on [`PORT`].
pub async fn mock_with_series(
    series: Vec<Sample>,
) -> (Arc<dyn HistorySource>, DynamicMockController) {
    let (source, controller) = DynamicMockSource::new_with_controller("gateway-mock");
    controller.set_series(PORT, series).await;
    (source, controller)
}

/// Manager over `source` with the given page size.
pub fn manager(source: Arc<dyn HistorySource>, page_limit: usize) -> HistoryDownloadManager {
    HistoryDownloadManager::builder(PORT, source)
        .page_limit(page_limit)
        .build()
        .expect("valid manager config")
}
