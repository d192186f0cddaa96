use async_trait::async_trait;
use porthist_core::{HistoryError, HistorySource, PortId, Sample};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior, RecordedRequest};

/// Answer a page request from an in-memory ascending series, honoring the
/// source contract: `[from, to)`, ascending, at most `limit` samples.
#[must_use]
pub fn page(series: &[Sample], from: i64, to: i64, limit: usize) -> Vec<Sample> {
    let start = series.partition_point(|s| s.timestamp < from);
    series[start..]
        .iter()
        .take_while(|s| s.timestamp < to)
        .take(limit)
        .copied()
        .collect()
}

/// Mock source for CI-safe demos. Provides deterministic data from static fixtures.
///
/// Port names `FAIL` and `SLOW` force a source error and a short delay respectively.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Create the fixture-backed mock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_delay(port: &str) -> Result<(), HistoryError> {
        match port {
            "FAIL" => Err(HistoryError::source(
                "porthist-mock",
                format!("forced failure: history for {port}"),
            )),
            "SLOW" => {
                // Keep short to avoid slowing tests excessively
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl HistorySource for MockSource {
    fn name(&self) -> &'static str {
        "porthist-mock"
    }

    async fn history(
        &self,
        port: &PortId,
        from: i64,
        to: i64,
        limit: usize,
    ) -> Result<Vec<Sample>, HistoryError> {
        Self::maybe_fail_or_delay(port.as_str()).await?;
        let series = fixtures::by_port(port.as_str()).ok_or_else(|| {
            HistoryError::source("porthist-mock", format!("unknown port {port}"))
        })?;
        Ok(page(&series, from, to, limit))
    }
}
