use std::sync::Arc;

use async_trait::async_trait;
use porthist::{HistoryDownloadManager, HistoryError, HistorySource, PortId, Sample};

use crate::helpers::{PORT, dense, manager, mock_with_series, stamps};

#[tokio::test]
async fn full_pages_are_followed_until_a_short_page() {
    let series = dense(0, 1000, 1);
    let (source, controller) = mock_with_series(series.clone()).await;
    let mut m = manager(source, 100);

    let got = m.fetch(0, 1000, 0).await.unwrap();
    assert_eq!(stamps(&got), stamps(&series));

    let reqs = controller.requests(PORT).await;
    assert_eq!(reqs.len(), 11);
    assert_eq!(m.request_count(), 11);
    assert!(reqs.iter().all(|r| r.limit == 100 && r.to == 1000));
    // Each continuation starts at the last timestamp of the previous page.
    for (i, r) in reqs.iter().enumerate() {
        assert_eq!(r.from, i64::try_from(i * 99).unwrap());
    }
}

#[tokio::test]
async fn exact_page_multiple_issues_one_confirming_request() {
    let (source, controller) = mock_with_series(dense(0, 50, 1)).await;
    let mut m = manager(source, 50);

    let got = m.fetch(0, 100, 0).await.unwrap();
    assert_eq!(got.len(), 50);

    let reqs = controller.requests(PORT).await;
    assert_eq!(reqs.len(), 2);
    assert_eq!(reqs[1].from, 49);
}

#[tokio::test]
async fn pagination_never_duplicates_boundary_samples() {
    let (source, _controller) = mock_with_series(dense(0, 400, 4)).await;
    let mut m = manager(source, 7);

    let got = m.fetch(0, 400, 0).await.unwrap();
    let ts = stamps(&got);
    assert_eq!(ts.len(), 100);
    assert!(ts.windows(2).all(|w| w[0] < w[1]));
}

struct StuckSource;

#[async_trait]
impl HistorySource for StuckSource {
    fn name(&self) -> &'static str {
        "stuck"
    }

    async fn history(
        &self,
        _port: &PortId,
        _from: i64,
        _to: i64,
        limit: usize,
    ) -> Result<Vec<Sample>, HistoryError> {
        // Always the same full page, regardless of the requested start.
        Ok(vec![Sample::new(10, 1.0); limit])
    }
}

#[tokio::test]
async fn full_page_that_does_not_advance_stops_pagination() {
    let mut m = HistoryDownloadManager::builder(PORT, Arc::new(StuckSource))
        .page_limit(2)
        .build()
        .unwrap();

    m.fetch(0, 100, 0).await.unwrap();
    // First page moves the cursor to 10; the second cannot move it further.
    assert_eq!(m.request_count(), 2);
    assert_eq!(m.cached_intervals().len(), 1);
}
