use std::time::Duration;

use porthist::{HistoryDownloadManager, HistoryError};
use porthist_mock::MockBehavior;

use crate::helpers::{PORT, mock_with_series};

#[tokio::test(start_paused = true)]
async fn hung_source_times_out() {
    let (source, controller) = mock_with_series(Vec::new()).await;
    controller.set_behavior(PORT, MockBehavior::Hang).await;
    let mut m = HistoryDownloadManager::builder(PORT, source)
        .request_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = m.fetch(0, 1000, 0).await.unwrap_err();
    assert_eq!(err, HistoryError::request_timeout("gateway-mock"));
    assert!(m.cached_intervals().is_empty());
}

#[tokio::test(start_paused = true)]
async fn timely_source_is_unaffected_by_timeout() {
    let (source, _controller) = mock_with_series(crate::helpers::dense(0, 100, 10)).await;
    let mut m = HistoryDownloadManager::builder(PORT, source)
        .request_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    assert_eq!(m.fetch(0, 100, 0).await.unwrap().len(), 10);
}
