use porthist::HistoryError;
use porthist_mock::MockBehavior;

use crate::helpers::{PORT, manager, mock_with_series, ranges, samples};

#[tokio::test]
async fn source_error_is_passed_through_unchanged() {
    let (source, controller) = mock_with_series(Vec::new()).await;
    let boom = HistoryError::source("gateway", "503 service unavailable");
    controller
        .set_behavior(PORT, MockBehavior::Fail(boom.clone()))
        .await;
    let mut m = manager(source, 1000);

    let err = m.fetch(0, 1000, 0).await.unwrap_err();
    assert_eq!(err, boom);
    assert!(m.cached_intervals().is_empty());
    // No retries.
    assert_eq!(controller.request_count().await, 1);
}

#[tokio::test]
async fn failure_on_a_later_gap_keeps_earlier_gaps() {
    let (source, controller) = mock_with_series(Vec::new()).await;
    let series = samples(&[(10, 1.0), (45, 2.0), (70, 3.0)]);
    controller
        .set_behavior(
            PORT,
            MockBehavior::FailFrom {
                series,
                fail_from: 50,
                error: HistoryError::Data("garbled page".into()),
            },
        )
        .await;
    let mut m = manager(source, 1000);
    m.fetch(40, 60, 0).await.unwrap();

    let err = m.fetch(0, 100, 0).await.unwrap_err();
    assert_eq!(err, HistoryError::Data("garbled page".into()));
    assert_eq!(ranges(&m), vec![(0, 60)]);

    let cached = m.cached_intervals()[0].samples();
    assert_eq!(cached.len(), 2);
}

#[tokio::test]
async fn reversed_range_is_rejected() {
    let (source, controller) = mock_with_series(Vec::new()).await;
    let mut m = manager(source, 1000);

    let err = m.fetch(100, 50, 0).await.unwrap_err();
    assert!(matches!(err, HistoryError::InvalidArg(_)));
    assert_eq!(controller.request_count().await, 0);
}
