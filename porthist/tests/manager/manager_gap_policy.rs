use porthist::{GapPolicy, HistoryDownloadManager, TimeRange};

use crate::helpers::{PORT, mock_with_series, samples, stamps};

async fn primed(policy: GapPolicy) -> HistoryDownloadManager {
    let series = samples(&[(50, 1.0), (120, 2.0), (250, 3.0)]);
    let (source, _controller) = mock_with_series(series).await;
    let mut m = HistoryDownloadManager::builder(PORT, source)
        .gap_policy(policy)
        .build()
        .unwrap();
    m.fetch(0, 100, 0).await.unwrap();
    m.fetch(200, 300, 0).await.unwrap();
    m
}

#[tokio::test]
async fn compatible_policy_skips_trailing_hole() {
    let mut m = primed(GapPolicy::Compatible).await;

    let report = m.fetch_with_report(0, 150, 0).await.unwrap();
    assert!(report.gaps.is_empty());
    assert_eq!(stamps(&report.samples), vec![50]);
}

#[tokio::test]
async fn complete_policy_downloads_trailing_hole() {
    let mut m = primed(GapPolicy::Complete).await;

    let report = m.fetch_with_report(0, 150, 0).await.unwrap();
    assert_eq!(report.gaps, vec![TimeRange::new(100, 150)]);
    assert_eq!(stamps(&report.samples), vec![50, 120]);
}

#[tokio::test]
async fn both_policies_download_past_the_cache_end() {
    for policy in [GapPolicy::Compatible, GapPolicy::Complete] {
        let mut m = primed(policy).await;
        let report = m.fetch_with_report(250, 400, 0).await.unwrap();
        assert_eq!(report.gaps, vec![TimeRange::new(300, 400)]);
    }
}
