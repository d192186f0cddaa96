use std::collections::BTreeSet;

use porthist::{GapPolicy, HistoryDownloadManager, Sample};
use proptest::prelude::*;

use crate::helpers::{PORT, mock_with_series, stamps};

fn arb_range() -> impl Strategy<Value = (i64, i64)> {
    (0i64..2000, 0i64..400).prop_map(|(from, len)| (from, from + len))
}

fn series(truth: &BTreeSet<i64>) -> Vec<Sample> {
    truth.iter().map(|&t| Sample::new(t, 0.5)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn complete_policy_answers_exactly_the_truth(
        truth in proptest::collection::btree_set(0i64..2400, 0..200),
        queries in proptest::collection::vec(arb_range(), 1..8),
        page_limit in 2usize..20,
    ) {
        tokio_test::block_on(async {
            let (source, _controller) = mock_with_series(series(&truth)).await;
            let mut m = HistoryDownloadManager::builder(PORT, source)
                .page_limit(page_limit)
                .gap_policy(GapPolicy::Complete)
                .build()
                .unwrap();

            for &(from, to) in &queries {
                let got = m.fetch(from, to, 0).await.unwrap();
                let want: Vec<i64> = truth.range(from..to).copied().collect();
                prop_assert_eq!(stamps(&got), want);
            }
            for pair in m.cached_intervals().windows(2) {
                prop_assert!(pair[0].to() < pair[1].from());
            }
            Ok(())
        })?;
    }

    #[test]
    fn compatible_policy_answers_are_ascending_and_truthful(
        truth in proptest::collection::btree_set(0i64..2400, 0..200),
        queries in proptest::collection::vec(arb_range(), 1..8),
    ) {
        tokio_test::block_on(async {
            let (source, _controller) = mock_with_series(series(&truth)).await;
            let mut m = HistoryDownloadManager::builder(PORT, source)
                .page_limit(16)
                .build()
                .unwrap();

            for &(from, to) in &queries {
                let got = stamps(&m.fetch(from, to, 0).await.unwrap());
                prop_assert!(got.windows(2).all(|w| w[0] < w[1]));
                prop_assert!(got.iter().all(|t| truth.contains(t) && from <= *t && *t < to));
            }
            Ok(())
        })?;
    }

    #[test]
    fn compatible_policy_is_complete_unless_query_ends_in_an_interior_hole(
        truth in proptest::collection::btree_set(0i64..2400, 0..200),
        queries in proptest::collection::vec(arb_range(), 1..8),
        page_limit in 2usize..20,
    ) {
        tokio_test::block_on(async {
            let (source, _controller) = mock_with_series(series(&truth)).await;
            let mut m = HistoryDownloadManager::builder(PORT, source)
                .page_limit(page_limit)
                .build()
                .unwrap();

            for &(from, to) in &queries {
                // With no cached interval starting at or after `to`, the query
                // cannot end inside a hole, so nothing may be left out.
                let ends_before_cache_tail =
                    m.cached_intervals().iter().all(|iv| iv.from() < to);
                let got = stamps(&m.fetch(from, to, 0).await.unwrap());
                if ends_before_cache_tail {
                    let want: Vec<i64> = truth.range(from..to).copied().collect();
                    prop_assert_eq!(got, want);
                }
                for pair in m.cached_intervals().windows(2) {
                    prop_assert!(pair[0].to() < pair[1].from());
                }
            }
            Ok(())
        })?;
    }

    #[test]
    fn compatible_policy_repeated_fetch_is_served_from_cache(
        truth in proptest::collection::btree_set(0i64..2400, 0..200),
        queries in proptest::collection::vec(arb_range(), 1..8),
    ) {
        tokio_test::block_on(async {
            let (source, controller) = mock_with_series(series(&truth)).await;
            let mut m = HistoryDownloadManager::builder(PORT, source)
                .page_limit(16)
                .build()
                .unwrap();

            for &(from, to) in &queries {
                let first = m.fetch(from, to, 0).await.unwrap();
                let issued = controller.request_count().await;

                let second = m.fetch(from, to, 0).await.unwrap();
                prop_assert_eq!(m.request_count(), 0);
                prop_assert_eq!(controller.request_count().await, issued);
                prop_assert_eq!(second, first);
            }
            Ok(())
        })?;
    }
}
