use std::sync::Arc;

use porthist_core::{
    FetchReport, HistoryConfig, HistoryError, HistorySource, Interval, IntervalCache, PortId,
    Sample,
};

use crate::HistoryDownloadManagerBuilder;

/// Cached, incremental history downloads for one gateway port.
///
/// Owns its cache exclusively. `fetch` takes `&mut self`, so calls on one
/// manager are serialized by construction.
pub struct HistoryDownloadManager {
    pub(crate) port: PortId,
    pub(crate) source: Arc<dyn HistorySource>,
    pub(crate) cache: IntervalCache,
    pub(crate) cfg: HistoryConfig,
    // Per-fetch budget state, reset at the start of every fetch.
    pub(crate) request_count: u32,
    pub(crate) max_requests: u32,
}

impl HistoryDownloadManager {
    /// Manager with the default configuration.
    pub fn new(port: impl Into<PortId>, source: Arc<dyn HistorySource>) -> Self {
        Self::from_parts(port.into(), source, HistoryConfig::default())
    }

    /// Start building a manager with a custom configuration.
    pub fn builder(
        port: impl Into<PortId>,
        source: Arc<dyn HistorySource>,
    ) -> HistoryDownloadManagerBuilder {
        HistoryDownloadManagerBuilder::new(port, source)
    }

    pub(crate) fn from_parts(
        port: PortId,
        source: Arc<dyn HistorySource>,
        cfg: HistoryConfig,
    ) -> Self {
        Self {
            port,
            source,
            cache: IntervalCache::new(),
            cfg,
            request_count: 0,
            max_requests: 0,
        }
    }

    /// Port served by this manager.
    #[must_use]
    pub const fn port(&self) -> &PortId {
        &self.port
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &HistoryConfig {
        &self.cfg
    }

    /// Cached intervals, ascending and pairwise separated.
    #[must_use]
    pub fn cached_intervals(&self) -> &[Interval] {
        self.cache.intervals()
    }

    /// Source calls issued by the most recent fetch.
    #[must_use]
    pub const fn request_count(&self) -> u32 {
        self.request_count
    }

    /// All known samples in `[from, to)`, downloading uncovered gaps first.
    ///
    /// `max_requests` bounds the source calls of this fetch; `0` is unbounded.
    ///
    /// # Errors
    /// - `HistoryError::TooManyRequests` when the budget runs out.
    /// - `HistoryError::InvalidArg` when `from > to`.
    /// - Any source error, unchanged.
    pub async fn fetch(
        &mut self,
        from: i64,
        to: i64,
        max_requests: u32,
    ) -> Result<Vec<Sample>, HistoryError> {
        self.fetch_with_report(from, to, max_requests)
            .await
            .map(|report| report.samples)
    }

    /// [`fetch`](Self::fetch) with the configured `default_max_requests` budget.
    ///
    /// # Errors
    /// Same as [`fetch`](Self::fetch).
    pub async fn fetch_default(
        &mut self,
        from: i64,
        to: i64,
    ) -> Result<Vec<Sample>, HistoryError> {
        let budget = self.cfg.default_max_requests;
        self.fetch(from, to, budget).await
    }

    /// Like [`fetch`](Self::fetch), also reporting the downloaded gaps and the
    /// number of source calls.
    ///
    /// # Errors
    /// Same as [`fetch`](Self::fetch).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "porthist::manager::fetch",
            skip(self),
            fields(port = %self.port, source = self.source.name()),
            err,
        )
    )]
    pub async fn fetch_with_report(
        &mut self,
        from: i64,
        to: i64,
        max_requests: u32,
    ) -> Result<FetchReport, HistoryError> {
        if from > to {
            return Err(HistoryError::InvalidArg(format!(
                "range start {from} is after end {to}"
            )));
        }

        let gaps = self.cache.find_gaps(from, to, self.cfg.gap_policy);
        #[cfg(feature = "tracing")]
        tracing::debug!(gaps = gaps.len(), cached = self.cache.len(), "gap plan");

        self.request_count = 0;
        self.max_requests = max_requests;

        // Strictly sequential: budget accounting and cache merges follow gap order.
        for gap in &gaps {
            let samples = self.download(gap.from, gap.to).await?;
            self.cache.insert(Interval::new(gap.from, gap.to, samples));
        }

        Ok(FetchReport {
            samples: self.cache.slice(from, to),
            gaps,
            requests: self.request_count,
        })
    }
}
