use std::sync::Arc;
use std::time::Duration;

use porthist_core::{GapPolicy, HistoryConfig, HistoryError, HistorySource, PortId};

use crate::HistoryDownloadManager;

/// Builder for a [`HistoryDownloadManager`] with custom configuration.
pub struct HistoryDownloadManagerBuilder {
    port: PortId,
    source: Arc<dyn HistorySource>,
    cfg: HistoryConfig,
}

impl HistoryDownloadManagerBuilder {
    /// Create a builder with defaults: `HISTORY_MAX_LIMIT` pages, unbounded
    /// default budget, no request timeout, compatible gap policy.
    pub fn new(port: impl Into<PortId>, source: Arc<dyn HistorySource>) -> Self {
        Self {
            port: port.into(),
            source,
            cfg: HistoryConfig::default(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: HistoryConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Page size passed to the source. Must match the remote per-call cap,
    /// since a page of exactly this size is read as "more data follows".
    #[must_use]
    pub const fn page_limit(mut self, limit: usize) -> Self {
        self.cfg.page_limit = limit;
        self
    }

    /// Budget used by `fetch_default`; `0` is unbounded.
    #[must_use]
    pub const fn default_max_requests(mut self, max_requests: u32) -> Self {
        self.cfg.default_max_requests = max_requests;
        self
    }

    /// Deadline for each individual source call.
    ///
    /// A call exceeding it fails the fetch with `HistoryError::RequestTimeout`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Trailing-gap behavior; see [`GapPolicy`].
    #[must_use]
    pub const fn gap_policy(mut self, policy: GapPolicy) -> Self {
        self.cfg.gap_policy = policy;
        self
    }

    /// Validate the configuration and build the manager.
    ///
    /// # Errors
    /// Returns `HistoryError::InvalidArg` if `page_limit < 2` (a continuation
    /// page restarts at the last received timestamp, so a single-sample page
    /// never advances) or if the request timeout is zero.
    pub fn build(self) -> Result<HistoryDownloadManager, HistoryError> {
        if self.cfg.page_limit < 2 {
            return Err(HistoryError::InvalidArg(format!(
                "page_limit must be at least 2, got {}",
                self.cfg.page_limit
            )));
        }
        if self.cfg.request_timeout.is_some_and(|t| t.is_zero()) {
            return Err(HistoryError::InvalidArg(
                "request_timeout must be non-zero".into(),
            ));
        }
        Ok(HistoryDownloadManager::from_parts(
            self.port,
            self.source,
            self.cfg,
        ))
    }
}
