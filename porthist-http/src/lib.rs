//! porthist-http
//!
//! [`HistorySource`] over a gateway's REST history endpoint:
//! `GET {base}/api/ports/{port}/history?from=&to=&limit=`, answered with a JSON
//! array of `{"timestamp": <ms>, "value": <number|bool>}`.
//!
//! Pages are validated before they reach the cache: ascending timestamps,
//! every sample inside the requested range, and no more than `limit` samples.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
mod config;

use std::sync::Arc;

use adapter::{GatewayHistory, RealAdapter};
use async_trait::async_trait;
use porthist_core::{HistoryError, HistorySource, PortId, Sample, ensure_ascending, ensure_within};

pub use config::GatewayConfig;

#[cfg(feature = "test-adapters")]
type HistoryAdapter = Arc<dyn GatewayHistory>;
#[cfg(not(feature = "test-adapters"))]
type HistoryAdapter = Arc<RealAdapter>;

/// Public source type. Production users construct it with [`GatewaySource::new`].
pub struct GatewaySource {
    history: HistoryAdapter,
}

impl GatewaySource {
    /// Source name reported in errors and logs.
    pub const NAME: &'static str = "porthist-http";

    fn normalize_error(e: HistoryError) -> HistoryError {
        match e {
            HistoryError::Source { source_name: _, msg } | HistoryError::Other(msg) => {
                HistoryError::source(Self::NAME, msg)
            }
            other => other,
        }
    }

    /// Build with a fresh HTTP client for the gateway described by `cfg`.
    ///
    /// # Errors
    /// Returns `HistoryError::InvalidArg` if `cfg.base_url` is not a usable URL.
    pub fn new(cfg: &GatewayConfig) -> Result<Self, HistoryError> {
        let adapter = RealAdapter::new(cfg)?;
        Ok(Self::from_adapter(adapter))
    }

    /// Build from an existing `reqwest::Client`.
    ///
    /// # Errors
    /// Same as [`GatewaySource::new`].
    pub fn with_client(client: reqwest::Client, cfg: &GatewayConfig) -> Result<Self, HistoryError> {
        let adapter = RealAdapter::with_client(client, cfg)?;
        Ok(Self::from_adapter(adapter))
    }

    #[cfg(not(feature = "test-adapters"))]
    /// Build from a concrete `RealAdapter`.
    #[must_use]
    pub fn from_adapter(adapter: RealAdapter) -> Self {
        Self {
            history: Arc::new(adapter),
        }
    }

    #[cfg(feature = "test-adapters")]
    /// Build from a real adapter.
    #[must_use]
    pub fn from_adapter(adapter: RealAdapter) -> Self {
        Self::from_history(Arc::new(adapter))
    }

    #[cfg(feature = "test-adapters")]
    /// Build from any history adapter (tests only).
    #[must_use]
    pub fn from_history(history: Arc<dyn GatewayHistory>) -> Self {
        Self { history }
    }

    fn validate(samples: &[Sample], from: i64, to: i64, limit: usize) -> Result<(), HistoryError> {
        if samples.len() > limit {
            return Err(HistoryError::Data(format!(
                "page of {} samples exceeds limit {limit}",
                samples.len()
            )));
        }
        ensure_ascending(samples)?;
        ensure_within(samples, from, to)
    }
}

#[async_trait]
impl HistorySource for GatewaySource {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn history(
        &self,
        port: &PortId,
        from: i64,
        to: i64,
        limit: usize,
    ) -> Result<Vec<Sample>, HistoryError> {
        let samples = self
            .history
            .fetch_page(port.as_str(), from, to, limit)
            .await
            .map_err(Self::normalize_error)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(%port, from, to, limit, received = samples.len(), "gateway page");

        Self::validate(&samples, from, to, limit)?;
        Ok(samples)
    }
}
