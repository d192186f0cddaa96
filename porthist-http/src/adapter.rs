#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use porthist_core::{HistoryError, Sample};
use url::Url;

use crate::GatewayConfig;

/// History endpoint abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait GatewayHistory: Send + Sync {
    /// Fetch one page of samples for `port` in `[from, to)`, at most `limit`.
    async fn fetch_page(
        &self,
        port: &str,
        from: i64,
        to: i64,
        limit: usize,
    ) -> Result<Vec<Sample>, HistoryError>;
}

/// Real adapter backed by a `reqwest::Client`.
/// The client is `Clone + Send + Sync` and pools connections internally.
#[derive(Clone)]
pub struct RealAdapter {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl RealAdapter {
    /// Build with a fresh `reqwest::Client`.
    ///
    /// # Errors
    /// Returns `HistoryError::InvalidArg` if the base URL does not parse or
    /// cannot carry a path.
    pub fn new(cfg: &GatewayConfig) -> Result<Self, HistoryError> {
        Self::with_client(reqwest::Client::new(), cfg)
    }

    /// Wrap an existing `reqwest::Client`.
    ///
    /// # Errors
    /// Same as [`RealAdapter::new`].
    pub fn with_client(client: reqwest::Client, cfg: &GatewayConfig) -> Result<Self, HistoryError> {
        let base_url = Url::parse(&cfg.base_url).map_err(|e| {
            HistoryError::InvalidArg(format!("gateway base url {:?}: {e}", cfg.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(HistoryError::InvalidArg(format!(
                "gateway base url {:?} cannot carry a path",
                cfg.base_url
            )));
        }
        Ok(Self {
            client,
            base_url,
            token: cfg.token.clone(),
        })
    }

    fn history_url(&self, port: &str, from: i64, to: i64, limit: usize) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "ports", port, "history"]);
        }
        url.query_pairs_mut()
            .append_pair("from", &from.to_string())
            .append_pair("to", &to.to_string())
            .append_pair("limit", &limit.to_string());
        url
    }
}

fn map_http_err(e: &reqwest::Error, context: &str) -> HistoryError {
    if e.is_timeout() {
        HistoryError::source("porthist-http", format!("timeout: {context}"))
    } else if e.is_connect() {
        HistoryError::source("porthist-http", format!("connect failed: {context}"))
    } else if let Some(status) = e.status() {
        HistoryError::source("porthist-http", format!("status {status}: {context}"))
    } else {
        HistoryError::source("porthist-http", format!("{e}: {context}"))
    }
}

#[async_trait]
impl GatewayHistory for RealAdapter {
    async fn fetch_page(
        &self,
        port: &str,
        from: i64,
        to: i64,
        limit: usize,
    ) -> Result<Vec<Sample>, HistoryError> {
        let context = format!("history for {port}");
        let url = self.history_url(port, from, to, limit);

        let mut req = self.client.get(url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await.map_err(|e| map_http_err(&e, &context))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let detail = body.trim();
            let msg = if detail.is_empty() {
                format!("status {status}: {context}")
            } else {
                format!("status {status}: {context}: {detail}")
            };
            return Err(HistoryError::source("porthist-http", msg));
        }

        let bytes = resp.bytes().await.map_err(|e| map_http_err(&e, &context))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| HistoryError::Data(format!("undecodable {context}: {e}")))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn GatewayHistory {
    /// Build a `GatewayHistory` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn GatewayHistory>
    where
        F: Send + Sync + 'static + Fn(String, i64, i64, usize) -> Result<Vec<Sample>, HistoryError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> GatewayHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(String, i64, i64, usize) -> Result<Vec<Sample>, HistoryError>,
        {
            async fn fetch_page(
                &self,
                port: &str,
                from: i64,
                to: i64,
                limit: usize,
            ) -> Result<Vec<Sample>, HistoryError> {
                (self.0)(port.to_string(), from, to, limit)
            }
        }
        Arc::new(FnHist(f))
    }
}
