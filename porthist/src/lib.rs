//! porthist keeps a per-port cache of downloaded signal history.
//!
//! Overview
//! - One [`HistoryDownloadManager`] serves one gateway port (one signal).
//! - [`HistoryDownloadManager::fetch`] answers `[from, to)` from cache where it
//!   can and downloads only the uncovered gaps from a [`HistorySource`].
//! - Downloaded ranges are merged into an ordered, non-overlapping interval set,
//!   so repeated or overlapping chart queries cost fewer round-trips over time.
//!
//! Key behaviors and trade-offs
//! - Gaps are downloaded strictly one after another; the request budget counts
//!   calls in issue order and the cache is never mutated concurrently.
//! - A full page (exactly `page_limit` samples) is read as "more data follows";
//!   the manager continues from the last received timestamp until a short page
//!   arrives or the budget runs out.
//! - `max_requests` bounds the calls of a single fetch (`0` is unbounded). When
//!   exhausted the fetch fails with [`HistoryError::TooManyRequests`]; gaps
//!   completed before that point stay cached.
//! - Source errors are passed through unchanged and never retried.
//! - The cache only grows for the lifetime of the manager.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use porthist::HistoryDownloadManager;
//!
//! let source = Arc::new(GatewaySource::new(GatewayConfig::new("http://gateway.local"))?);
//! let mut history = HistoryDownloadManager::builder("boiler.temperature", source)
//!     .default_max_requests(20)
//!     .build()?;
//!
//! // First call downloads; the second is served from cache.
//! let day = history.fetch(from, to, 20).await?;
//! let zoomed = history.fetch(from + 3_600_000, to - 3_600_000, 20).await?;
//! ```
#![warn(missing_docs)]

mod builder;
mod download;
mod manager;

pub use builder::HistoryDownloadManagerBuilder;
pub use manager::HistoryDownloadManager;

pub use porthist_core::{
    FetchReport, GapPolicy, HISTORY_MAX_LIMIT, HistoryConfig, HistoryError, HistorySource,
    Interval, IntervalCache, PortId, Sample, SampleValue, TimeRange,
};
