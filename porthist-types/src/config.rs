//! Configuration types shared by the download manager and its sources.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Per-request result cap of the gateway history API.
///
/// A page of exactly this many samples means more samples are likely available.
pub const HISTORY_MAX_LIMIT: usize = 1000;

/// How the trailing part of a query is treated when computing gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum GapPolicy {
    /// Historical behavior of the console: a query that ends inside a hole
    /// between two cached intervals gets no trailing gap, so the stretch from
    /// the last covering interval to the query end is not downloaded. A query
    /// running past the end of the whole cache still gets its trailing gap.
    #[default]
    Compatible,
    /// Always emit the trailing gap, so every query is fully covered.
    Complete,
}

/// Configuration for a `HistoryDownloadManager`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Page size passed to the source on every call.
    pub page_limit: usize,
    /// Request budget used when the caller does not pass one; 0 means unbounded.
    pub default_max_requests: u32,
    /// Optional deadline for each individual source call.
    pub request_timeout: Option<Duration>,
    /// Trailing-gap behavior of gap computation.
    pub gap_policy: GapPolicy,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            page_limit: HISTORY_MAX_LIMIT,
            default_max_requests: 0,
            request_timeout: None,
            gap_policy: GapPolicy::default(),
        }
    }
}
