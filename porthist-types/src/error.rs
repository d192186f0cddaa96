use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the porthist workspace.
///
/// Covers request-budget exhaustion, source-tagged transport failures,
/// malformed payloads, and argument validation.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HistoryError {
    /// The per-fetch request budget was exhausted before all gaps were downloaded.
    ///
    /// Never retried internally; callers should narrow the query window.
    #[error("too many requests: budget of {max_requests} exhausted")]
    TooManyRequests {
        /// Budget configured for the failing fetch.
        max_requests: u32,
    },

    /// A history source failed (transport or remote error), passed through verbatim.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Name of the source that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Issues with the returned data (undecodable payload, unordered samples, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A single source call exceeded the configured request timeout.
    #[error("request timed out via {source_name}")]
    RequestTimeout {
        /// Name of the source that timed out.
        source_name: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl HistoryError {
    /// Helper: build a `TooManyRequests` error for the given budget.
    #[must_use]
    pub const fn too_many_requests(max_requests: u32) -> Self {
        Self::TooManyRequests { max_requests }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    pub fn request_timeout(source_name: impl Into<String>) -> Self {
        Self::RequestTimeout {
            source_name: source_name.into(),
        }
    }

    /// True when this error signals an exhausted request budget.
    #[must_use]
    pub const fn is_too_many_requests(&self) -> bool {
        matches!(self, Self::TooManyRequests { .. })
    }
}
