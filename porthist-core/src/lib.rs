//! porthist-core
//!
//! Core types, traits, and algorithms shared across the porthist workspace.
//!
//! - `interval`: the [`Interval`] value type (slice and merge).
//! - `cache`: [`IntervalCache`], the ordered non-overlapping interval set with
//!   gap finding and merge-on-insert.
//! - `source`: the [`HistorySource`] trait implemented by remote backends.
//! - `series`: validation helpers for sample sequences.
//!
//! Async runtime
//! -------------
//! [`HistorySource`] is an `async_trait` and makes no runtime assumptions
//! itself; the download manager in `porthist` drives it under Tokio.
#![warn(missing_docs)]

/// Ordered interval set with gap finding and merge-on-insert.
pub mod cache;
/// The `Interval` value type.
pub mod interval;
/// Sample sequence helpers.
pub mod series;
/// The remote history source trait.
pub mod source;

pub use cache::IntervalCache;
pub use interval::Interval;
pub use series::{ensure_ascending, ensure_within};
pub use source::HistorySource;

pub use porthist_types::{
    FetchReport, GapPolicy, HISTORY_MAX_LIMIT, HistoryConfig, HistoryError, PortId, Sample,
    SampleValue, TimeRange,
};
