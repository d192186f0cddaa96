//! Porthist-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod port;
mod report;
mod sample;

pub use config::{GapPolicy, HISTORY_MAX_LIMIT, HistoryConfig};
pub use error::HistoryError;
pub use port::PortId;
pub use report::FetchReport;
pub use sample::{Sample, SampleValue, TimeRange};
