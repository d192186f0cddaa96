//! Shared helpers for validating sample sequences returned by sources.

use crate::{HistoryError, Sample, TimeRange};

/// Ensure timestamps are strictly ascending.
///
/// # Errors
/// Returns `Err(HistoryError::Data)` naming the first offending timestamp.
pub fn ensure_ascending(samples: &[Sample]) -> Result<(), HistoryError> {
    match samples
        .windows(2)
        .find(|w| w[0].timestamp >= w[1].timestamp)
    {
        Some(w) => Err(HistoryError::Data(format!(
            "samples out of order: {} followed by {}",
            w[0].timestamp, w[1].timestamp
        ))),
        None => Ok(()),
    }
}

/// Ensure every timestamp lies in `[from, to)`.
///
/// # Errors
/// Returns `Err(HistoryError::Data)` naming the first timestamp outside the range.
pub fn ensure_within(samples: &[Sample], from: i64, to: i64) -> Result<(), HistoryError> {
    let range = TimeRange::new(from, to);
    match samples.iter().find(|s| !range.contains(s.timestamp)) {
        Some(s) => Err(HistoryError::Data(format!(
            "sample at {} outside requested range [{from}, {to})",
            s.timestamp
        ))),
        None => Ok(()),
    }
}
