//! Time-series samples and half-open time ranges.

use serde::{Deserialize, Serialize};

/// Value carried by a sample: a numeric reading or a boolean state.
///
/// Serialized untagged, so the wire form is a plain JSON number or boolean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleValue {
    /// Boolean state (e.g. a digital input).
    Bool(bool),
    /// Numeric reading.
    Number(f64),
}

impl SampleValue {
    /// Returns the numeric reading, if this is a number.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Number(v) => Some(v),
            Self::Bool(_) => None,
        }
    }

    /// Returns the boolean state, if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(b) => Some(b),
            Self::Number(_) => None,
        }
    }
}

impl From<f64> for SampleValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for SampleValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// A single recorded value of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Epoch milliseconds.
    pub timestamp: i64,
    /// Recorded value.
    pub value: SampleValue,
}

impl Sample {
    /// Construct a sample at `timestamp` (epoch millis).
    pub fn new(timestamp: i64, value: impl Into<SampleValue>) -> Self {
        Self {
            timestamp,
            value: value.into(),
        }
    }
}

/// Half-open time range `[from, to)` in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// Inclusive start.
    pub from: i64,
    /// Exclusive end.
    pub to: i64,
}

impl TimeRange {
    /// Construct a range `[from, to)`.
    #[must_use]
    pub const fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    /// True when the range contains no instant.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.from >= self.to
    }

    /// True when `ts` lies in `[from, to)`.
    #[must_use]
    pub const fn contains(&self, ts: i64) -> bool {
        self.from <= ts && ts < self.to
    }
}

impl From<(i64, i64)> for TimeRange {
    fn from((from, to): (i64, i64)) -> Self {
        Self { from, to }
    }
}
