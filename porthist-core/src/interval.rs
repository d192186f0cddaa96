use std::sync::Arc;

use crate::Sample;

/// Verified knowledge of every sample in the half-open range `[from, to)`.
///
/// An interval with no samples is meaningful: it records that the signal was
/// silent over the range. Sample storage is shared, so cloning an interval or
/// slicing it to its own range never copies samples. Operations build new
/// sequences and never mutate their inputs.
///
/// Invariant: samples are ascending by timestamp and every timestamp lies in
/// `[from, to)`, unless `from == to` (a void interval).
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    from: i64,
    to: i64,
    samples: Arc<[Sample]>,
}

impl Interval {
    /// Build an interval from a range and its ascending samples.
    pub fn new(from: i64, to: i64, samples: impl Into<Arc<[Sample]>>) -> Self {
        Self {
            from,
            to,
            samples: samples.into(),
        }
    }

    /// An interval known to contain no samples.
    #[must_use]
    pub fn empty(from: i64, to: i64) -> Self {
        Self::new(from, to, Vec::new())
    }

    /// Inclusive start (epoch millis).
    #[must_use]
    pub const fn from(&self) -> i64 {
        self.from
    }

    /// Exclusive end (epoch millis).
    #[must_use]
    pub const fn to(&self) -> i64 {
        self.to
    }

    /// Samples known in this range, ascending.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no samples are known in the range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// True for a zero-width interval (`from == to`).
    #[must_use]
    pub const fn is_void(&self) -> bool {
        self.from == self.to
    }

    /// True when the two storages are the same allocation.
    #[must_use]
    pub fn shares_samples_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.samples, &other.samples)
    }

    /// Intersect with the query range `[from, to)`.
    ///
    /// Returns `None` when the query does not overlap this interval. Ranges are
    /// half-open, so a query that only touches a boundary does not overlap.
    /// When the intersection is this interval's own range, the returned value
    /// shares this interval's samples.
    #[must_use]
    pub fn get_slice(&self, from: i64, to: i64) -> Option<Self> {
        if from >= to || self.is_void() || from >= self.to || to <= self.from {
            return None;
        }
        let lo = from.max(self.from);
        let hi = to.min(self.to);
        if lo == self.from && hi == self.to {
            return Some(self.clone());
        }
        let start = self.samples.partition_point(|s| s.timestamp < lo);
        let end = self.samples.partition_point(|s| s.timestamp < hi);
        Some(Self::new(lo, hi, &self.samples[start..end]))
    }

    /// Combine with an overlapping or touching interval.
    ///
    /// Returns `None` when the two neither overlap nor touch. The result spans
    /// both ranges. The interval starting later is authoritative where they
    /// overlap: earlier samples at or after its first sample are replaced by
    /// its samples. When both start together, `other` is the later one.
    #[must_use]
    pub fn try_merge(&self, other: &Self) -> Option<Self> {
        let (earlier, later) = if other.from < self.from {
            (other, self)
        } else {
            (self, other)
        };
        if earlier.to < later.from {
            return None;
        }

        let from = earlier.from;
        let to = earlier.to.max(later.to);

        if earlier.to == later.from {
            let mut merged = Vec::with_capacity(earlier.len() + later.len());
            merged.extend_from_slice(&earlier.samples);
            merged.extend_from_slice(&later.samples);
            return Some(Self::new(from, to, merged));
        }

        let Some(first) = later.samples.first() else {
            return Some(Self {
                from,
                to,
                samples: Arc::clone(&earlier.samples),
            });
        };

        let keep = earlier.samples.partition_point(|s| s.timestamp < first.timestamp);
        // Earlier samples beyond a contained later interval stay covered by the merged range.
        let tail = earlier.samples.partition_point(|s| s.timestamp < later.to);
        let tail = tail.max(keep);

        let mut merged =
            Vec::with_capacity(keep + later.len() + (earlier.len() - tail));
        merged.extend_from_slice(&earlier.samples[..keep]);
        merged.extend_from_slice(&later.samples);
        merged.extend_from_slice(&earlier.samples[tail..]);
        Some(Self::new(from, to, merged))
    }
}
