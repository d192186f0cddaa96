use crate::{GapPolicy, Interval, Sample, TimeRange};

/// Ordered set of non-overlapping, non-touching intervals for one signal.
///
/// Intervals are kept ascending by `from`; any two that overlap or touch are
/// merged on insert, so the uncovered stretches between them are exactly the
/// gaps still to be downloaded. The set only grows.
#[derive(Debug, Clone, Default)]
pub struct IntervalCache {
    intervals: Vec<Interval>,
}

impl IntervalCache {
    /// Create an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Cached intervals, ascending by `from`.
    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of disjoint cached intervals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// True when nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// True when `[from, to)` lies entirely inside one cached interval.
    #[must_use]
    pub fn covers(&self, from: i64, to: i64) -> bool {
        if from >= to {
            return true;
        }
        self.intervals
            .iter()
            .any(|iv| iv.from() <= from && to <= iv.to())
    }

    /// Sub-ranges of `[from, to)` not covered by the cache, ascending.
    ///
    /// With [`GapPolicy::Compatible`] a query ending inside a hole between two
    /// cached intervals gets no trailing gap; see [`GapPolicy`].
    #[must_use]
    pub fn find_gaps(&self, from: i64, to: i64, policy: GapPolicy) -> Vec<TimeRange> {
        if TimeRange::new(from, to).is_empty() {
            return Vec::new();
        }
        let (Some(first), Some(last)) = (self.intervals.first(), self.intervals.last()) else {
            return vec![TimeRange::new(from, to)];
        };
        if to <= first.from() || from >= last.to() {
            return vec![TimeRange::new(from, to)];
        }

        let mut start = self
            .intervals
            .iter()
            .position(|iv| iv.from() >= from)
            .unwrap_or(self.intervals.len());
        if start > 0 && self.intervals[start - 1].to() > from {
            start -= 1;
        }
        let (end, past_cache_end) = match self.intervals.iter().position(|iv| iv.to() >= to) {
            Some(idx) => (idx, false),
            None => (self.intervals.len() - 1, true),
        };
        if start > end {
            return vec![TimeRange::new(from, to)];
        }

        let relevant: Vec<&Interval> = self.intervals[start..=end]
            .iter()
            .filter(|iv| iv.from() < to)
            .collect();
        let (Some(head), Some(tail)) = (relevant.first(), relevant.last()) else {
            return vec![TimeRange::new(from, to)];
        };

        let mut gaps = Vec::new();
        if from < head.from() {
            gaps.push(TimeRange::new(from, head.from()));
        }
        for pair in relevant.windows(2) {
            if pair[0].to() < pair[1].from() {
                gaps.push(TimeRange::new(pair[0].to(), pair[1].from()));
            }
        }
        let emit_trailing = match policy {
            GapPolicy::Complete => true,
            _ => past_cache_end,
        };
        if emit_trailing && tail.to() < to {
            gaps.push(TimeRange::new(tail.to(), to));
        }
        gaps
    }

    /// Insert a downloaded interval, merging it with any neighbours it
    /// overlaps or touches.
    ///
    /// On a tie in `from`, the inserted interval is authoritative over the cached one.
    ///
    /// Returns the index of the interval that now holds the inserted range.
    pub fn insert(&mut self, interval: Interval) -> usize {
        let mut idx = self
            .intervals
            .partition_point(|iv| iv.from() <= interval.from());
        let mut merged = interval;

        if idx > 0
            && let Some(m) = self.intervals[idx - 1].try_merge(&merged)
        {
            merged = m;
            idx -= 1;
            self.intervals.remove(idx);
        }

        // A wide interval may close several holes at once.
        while idx < self.intervals.len() {
            match merged.try_merge(&self.intervals[idx]) {
                Some(m) => {
                    merged = m;
                    self.intervals.remove(idx);
                }
                None => break,
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            from = merged.from(),
            to = merged.to(),
            samples = merged.len(),
            index = idx,
            "cache insert"
        );

        self.intervals.insert(idx, merged);
        idx
    }

    /// Every cached sample in `[from, to)`, ascending.
    #[must_use]
    pub fn slice(&self, from: i64, to: i64) -> Vec<Sample> {
        self.intervals
            .iter()
            .filter_map(|iv| iv.get_slice(from, to))
            .flat_map(|iv| iv.samples().to_vec())
            .collect()
    }
}
