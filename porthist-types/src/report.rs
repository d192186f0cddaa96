//! Report envelope produced by the download manager.

use serde::{Deserialize, Serialize};

use crate::{Sample, TimeRange};

/// Summary of a single `fetch`.
///
/// Carries the answered samples together with the gaps that had to be
/// downloaded and the number of source calls issued for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FetchReport {
    /// Samples in the requested range, ascending by timestamp.
    pub samples: Vec<Sample>,
    /// Gaps downloaded during this fetch, ascending.
    pub gaps: Vec<TimeRange>,
    /// Source calls issued during this fetch (pagination included).
    pub requests: u32,
}
