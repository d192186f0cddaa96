use async_trait::async_trait;

use crate::{HistoryError, PortId, Sample};

/// Remote backend able to answer "samples of `port` in `[from, to)`".
///
/// Contract: the returned samples satisfy `from <= timestamp < to`, are
/// ascending by timestamp, and are truncated to at most `limit` entries
/// starting from the earliest timestamp at or after `from`. A result of exactly
/// `limit` samples tells the caller that more samples may follow.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Stable name used in error attribution and logs.
    fn name(&self) -> &'static str;

    /// Fetch one page of history for `port`.
    async fn history(
        &self,
        port: &PortId,
        from: i64,
        to: i64,
        limit: usize,
    ) -> Result<Vec<Sample>, HistoryError>;
}
