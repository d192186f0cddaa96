use porthist_core::{HistoryError, Sample};

use crate::HistoryDownloadManager;

impl HistoryDownloadManager {
    /// Download every sample in `[from, to)`, following full pages.
    pub(crate) async fn download(
        &mut self,
        from: i64,
        to: i64,
    ) -> Result<Vec<Sample>, HistoryError> {
        let limit = self.cfg.page_limit;
        let mut acc: Vec<Sample> = Vec::new();
        let mut cursor = from;

        loop {
            self.consume_request()?;
            #[cfg(feature = "tracing")]
            tracing::trace!(
                from = cursor,
                to,
                limit,
                request = self.request_count,
                "requesting page"
            );

            let page = self.request_page(cursor, to, limit).await?;
            let full = page.len() == limit;
            let last = page.last().map(|s| s.timestamp);

            // A continuation page starts at the last timestamp already received.
            let floor = acc.last().map(|s| s.timestamp);
            acc.extend(
                page.into_iter()
                    .filter(|s| floor.is_none_or(|f| s.timestamp > f)),
            );

            match last {
                Some(last) if full && last > cursor => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(next_from = last, to, "full page, continuing");
                    cursor = last;
                }
                Some(_) if full => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        cursor,
                        limit,
                        "full page did not advance; stopping pagination"
                    );
                    break;
                }
                _ => break,
            }
        }

        Ok(acc)
    }

    /// Count one source call against the budget of the current fetch.
    fn consume_request(&mut self) -> Result<(), HistoryError> {
        if self.max_requests > 0 && self.request_count >= self.max_requests {
            #[cfg(feature = "tracing")]
            tracing::warn!(max_requests = self.max_requests, "request budget exhausted");
            return Err(HistoryError::too_many_requests(self.max_requests));
        }
        self.request_count += 1;
        Ok(())
    }

    /// One source call, bounded by the configured request timeout if any.
    async fn request_page(
        &self,
        from: i64,
        to: i64,
        limit: usize,
    ) -> Result<Vec<Sample>, HistoryError> {
        let call = self.source.history(&self.port, from, to, limit);
        match self.cfg.request_timeout {
            Some(timeout) => tokio::time::timeout(timeout, call)
                .await
                .unwrap_or_else(|_| Err(HistoryError::request_timeout(self.source.name()))),
            None => call.await,
        }
    }
}
