use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use porthist_core::{HistoryError, HistorySource, PortId, Sample};

/// Instruction for how `history` should behave for a given port.
#[derive(Clone)]
pub enum MockBehavior {
    /// Serve pages of this ascending series, honoring range and limit.
    Series(Vec<Sample>),
    /// Fail every request immediately with the provided error.
    Fail(HistoryError),
    /// Serve `series`, but fail any request starting at or after `fail_from`.
    FailFrom {
        /// Series served for requests starting before `fail_from`.
        series: Vec<Sample>,
        /// First request start that fails.
        fail_from: i64,
        /// Error returned for failing requests.
        error: HistoryError,
    },
    /// Hang indefinitely (simulate a stalled gateway).
    Hang,
}

/// One `history` call as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Requested port.
    pub port: PortId,
    /// Requested range start.
    pub from: i64,
    /// Requested range end.
    pub to: i64,
    /// Requested page size.
    pub limit: usize,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<PortId, MockBehavior>,
    requests: Vec<RecordedRequest>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `history` calls on a specific port.
    pub async fn set_behavior(&self, port: impl Into<PortId>, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(port.into(), behavior);
    }

    /// Shorthand for [`MockBehavior::Series`].
    pub async fn set_series(&self, port: impl Into<PortId>, series: Vec<Sample>) {
        self.set_behavior(port, MockBehavior::Series(series)).await;
    }

    /// Requests received for `port`, in call order.
    pub async fn requests(&self, port: impl Into<PortId>) -> Vec<RecordedRequest> {
        let port = port.into();
        let guard = self.state.lock().await;
        guard
            .requests
            .iter()
            .filter(|r| r.port == port)
            .cloned()
            .collect()
    }

    /// Total number of requests received across all ports.
    pub async fn request_count(&self) -> usize {
        self.state.lock().await.requests.len()
    }

    /// Forget the request log, keeping behaviors.
    pub async fn clear_requests(&self) {
        self.state.lock().await.requests.clear();
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.requests.clear();
    }
}

/// A source that defers all behavior to an external controller.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn HistorySource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn HistorySource>, controller)
    }
}

#[async_trait]
impl HistorySource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn history(
        &self,
        port: &PortId,
        from: i64,
        to: i64,
        limit: usize,
    ) -> Result<Vec<Sample>, HistoryError> {
        // Log the request and snapshot the behavior without holding the lock across awaits
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(RecordedRequest {
                port: port.clone(),
                from,
                to,
                limit,
            });
            guard.rules.get(port).cloned()
        };

        match behavior {
            Some(MockBehavior::Series(series)) => Ok(crate::page(&series, from, to, limit)),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::FailFrom {
                series,
                fail_from,
                error,
            }) => {
                if from >= fail_from {
                    Err(error)
                } else {
                    Ok(crate::page(&series, from, to, limit))
                }
            }
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(HistoryError::source(
                self.name,
                format!("no behavior configured for port {port}"),
            )),
        }
    }
}
