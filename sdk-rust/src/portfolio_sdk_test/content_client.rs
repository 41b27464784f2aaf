use std::{collections::VecDeque, sync::Mutex};

use serde_json::Value;

use crate::{
    content::{ContentClient, ContentRequest},
    DataError, DataResult,
};

/// Result for a mocked `get` call.
pub enum MockContentResult {
    Body(Value),
    Error(DataError),
}

impl MockContentResult {
    pub fn body(body: Value) -> Self {
        Self::Body(body)
    }

    pub fn error(error: DataError) -> Self {
        Self::Error(error)
    }
}

impl From<Value> for MockContentResult {
    fn from(body: Value) -> Self {
        Self::body(body)
    }
}

impl From<DataError> for MockContentResult {
    fn from(error: DataError) -> Self {
        Self::error(error)
    }
}

#[derive(Default)]
struct MockContentClientState {
    mocked_results: VecDeque<MockContentResult>,
    tracked_requests: Vec<ContentRequest>,
}

/// A content client that tracks requests and replays queued results in order.
#[derive(Default)]
pub struct MockContentClient {
    state: Mutex<MockContentClientState>,
}

impl MockContentClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue one or more mocked results.
    pub fn enqueue_results<I>(&self, results: I) -> &Self
    where
        I: IntoIterator<Item = MockContentResult>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_results.extend(results);
        drop(state);
        self
    }

    /// Convenience to enqueue a single mocked result.
    pub fn enqueue<R>(&self, result: R) -> &Self
    where
        R: Into<MockContentResult>,
    {
        self.enqueue_results(std::iter::once(result.into()))
    }

    /// Requests received so far.
    pub fn tracked_requests(&self) -> Vec<ContentRequest> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_requests.clone()
    }

    /// Clear both tracked requests and queued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_results.clear();
        state.tracked_requests.clear();
    }
}

#[async_trait::async_trait]
impl ContentClient for MockContentClient {
    async fn get(&self, request: ContentRequest) -> DataResult<Value> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_requests.push(request);

        let result = state.mocked_results.pop_front().ok_or_else(|| {
            DataError::InvalidInput("no mocked content results available".into())
        })?;

        match result {
            MockContentResult::Body(body) => Ok(body),
            MockContentResult::Error(error) => Err(error),
        }
    }
}
