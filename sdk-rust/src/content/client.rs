use crate::DataResult;
use serde_json::Value;

/// What a content API call addresses within an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentTarget {
    /// A window of records.
    List { offset: u64, limit: u32 },
    /// A single record by id.
    Item { content_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub endpoint: String,
    pub target: ContentTarget,
}

impl ContentRequest {
    pub fn list(endpoint: impl Into<String>, offset: u64, limit: u32) -> Self {
        Self {
            endpoint: endpoint.into(),
            target: ContentTarget::List { offset, limit },
        }
    }

    pub fn item(endpoint: impl Into<String>, content_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            target: ContentTarget::Item {
                content_id: content_id.into(),
            },
        }
    }
}

/// Read access to a headless content API.
#[async_trait::async_trait]
pub trait ContentClient: Send + Sync {
    async fn get(&self, request: ContentRequest) -> DataResult<Value>;
}
