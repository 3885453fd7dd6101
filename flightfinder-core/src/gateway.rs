use async_trait::async_trait;
use crate::fetch::{Request, Response};
use crate::suggestion::Suggestion;
use crate::CoreResult;

/// Why a suggestion lookup produced nothing usable
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Suggestion request failed: {0}")]
    Transport(String),
    #[error("Suggestion endpoint returned status {0}")]
    Status(u16),
    #[error("Suggestion response could not be decoded: {0}")]
    Decode(String),
}

/// Source of airport suggestions for a partial query
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<Vec<Suggestion>, LookupError>;
}

#[derive(Debug, thiserror::Error)]
#[error("Network fetch of {url} failed: {reason}")]
pub struct NetworkError {
    pub url: String,
    pub reason: String,
}

/// Network access for the offline shim. Any HTTP status counts as a
/// completed fetch; only transport failures are errors.
#[async_trait]
pub trait Network: Send + Sync {
    async fn fetch(&self, request: &Request) -> Result<Response, NetworkError>;
}

/// Named cache buckets keyed by request URL
#[async_trait]
pub trait CacheStorage: Send + Sync {
    async fn put(&self, bucket: &str, url: &str, response: Response) -> CoreResult<()>;

    async fn lookup(&self, bucket: &str, url: &str) -> CoreResult<Option<Response>>;
}
