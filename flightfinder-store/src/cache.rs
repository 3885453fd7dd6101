use async_trait::async_trait;
use flightfinder_core::fetch::Response;
use flightfinder_core::gateway::CacheStorage;
use flightfinder_core::CoreResult;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory cache buckets, the stand-in for the browser's Cache Storage
#[derive(Default)]
pub struct MemoryCacheStorage {
    buckets: RwLock<HashMap<String, HashMap<String, Response>>>,
}

impl MemoryCacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn bucket_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.buckets.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl CacheStorage for MemoryCacheStorage {
    async fn put(&self, bucket: &str, url: &str, response: Response) -> CoreResult<()> {
        self.buckets
            .write()
            .await
            .entry(bucket.to_string())
            .or_default()
            .insert(url.to_string(), response);
        Ok(())
    }

    async fn lookup(&self, bucket: &str, url: &str) -> CoreResult<Option<Response>> {
        let buckets = self.buckets.read().await;
        Ok(buckets.get(bucket).and_then(|entries| entries.get(url)).cloned())
    }
}
