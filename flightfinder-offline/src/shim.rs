use flightfinder_core::fetch::{Request, Response};
use flightfinder_core::gateway::{CacheStorage, Network, NetworkError};
use flightfinder_core::CoreError;
use flightfinder_store::app_config::OfflineConfig;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Lifecycle of the offline worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Parsed,
    Installing,
    Installed,
    Activated,
    Redundant,
}

/// What the shim did with a fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchDisposition {
    /// Not intercepted, the browser handles the request itself
    Passthrough,
    Network(Response),
    Fallback(Response),
}

#[derive(Debug, thiserror::Error)]
pub enum ShimError {
    #[error("Install failed: {0}")]
    Install(String),

    #[error("Cannot activate worker in state {0:?}")]
    NotInstalled(WorkerState),

    #[error("Offline and no fallback cached: {0}")]
    Offline(#[from] NetworkError),

    #[error("Cache storage error: {0}")]
    Cache(#[from] CoreError),
}

/// Network-first navigation handler with a single cached fallback page
pub struct OfflineShim {
    network: Arc<dyn Network>,
    caches: Arc<dyn CacheStorage>,
    cache_name: String,
    fallback_path: String,
    state: RwLock<WorkerState>,
}

impl OfflineShim {
    pub fn new(network: Arc<dyn Network>, caches: Arc<dyn CacheStorage>, config: &OfflineConfig) -> Self {
        Self {
            network,
            caches,
            cache_name: config.cache_name.clone(),
            fallback_path: config.fallback_path.clone(),
            state: RwLock::new(WorkerState::Parsed),
        }
    }

    pub async fn state(&self) -> WorkerState {
        *self.state.read().await
    }

    /// Pre-cache the fallback document. The worker becomes redundant if the
    /// document cannot be fetched.
    pub async fn install(&self) -> Result<(), ShimError> {
        *self.state.write().await = WorkerState::Installing;
        info!("Installing offline shim into cache {}", self.cache_name);

        match self.precache().await {
            Ok(()) => {
                *self.state.write().await = WorkerState::Installed;
                info!("Cached fallback {} in {}", self.fallback_path, self.cache_name);
                Ok(())
            }
            Err(e) => {
                *self.state.write().await = WorkerState::Redundant;
                error!("Offline shim install failed: {}", e);
                Err(e)
            }
        }
    }

    async fn precache(&self) -> Result<(), ShimError> {
        let request = Request::navigate(self.fallback_path.as_str());
        let response = self
            .network
            .fetch(&request)
            .await
            .map_err(|e| ShimError::Install(e.to_string()))?;

        if !response.is_success() {
            return Err(ShimError::Install(format!(
                "{} returned status {}",
                self.fallback_path, response.status
            )));
        }

        self.caches.put(&self.cache_name, &self.fallback_path, response).await?;
        Ok(())
    }

    pub async fn activate(&self) -> Result<(), ShimError> {
        let mut state = self.state.write().await;
        if *state != WorkerState::Installed {
            return Err(ShimError::NotInstalled(*state));
        }
        *state = WorkerState::Activated;
        info!("Offline shim activated");
        Ok(())
    }

    /// Handle one fetch. Only navigations are intercepted, and only once the
    /// worker is active; any response the network gives is passed on, the
    /// fallback is served only when the network itself fails.
    pub async fn handle_fetch(&self, request: &Request) -> Result<FetchDisposition, ShimError> {
        if !request.is_navigation() {
            return Ok(FetchDisposition::Passthrough);
        }
        if self.state().await != WorkerState::Activated {
            debug!("Worker not active, not intercepting {}", request.url);
            return Ok(FetchDisposition::Passthrough);
        }

        let network_error = match self.network.fetch(request).await {
            Ok(response) => return Ok(FetchDisposition::Network(response)),
            Err(e) => e,
        };

        warn!("Navigation to {} failed, serving fallback: {}", request.url, network_error);
        match self.caches.lookup(&self.cache_name, &self.fallback_path).await? {
            Some(page) => Ok(FetchDisposition::Fallback(page)),
            None => Err(ShimError::Offline(network_error)),
        }
    }
}
