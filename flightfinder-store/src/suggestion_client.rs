use async_trait::async_trait;
use flightfinder_core::gateway::{LookupError, SuggestionSource};
use flightfinder_core::Suggestion;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use crate::app_config::SuggestionConfig;

/// Suggestion lookups over HTTP: `GET <endpoint>?term=<query>`
#[derive(Clone)]
pub struct HttpSuggestionSource {
    client: Client,
    endpoint: String,
}

impl HttpSuggestionSource {
    pub fn new(config: &SuggestionConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl SuggestionSource for HttpSuggestionSource {
    async fn lookup(&self, query: &str) -> Result<Vec<Suggestion>, LookupError> {
        let res = self
            .client
            .get(&self.endpoint)
            .query(&[("term", query)])
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let suggestions: Vec<Suggestion> = res
            .json()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))?;

        debug!("{} suggestions for '{}'", suggestions.len(), query);
        Ok(suggestions)
    }
}
