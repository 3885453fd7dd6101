use async_trait::async_trait;
use flightfinder_core::fetch::{Request, Response};
use flightfinder_core::gateway::{Network, NetworkError};
use reqwest::{header::CONTENT_TYPE, Client};
use crate::app_config::OfflineConfig;

/// Plain HTTP GET network used by the offline shim
#[derive(Clone)]
pub struct HttpNetwork {
    client: Client,
    origin: String,
}

impl HttpNetwork {
    pub fn new(config: &OfflineConfig) -> Self {
        Self {
            client: Client::new(),
            origin: config.origin.trim_end_matches('/').to_string(),
        }
    }

    fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}/{}", self.origin, url.trim_start_matches('/'))
        }
    }
}

#[async_trait]
impl Network for HttpNetwork {
    async fn fetch(&self, request: &Request) -> Result<Response, NetworkError> {
        let url = self.resolve(&request.url);
        let failed = |e: reqwest::Error| NetworkError {
            url: url.clone(),
            reason: e.to_string(),
        };

        let res = self.client.get(&url).send().await.map_err(failed)?;
        let status = res.status().as_u16();
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = res.bytes().await.map_err(failed)?;

        Ok(Response {
            url: request.url.clone(),
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::Html, routing::get, Router};

    #[tokio::test]
    async fn test_fetch_relative_path() {
        let app = Router::new()
            .route("/offline", get(|| async { Html("<h1>You are offline</h1>") }))
            .route("/broken", get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let network = HttpNetwork::new(&OfflineConfig {
            origin: format!("http://{}/", addr),
            ..OfflineConfig::default()
        });

        let page = network.fetch(&Request::navigate("/offline")).await.unwrap();
        assert_eq!(page.status, 200);
        assert_eq!(page.url, "/offline");
        assert_eq!(page.text(), "<h1>You are offline</h1>");
        assert!(page.content_type.unwrap().starts_with("text/html"));

        // A server error is still a completed fetch
        let broken = network.fetch(&Request::navigate("/broken")).await.unwrap();
        assert_eq!(broken.status, 502);
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let network = HttpNetwork::new(&OfflineConfig {
            origin: format!("http://{}", addr),
            ..OfflineConfig::default()
        });
        let err = network.fetch(&Request::navigate("/search")).await.unwrap_err();
        assert!(err.url.ends_with("/search"));
    }
}
