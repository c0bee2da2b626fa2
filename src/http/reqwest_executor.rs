//! Default executor backed by `reqwest`

use super::{HttpExecutor, HttpRequest, HttpResponse};
use crate::config::ClientConfig;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Executor sending requests through a pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    http_client: Client,
}

impl ReqwestExecutor {
    /// Build an executor from connection settings
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut client_builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(config.pool_max_idle_per_host);

        if config.tls_enabled {
            client_builder = client_builder.https_only(true);
        }

        let http_client = client_builder.build()?;

        info!(
            "Initialized HTTP executor with timeout={}s tls_enabled={}",
            config.timeout_secs, config.tls_enabled
        );

        Ok(Self { http_client })
    }

    /// Create executor with custom HTTP client
    pub fn with_http_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!("Sending {} {}", request.method, request.url);

        let response = self.http_client
            .request(request.method, &request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        debug!("Received status {} ({} bytes)", status, body.len());

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
