//! Entry point binding request builders to a service URL and an executor

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::http::{HttpExecutor, HttpRequest, HttpResponse, ReqwestExecutor};
use crate::index::IndexService;
use crate::search::SearchRequest;
use reqwest::Method;
use std::sync::Arc;
use tracing::debug;

/// Handle to a document-search service
///
/// Cloning is cheap; clones share the same executor.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    executor: Arc<dyn HttpExecutor>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client using the default `reqwest` executor
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let executor = ReqwestExecutor::new(config)?;
        Ok(Self::with_executor(&config.url, Arc::new(executor)))
    }

    /// Create a client with a caller-supplied executor
    pub fn with_executor(base_url: impl Into<String>, executor: Arc<dyn HttpExecutor>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, executor }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start building an index operation
    pub fn index(&self) -> IndexService {
        IndexService::new(self.clone())
    }

    /// Start building a search descriptor for a multi-search batch
    pub fn search_request(&self) -> SearchRequest {
        SearchRequest::new()
    }

    /// Create a request for `path_and_query`, relative to the service URL
    pub fn new_request(&self, method: Method, path_and_query: &str) -> HttpRequest {
        HttpRequest::new(method, format!("{}{}", self.base_url, path_and_query))
    }

    /// Send a request and reject non-success statuses
    pub(crate) async fn perform(&self, request: HttpRequest, dump: bool) -> Result<HttpResponse> {
        if dump {
            debug!(
                method = %request.method,
                url = %request.url,
                body = %request.body_text(),
                "Request dump"
            );
        }

        let response = self.executor.execute(request).await?;

        if dump {
            debug!(
                status = response.status.as_u16(),
                body = %response.body_text(),
                "Response dump"
            );
        }

        check_response(response)
    }
}

fn check_response(response: HttpResponse) -> Result<HttpResponse> {
    if response.is_success() {
        return Ok(response);
    }

    Err(ClientError::HttpStatus {
        status: response.status.as_u16(),
        body: response.body_text(),
    })
}
