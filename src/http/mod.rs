//! HTTP executor abstraction
//!
//! Request builders never talk to the network directly. They hand a fully
//! assembled [`HttpRequest`] to an [`HttpExecutor`] and interpret the
//! [`HttpResponse`] it returns.

pub mod reqwest_executor;

pub use reqwest_executor::ReqwestExecutor;

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};

/// A request ready to be sent by an executor
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,

    /// Fully-qualified URL, including the query string
    pub url: String,

    /// Request headers
    pub headers: HeaderMap,

    /// Request body, possibly empty
    pub body: Bytes,
}

/// A response returned by an executor
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: StatusCode,

    /// Response headers
    pub headers: HeaderMap,

    /// Raw response body
    pub body: Bytes,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Set a raw string body
    pub fn set_body_string(&mut self, body: impl Into<String>) {
        self.body = Bytes::from(body.into());
    }

    /// Serialize `value` as the JSON body
    pub fn set_body_json<T: serde::Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let encoded = serde_json::to_vec(value).map_err(crate::error::ClientError::Encode)?;
        self.headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Bytes::from(encoded);
        Ok(())
    }

    /// Body as UTF-8 text, lossy
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl HttpResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as UTF-8 text, lossy
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Capability that sends one HTTP request and returns its response
///
/// Implementations own connection handling, deadlines and TLS. They must not
/// retry: each call maps to at most one round-trip.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    /// Send `request` and wait for the complete response
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_body_json_sets_content_type() {
        let mut request = HttpRequest::new(Method::PUT, "http://localhost:9200/blog/post/1");
        request.set_body_json(&serde_json::json!({"title": "Hi"})).unwrap();

        assert_eq!(request.body_text(), r#"{"title":"Hi"}"#);
        assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_set_body_string_is_verbatim() {
        let mut request = HttpRequest::new(Method::POST, "http://localhost:9200/blog/post/");
        request.set_body_string("{\"raw\": true}");

        assert_eq!(request.body_text(), "{\"raw\": true}");
        assert!(request.headers.get(CONTENT_TYPE).is_none());
    }
}
