//! Builder that adds or replaces a single document

use super::models::{IndexResult, OpType, VersionType};
use crate::client::Client;
use crate::error::{ClientError, Result};
use crate::uritemplate;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

/// Indexes one document
///
/// Without an explicit id the service generates one and the request is
/// sent as `POST /{index}/{type}/`; with an id it is `PUT /{index}/{type}/{id}`.
#[derive(Debug, Clone)]
pub struct IndexService {
    client: Client,
    index: String,
    doc_type: String,
    id: Option<String>,
    routing: Option<String>,
    parent: Option<String>,
    op_type: Option<OpType>,
    refresh: Option<bool>,
    version: Option<i64>,
    version_type: Option<VersionType>,
    timestamp: Option<String>,
    ttl: Option<String>,
    timeout: Option<String>,
    body_string: String,
    body_json: Option<Value>,
    pretty: bool,
    debug: bool,
}

impl IndexService {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            index: String::new(),
            doc_type: String::new(),
            id: None,
            routing: None,
            parent: None,
            op_type: None,
            refresh: None,
            version: None,
            version_type: None,
            timestamp: None,
            ttl: None,
            timeout: None,
            body_string: String::new(),
            body_json: None,
            pretty: false,
            debug: false,
        }
    }

    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = doc_type.into();
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn routing(mut self, routing: impl Into<String>) -> Self {
        self.routing = Some(routing.into());
        self
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn op_type(mut self, op_type: OpType) -> Self {
        self.op_type = Some(op_type);
        self
    }

    /// Only `true` reaches the wire; `false` behaves like never calling this
    pub fn refresh(mut self, refresh: bool) -> Self {
        self.refresh = Some(refresh);
        self
    }

    pub fn version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }

    pub fn version_type(mut self, version_type: VersionType) -> Self {
        self.version_type = Some(version_type);
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn ttl(mut self, ttl: impl Into<String>) -> Self {
        self.ttl = Some(ttl.into());
        self
    }

    pub fn timeout(mut self, timeout: impl Into<String>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }

    /// Pre-serialized document, sent verbatim
    pub fn body_string(mut self, body: impl Into<String>) -> Self {
        self.body_string = body.into();
        self
    }

    /// Structured document; takes precedence over [`body_string`](Self::body_string)
    pub fn body_json(mut self, body: Value) -> Self {
        self.body_json = Some(body);
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Dump request and response through `tracing` at debug level
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// HTTP method and expanded path for the current state
    pub fn build_path(&self) -> Result<(Method, String)> {
        let (method, template) = match self.id {
            Some(_) => (Method::PUT, "/{index}/{type}/{id}"),
            None => (Method::POST, "/{index}/{type}/"),
        };

        let id = self.id.as_deref().unwrap_or("");
        let path = uritemplate::expand(
            template,
            &[("index", self.index.as_str()), ("type", self.doc_type.as_str()), ("id", id)],
        )?;

        Ok((method, path))
    }

    /// Query parameters in emission order
    pub fn build_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if self.pretty {
            params.push(("pretty", "true".to_string()));
        }
        push_non_empty(&mut params, "routing", &self.routing);
        push_non_empty(&mut params, "parent", &self.parent);
        if let Some(op_type) = self.op_type {
            params.push(("op_type", op_type.as_str().to_string()));
        }
        if self.refresh == Some(true) {
            params.push(("refresh", "true".to_string()));
        }
        if let Some(version) = self.version {
            params.push(("version", version.to_string()));
        }
        if let Some(version_type) = self.version_type {
            params.push(("version_type", version_type.as_str().to_string()));
        }
        push_non_empty(&mut params, "timestamp", &self.timestamp);
        push_non_empty(&mut params, "ttl", &self.ttl);
        push_non_empty(&mut params, "timeout", &self.timeout);

        params
    }

    /// Encoded query string, empty when no parameter is set
    pub fn build_query_string(&self) -> String {
        uritemplate::encode_query(&self.build_params())
    }

    /// Send the document and decode the service's answer
    pub async fn execute(&self) -> Result<IndexResult> {
        let (method, mut path) = self.build_path()?;

        let query = self.build_query_string();
        if !query.is_empty() {
            path.push('?');
            path.push_str(&query);
        }

        let mut request = self.client.new_request(method, &path);
        match &self.body_json {
            Some(body) => request.set_body_json(body)?,
            None => request.set_body_string(self.body_string.clone()),
        }

        debug!("Indexing document into {}/{}", self.index, self.doc_type);

        let response = self.client.perform(request, self.debug).await?;

        serde_json::from_slice(&response.body).map_err(ClientError::Decode)
    }
}

fn push_non_empty(params: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        params.push((key, value.to_string()));
    }
}
