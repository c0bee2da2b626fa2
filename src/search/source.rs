//! Query body builder

use serde_json::{Map, Value};

/// Builder for the body of a search request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSource {
    query: Option<Value>,
    from: Option<usize>,
    size: Option<usize>,
    explain: Option<bool>,
    version: Option<bool>,
    min_score: Option<f64>,
    timeout: Option<String>,
    fields: Vec<String>,
    sort: Vec<Value>,
}

impl SearchSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: Value) -> Self {
        self.query = Some(query);
        self
    }

    pub fn from(mut self, from: usize) -> Self {
        self.from = Some(from);
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn explain(mut self, explain: bool) -> Self {
        self.explain = Some(explain);
        self
    }

    /// Return the document version with each hit
    pub fn version(mut self, version: bool) -> Self {
        self.version = Some(version);
        self
    }

    pub fn min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    /// Per-shard search timeout, e.g. `"5s"`
    pub fn timeout(mut self, timeout: impl Into<String>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Sort on `field`, ascending or descending
    pub fn sort(mut self, field: impl Into<String>, ascending: bool) -> Self {
        let order = if ascending { "asc" } else { "desc" };
        let mut clause = Map::new();
        clause.insert(field.into(), serde_json::json!({ "order": order }));
        self.sort.push(Value::Object(clause));
        self
    }

    /// Render into the structured query body
    pub fn build(&self) -> Value {
        let mut source = Map::new();

        if let Some(query) = &self.query {
            source.insert("query".to_string(), query.clone());
        }
        if let Some(from) = self.from {
            source.insert("from".to_string(), from.into());
        }
        if let Some(size) = self.size {
            source.insert("size".to_string(), size.into());
        }
        if let Some(explain) = self.explain {
            source.insert("explain".to_string(), explain.into());
        }
        if let Some(version) = self.version {
            source.insert("version".to_string(), version.into());
        }
        if let Some(min_score) = self.min_score {
            source.insert("min_score".to_string(), min_score.into());
        }
        if let Some(timeout) = &self.timeout {
            source.insert("timeout".to_string(), timeout.clone().into());
        }
        if !self.fields.is_empty() {
            source.insert("fields".to_string(), self.fields.clone().into());
        }
        if !self.sort.is_empty() {
            source.insert("sort".to_string(), Value::Array(self.sort.clone()));
        }

        Value::Object(source)
    }
}
