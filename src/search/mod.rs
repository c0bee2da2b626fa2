//! Search request descriptors for multi-search batches

pub mod request;
pub mod source;

pub use request::SearchRequest;
pub use source::SearchSource;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Execution mode of a search; the service default is `query_then_fetch`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    QueryThenFetch,
    QueryAndFetch,
    Scan,
    Count,
    DfsQueryThenFetch,
    DfsQueryAndFetch,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::QueryThenFetch => "query_then_fetch",
            SearchType::QueryAndFetch => "query_and_fetch",
            SearchType::Scan => "scan",
            SearchType::Count => "count",
            SearchType::DfsQueryThenFetch => "dfs_query_then_fetch",
            SearchType::DfsQueryAndFetch => "dfs_query_and_fetch",
        }
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can render itself into a structured query body
///
/// Raw JSON is used verbatim; query builders render their own structure.
pub trait Source {
    fn render(self) -> Value;
}

impl Source for Value {
    fn render(self) -> Value {
        self
    }
}

impl Source for Map<String, Value> {
    fn render(self) -> Value {
        Value::Object(self)
    }
}

impl Source for SearchSource {
    fn render(self) -> Value {
        self.build()
    }
}

impl Source for &SearchSource {
    fn render(self) -> Value {
        self.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_type_wire_names() {
        assert_eq!(SearchType::DfsQueryAndFetch.as_str(), "dfs_query_and_fetch");
        assert_eq!(
            serde_json::to_value(SearchType::QueryThenFetch).unwrap(),
            Value::String("query_then_fetch".to_string())
        );
        assert_eq!(SearchType::Scan.to_string(), "scan");
    }

    #[test]
    fn test_raw_values_render_verbatim() {
        let raw = serde_json::json!({"query": {"match_all": {}}});
        assert_eq!(raw.clone().render(), raw);
    }
}
