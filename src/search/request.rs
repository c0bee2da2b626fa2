//! A single search inside a multi-search batch
//!
//! The batch protocol sends every search as two newline-separated JSON
//! lines: a header with routing metadata and a body with the query. This
//! type renders both structures; joining them into lines is the job of the
//! batch coordinator.

use super::{SearchType, Source};
use serde_json::{Map, Value};

/// Descriptor of one search request in a multi-search call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    search_type: Option<SearchType>,
    indices: Vec<String>,
    types: Vec<String>,
    routing: Option<String>,
    preference: Option<String>,
    source: Option<Value>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = Some(search_type);
        self
    }

    pub fn search_type_query_then_fetch(self) -> Self {
        self.search_type(SearchType::QueryThenFetch)
    }

    pub fn search_type_query_and_fetch(self) -> Self {
        self.search_type(SearchType::QueryAndFetch)
    }

    pub fn search_type_scan(self) -> Self {
        self.search_type(SearchType::Scan)
    }

    pub fn search_type_count(self) -> Self {
        self.search_type(SearchType::Count)
    }

    pub fn search_type_dfs_query_then_fetch(self) -> Self {
        self.search_type(SearchType::DfsQueryThenFetch)
    }

    pub fn search_type_dfs_query_and_fetch(self) -> Self {
        self.search_type(SearchType::DfsQueryAndFetch)
    }

    /// Append one index
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.indices.push(index.into());
        self
    }

    /// Append several indices, keeping their order
    pub fn indices<I, S>(mut self, indices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indices.extend(indices.into_iter().map(Into::into));
        self
    }

    pub fn has_indices(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Append one document type
    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.types.push(doc_type.into());
        self
    }

    /// Append several document types, keeping their order
    pub fn doc_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn routing(mut self, routing: impl Into<String>) -> Self {
        self.routing = Some(routing.into());
        self
    }

    /// Comma-join several routing values; no values clears routing
    pub fn routings<I, S>(mut self, routings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<S> = routings.into_iter().collect();
        self.routing = if values.is_empty() {
            None
        } else {
            Some(values.iter().map(|v| v.as_ref()).collect::<Vec<&str>>().join(","))
        };
        self
    }

    pub fn preference(mut self, preference: impl Into<String>) -> Self {
        self.preference = Some(preference.into());
        self
    }

    /// Set the query body from raw JSON or anything implementing [`Source`]
    pub fn source(mut self, source: impl Source) -> Self {
        self.source = Some(source.render());
        self
    }

    pub fn get_routing(&self) -> Option<&str> {
        self.routing.as_deref()
    }

    pub fn get_preference(&self) -> Option<&str> {
        self.preference.as_deref()
    }

    /// Header line of this search in a multi-search batch
    pub fn header(&self) -> Map<String, Value> {
        let mut header = Map::new();

        if let Some(search_type) = self.search_type {
            header.insert("search_type".to_string(), search_type.as_str().into());
        }

        match self.indices.as_slice() {
            [] => {}
            [index] => {
                header.insert("index".to_string(), index.clone().into());
            }
            indices => {
                header.insert("indices".to_string(), indices.to_vec().into());
            }
        }

        // The service reads a lone type from `types` and several from `type`,
        // the reverse of the index keys. Drop this inversion only together
        // with a wire format change.
        match self.types.as_slice() {
            [] => {}
            [doc_type] => {
                header.insert("types".to_string(), doc_type.clone().into());
            }
            types => {
                header.insert("type".to_string(), types.to_vec().into());
            }
        }

        if let Some(routing) = self.routing.as_deref().filter(|r| !r.is_empty()) {
            header.insert("routing".to_string(), routing.into());
        }

        if let Some(preference) = self.preference.as_deref().filter(|p| !p.is_empty()) {
            header.insert("preference".to_string(), preference.into());
        }

        header
    }

    /// Body line of this search in a multi-search batch
    pub fn body(&self) -> Option<&Value> {
        self.source.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchSource;
    use serde_json::json;

    #[test]
    fn test_empty_request_has_empty_header() {
        let request = SearchRequest::new();
        assert!(request.header().is_empty());
        assert!(request.body().is_none());
        assert!(!request.has_indices());
    }

    #[test]
    fn test_single_index_is_scalar() {
        let header = SearchRequest::new().index("blog").header();
        assert_eq!(header.get("index"), Some(&json!("blog")));
        assert!(!header.contains_key("indices"));
    }

    #[test]
    fn test_multiple_indices_are_ordered_sequence() {
        let request = SearchRequest::new().index("b").indices(["a", "c", "a"]);
        assert!(request.has_indices());

        let header = request.header();
        assert_eq!(header.get("indices"), Some(&json!(["b", "a", "c", "a"])));
        assert!(!header.contains_key("index"));
    }

    #[test]
    fn test_single_type_uses_plural_key() {
        let header = SearchRequest::new().doc_type("tweet").header();
        assert_eq!(header.get("types"), Some(&json!("tweet")));
        assert!(!header.contains_key("type"));
    }

    #[test]
    fn test_multiple_types_use_singular_key() {
        let header = SearchRequest::new().doc_type("tweet").doc_types(["comment"]).header();
        assert_eq!(header.get("type"), Some(&json!(["tweet", "comment"])));
        assert!(!header.contains_key("types"));
    }

    #[test]
    fn test_routings_join_and_clear() {
        let request = SearchRequest::new().routings(["a", "b"]);
        assert_eq!(request.get_routing(), Some("a,b"));
        assert_eq!(request.header().get("routing"), Some(&json!("a,b")));

        let cleared = request.routings(Vec::<String>::new());
        assert_eq!(cleared.get_routing(), None);
        assert!(!cleared.header().contains_key("routing"));
    }

    #[test]
    fn test_empty_routing_and_preference_omitted() {
        let request = SearchRequest::new().routing("").preference("");
        assert_eq!(request.get_routing(), Some(""));
        assert_eq!(request.get_preference(), Some(""));

        let header = request.header();
        assert!(!header.contains_key("routing"));
        assert!(!header.contains_key("preference"));
    }

    #[test]
    fn test_full_header() {
        let header = SearchRequest::new()
            .search_type_dfs_query_then_fetch()
            .index("blog")
            .doc_type("post")
            .routing("user1")
            .preference("_local")
            .header();

        assert_eq!(
            Value::Object(header),
            json!({
                "search_type": "dfs_query_then_fetch",
                "index": "blog",
                "types": "post",
                "routing": "user1",
                "preference": "_local"
            })
        );
    }

    #[test]
    fn test_search_type_shortcuts() {
        let cases = [
            (SearchRequest::new().search_type_query_then_fetch(), "query_then_fetch"),
            (SearchRequest::new().search_type_query_and_fetch(), "query_and_fetch"),
            (SearchRequest::new().search_type_scan(), "scan"),
            (SearchRequest::new().search_type_count(), "count"),
            (SearchRequest::new().search_type_dfs_query_then_fetch(), "dfs_query_then_fetch"),
            (SearchRequest::new().search_type_dfs_query_and_fetch(), "dfs_query_and_fetch"),
        ];

        for (request, expected) in cases {
            assert_eq!(request.header().get("search_type"), Some(&json!(expected)));
        }
    }

    #[test]
    fn test_raw_source_is_stored_verbatim() {
        let raw = json!({"query": {"match_all": {}}});
        let request = SearchRequest::new().source(raw.clone());
        assert_eq!(request.body(), Some(&raw));
    }

    #[test]
    fn test_builder_source_is_rendered() {
        let source = SearchSource::new().query(json!({"match_all": {}})).size(3);
        let request = SearchRequest::new().source(&source);
        assert_eq!(request.body(), Some(&json!({"query": {"match_all": {}}, "size": 3})));
    }

    #[test]
    fn test_projection_is_repeatable() {
        let request = SearchRequest::new().indices(["a", "b"]).routing("r");
        assert_eq!(request.header(), request.header());
    }
}
