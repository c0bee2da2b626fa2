//! Docsearch Client - fluent request builders for a document-search HTTP service
//!
//! The crate turns strongly-typed builder state into the wire representation
//! the service expects (path templates, query parameters, JSON bodies) and
//! decodes its responses. Sending bytes is delegated to an [`HttpExecutor`];
//! a `reqwest`-backed executor is provided.
//!
//! ## Features
//!
//! - **Index operation**: add or replace a document and decode the result
//! - **Search descriptors**: header/body projections for multi-search batches
//! - **Pluggable transport**: any [`HttpExecutor`] implementation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docsearch_client::prelude::*;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::from_file("docsearch.toml")?;
//!     let client = Client::new(&config.client)?;
//!
//!     let result = client
//!         .index()
//!         .index("blog")
//!         .doc_type("post")
//!         .id("1")
//!         .body_json(json!({"title": "Hi"}))
//!         .execute()
//!         .await?;
//!
//!     println!("indexed {} at version {}", result.id, result.version);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod index;
pub mod observability;
pub mod search;
pub mod uritemplate;

pub use client::Client;
pub use config::Config;
pub use error::{ClientError, Result};
pub use http::HttpExecutor;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::Client;
    pub use crate::config::{ClientConfig, Config};
    pub use crate::error::{ClientError, Result};
    pub use crate::http::{HttpExecutor, HttpRequest, HttpResponse, ReqwestExecutor};
    pub use crate::index::{IndexResult, IndexService, OpType, VersionType};
    pub use crate::search::{SearchRequest, SearchSource, SearchType, Source};
}
