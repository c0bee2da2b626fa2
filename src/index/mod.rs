//! Document indexing operation

pub mod models;
pub mod service;

pub use models::{IndexResult, OpType, VersionType};
pub use service::IndexService;
