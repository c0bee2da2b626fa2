//! Data models for index operations

use serde::{Deserialize, Serialize};

/// Result of indexing a document, as reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexResult {
    #[serde(rename = "_index")]
    pub index: String,

    #[serde(rename = "_type")]
    pub doc_type: String,

    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_version")]
    pub version: i64,

    #[serde(default)]
    pub created: bool,
}

/// Operation type; `create` fails if the document already exists
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OpType {
    Create,
    Index,
}

impl OpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpType::Create => "create",
            OpType::Index => "index",
        }
    }
}

/// Versioning scheme applied to an explicit version
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VersionType {
    Internal,
    External,
    ExternalGt,
    ExternalGte,
    Force,
}

impl VersionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionType::Internal => "internal",
            VersionType::External => "external",
            VersionType::ExternalGt => "external_gt",
            VersionType::ExternalGte => "external_gte",
            VersionType::Force => "force",
        }
    }
}
