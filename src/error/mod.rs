//! Error types for the document-search client

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Boxed error raised by an HTTP executor implementation
pub type TransportSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for the document-search client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Path expansion error: {0}")]
    PathExpansion(String),

    #[error("Transport error: {0}")]
    Transport(#[source] TransportSource),

    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error envelope returned by the service alongside a failing status
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorDetails {
    pub error: serde_json::Value,

    #[serde(default)]
    pub status: Option<u16>,
}

impl ClientError {
    /// Status code carried by an `HttpStatus` error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parse the service's `{"error": ..., "status": ...}` envelope, if the
    /// failing response carried one
    pub fn error_details(&self) -> Option<ErrorDetails> {
        match self {
            ClientError::HttpStatus { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(Box::new(err))
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Config(err.to_string())
    }
}
