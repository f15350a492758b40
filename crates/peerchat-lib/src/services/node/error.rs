// Node API error types

use thiserror::Error;

/// Node API error
#[derive(Error, Debug)]
pub enum NodeError {
    /// Cannot reach the node
    #[error("Cannot connect to the node: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Node response timeout")]
    Timeout,

    /// Node answered with a non-success status
    #[error("Node API error: {0}")]
    ApiError(String),

    /// Response body did not match the expected shape
    #[error("Response parse error: {0}")]
    ParseError(String),

    /// Endpoint is not a valid URL
    #[error("Invalid node endpoint: {0}")]
    InvalidEndpoint(String),
}

impl From<reqwest::Error> for NodeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NodeError::Timeout
        } else if err.is_connect() {
            NodeError::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            NodeError::ParseError(err.to_string())
        } else {
            NodeError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for NodeError {
    fn from(err: serde_json::Error) -> Self {
        NodeError::ParseError(err.to_string())
    }
}

/// Result type for node API operations
pub type NodeResult<T> = Result<T, NodeError>;
