// Chat service error types

use thiserror::Error;

use crate::repositories::session_repo::StoreError;
use crate::services::node::NodeError;

/// Chat service error
#[derive(Error, Debug)]
pub enum ChatError {
    /// Caller submitted a blank question
    #[error("The question cannot be empty")]
    EmptyQuestion,

    /// The node call failed
    #[error(transparent)]
    Node(#[from] NodeError),

    /// Session store access failed
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Result type for chat operations
pub type ChatResult<T> = Result<T, ChatError>;
