// Node API module
//
// Capability contract for the locally running web node. Request signing and
// peer networking live behind this boundary; the library only consumes the
// results.

pub mod error;
pub mod http;

use async_trait::async_trait;
use std::sync::Arc;

pub use error::{NodeError, NodeResult};
pub use http::HttpNodeApi;

use crate::models::chat::{QueryId, QueryStatus};
use crate::models::history::ChatMessage;

/// Capabilities the local node exposes to the UI layer.
#[async_trait]
pub trait NodeApi: Send + Sync {
    /// Submit a question to the peer network; returns the assigned query id.
    async fn ask(&self, question: &str) -> NodeResult<QueryId>;

    /// Current per-peer response array for a query.
    async fn status(&self, id: &QueryId) -> NodeResult<QueryStatus>;

    /// Conversation transcript ending at the given query.
    async fn history(&self, id: &QueryId) -> NodeResult<Vec<ChatMessage>>;

    /// Current account balance.
    async fn balance(&self) -> NodeResult<u64>;
}

/// Shared node API handle
pub type SharedNodeApi = Arc<dyn NodeApi>;
