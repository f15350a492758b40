// Chat query data models
//
// `PeerResult` mirrors the wire shape the node returns from `/answer/{id}`:
// one externally tagged variant per peer state. `PeerReply` is the
// normalized projection the answers panel renders.

use serde::{Deserialize, Serialize};

/// Identifier the node assigns to a submitted question.
pub type QueryId = String;

/// One peer's progress on a query, as reported by the node.
///
/// A timeout wraps the sent-request it superseded, so the peer identity
/// stays recoverable through the nesting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PeerResult {
    SentRequest(String),
    Timeout(Box<PeerResult>),
    NodeResponse(SignedReply),
    Error(String, String),
    Verified(Box<VerifiedReply>),
}

impl PeerResult {
    /// Public key of the peer this entry belongs to.
    pub fn node_key(&self) -> &str {
        match self {
            PeerResult::SentRequest(key) => key,
            PeerResult::Timeout(inner) => inner.node_key(),
            PeerResult::NodeResponse(reply) => &reply.node_response.pubkey,
            PeerResult::Error(key, _) => key,
            PeerResult::Verified(reply) => &reply.result.material.node_response.pubkey,
        }
    }

    /// Whether no further update is expected from this peer.
    pub fn is_terminal(&self) -> bool {
        match self {
            PeerResult::SentRequest(_) | PeerResult::NodeResponse(_) => false,
            PeerResult::Timeout(_) | PeerResult::Error(_, _) | PeerResult::Verified(_) => true,
        }
    }
}

/// A peer's answer, still unverified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignedReply {
    pub node_response: NodeReply,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeReply {
    pub pubkey: String,
    pub response: String,
}

/// An answer that passed inspection by another peer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifiedReply {
    pub result: VerificationReport,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationReport {
    pub material: SignedReply,
    pub inspector: String,
    pub relevance: serde_json::Value,
    pub description: String,
}

/// Payload of `/answer/{id}`: the per-peer response array for one query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryStatus {
    pub response: Vec<PeerResult>,
}

/// Display status of a single peer reply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReplyStatus {
    SendRequest,
    Error,
    TimeOut,
    NodeResponse,
    Finished,
}

impl std::fmt::Display for ReplyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplyStatus::SendRequest => write!(f, "send request"),
            ReplyStatus::Error => write!(f, "error"),
            ReplyStatus::TimeOut => write!(f, "time out"),
            ReplyStatus::NodeResponse => write!(f, "node response"),
            ReplyStatus::Finished => write!(f, "finished"),
        }
    }
}

/// Verification details carried only by verified replies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub description: String,
    pub inspector: String,
    pub relevance: serde_json::Value,
}

/// Normalized per-peer reply consumed by the display layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeerReply {
    pub node_id: String,
    pub finished: bool,
    pub status: ReplyStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
}

impl PeerReply {
    /// Transcript entry replayed at startup, under a synthetic node id.
    pub fn historical(index: usize, content: String) -> Self {
        Self {
            node_id: format!("history_{}", index),
            finished: true,
            status: ReplyStatus::Finished,
            message: content,
            verification: None,
        }
    }
}

impl From<&PeerResult> for PeerReply {
    fn from(result: &PeerResult) -> Self {
        match result {
            PeerResult::SentRequest(key) => Self {
                node_id: key.clone(),
                finished: false,
                status: ReplyStatus::SendRequest,
                message: String::from("The request has been sent"),
                verification: None,
            },
            PeerResult::Timeout(inner) => Self {
                node_id: inner.node_key().to_string(),
                finished: true,
                status: ReplyStatus::TimeOut,
                message: String::from("Time out"),
                verification: None,
            },
            PeerResult::NodeResponse(reply) => Self {
                node_id: reply.node_response.pubkey.clone(),
                finished: false,
                status: ReplyStatus::NodeResponse,
                message: reply.node_response.response.clone(),
                verification: None,
            },
            PeerResult::Error(key, message) => Self {
                node_id: key.clone(),
                finished: true,
                status: ReplyStatus::Error,
                message: message.clone(),
                verification: None,
            },
            PeerResult::Verified(reply) => Self {
                node_id: reply.result.material.node_response.pubkey.clone(),
                finished: true,
                status: ReplyStatus::Finished,
                message: reply.result.material.node_response.response.clone(),
                verification: Some(Verification {
                    description: reply.result.description.clone(),
                    inspector: reply.result.inspector.clone(),
                    relevance: reply.result.relevance.clone(),
                }),
            },
        }
    }
}
