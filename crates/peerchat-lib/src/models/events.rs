// Display-layer events
//
// Everything the library tells the front-end goes through these payloads.
// Consumers match on the variant or filter by `name()`.

use serde::{Deserialize, Serialize};

use super::chat::{PeerReply, QueryId};

/// Event published on the bus for the display layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChatEvent {
    /// A question was accepted and is now tracked.
    #[serde(rename = "query_started")]
    QueryStarted { id: QueryId, text: String },
    /// Partial per-peer replies for a still-running query.
    #[serde(rename = "query_response")]
    QueryResponse { id: QueryId, replies: Vec<PeerReply> },
    /// Every peer reached a terminal state; the query left tracking.
    #[serde(rename = "query_finished")]
    QueryFinished { id: QueryId, replies: Vec<PeerReply> },
    /// The tracking set was emptied.
    #[serde(rename = "tracking_cleared")]
    TrackingCleared,
    /// Fresh account balance.
    #[serde(rename = "balance_updated")]
    BalanceUpdated { balance: u64 },
}

impl ChatEvent {
    /// Stable name consumers subscribe by.
    pub fn name(&self) -> &'static str {
        match self {
            ChatEvent::QueryStarted { .. } => "chat:query-started",
            ChatEvent::QueryResponse { .. } => "chat:query-response",
            ChatEvent::QueryFinished { .. } => "chat:query-finished",
            ChatEvent::TrackingCleared => "chat:tracking-cleared",
            ChatEvent::BalanceUpdated { .. } => "balance:updated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let started = ChatEvent::QueryStarted {
            id: "q1".to_string(),
            text: "hello".to_string(),
        };
        assert_eq!(started.name(), "chat:query-started");
        assert_eq!(ChatEvent::TrackingCleared.name(), "chat:tracking-cleared");
        assert_eq!(
            ChatEvent::BalanceUpdated { balance: 5 }.name(),
            "balance:updated"
        );
    }

    #[test]
    fn test_event_serialization_tag() {
        let event = ChatEvent::BalanceUpdated { balance: 42 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "balance_updated");
        assert_eq!(json["balance"], 42);
    }
}
