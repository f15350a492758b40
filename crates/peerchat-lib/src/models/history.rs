// Conversation transcript models
//
// Wire casing follows the node: roles serialize as "User"/"Assistant",
// which is what `/history/{id}` returns.

use serde::{Deserialize, Serialize};

/// One entry of the conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub content: String,
    pub role: MessageRole,
}

impl ChatMessage {
    pub fn user(content: String) -> Self {
        Self {
            content,
            role: MessageRole::User,
        }
    }

    pub fn assistant(content: String) -> Self {
        Self {
            content,
            role: MessageRole::Assistant,
        }
    }
}

/// Transcript author role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::User => write!(f, "User"),
            MessageRole::Assistant => write!(f, "Assistant"),
            MessageRole::System => write!(f, "System"),
        }
    }
}

impl std::str::FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User" => Ok(MessageRole::User),
            "Assistant" => Ok(MessageRole::Assistant),
            "System" => Ok(MessageRole::System),
            _ => Err(format!("Invalid message role: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_casing() {
        let message = ChatMessage::user("hello".to_string());
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "User");

        let parsed: ChatMessage =
            serde_json::from_str(r#"{"content": "hi", "role": "Assistant"}"#).unwrap();
        assert_eq!(parsed.role, MessageRole::Assistant);
        assert_eq!(parsed.content, "hi");
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("User".parse::<MessageRole>().unwrap(), MessageRole::User);
        assert!("user".parse::<MessageRole>().is_err());
    }
}
