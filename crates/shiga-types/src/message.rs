use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Ordinary conversation content.
    Normal,
    /// Transient UI state, e.g. the "assistant is typing" placeholder.
    Action,
}

/// A retrieved question/answer pair returned alongside a generated answer.
/// Opaque display data from the client's point of view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagReference {
    pub question_id: i64,
    pub question: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// A single message within a thread. Append-only from the client's
/// perspective; the server is authoritative on reload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub time: DateTime<Utc>,
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<RagReference>,
}

impl Message {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, MessageKind::Normal, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, MessageKind::Normal, content)
    }

    /// Create an assistant-side action entry (typing placeholder etc.)
    pub fn action(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, MessageKind::Action, content)
    }

    fn new(role: MessageRole, kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            time: Utc::now(),
            kind,
            references: Vec::new(),
        }
    }

    pub fn with_references(mut self, references: Vec<RagReference>) -> Self {
        self.references = references;
        self
    }

    /// Get role as string
    pub fn role_str(&self) -> &str {
        match self.role {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_role_and_kind() {
        let user = Message::user("hello");
        assert_eq!(user.role, MessageRole::User);
        assert_eq!(user.kind, MessageKind::Normal);

        let typing = Message::action("typing");
        assert_eq!(typing.role, MessageRole::Assistant);
        assert_eq!(typing.kind, MessageKind::Action);
    }

    #[test]
    fn test_serialization_roles() {
        let msg = Message::assistant("hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"assistant\""));
        assert!(!json.contains("references"));
    }
}
