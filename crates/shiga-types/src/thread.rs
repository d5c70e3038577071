use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix carried by every client-generated thread id.
pub const TEMP_ID_PREFIX: &str = "tmp-";

/// Conversation thread identifier.
///
/// Two namespaces exist: `Temp` ids are minted by the client before the
/// server has created the thread and are never sent as an update target;
/// `Server` ids are the canonical, server-assigned identifiers. The tagged
/// serde representation keeps the two from ever being confused on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ThreadId {
    Temp(String),
    Server(i64),
}

impl ThreadId {
    /// Mint a fresh temporary id, unique within the session.
    pub fn fresh_temp() -> Self {
        Self::Temp(format!("{}{}", TEMP_ID_PREFIX, uuid::Uuid::new_v4()))
    }

    pub fn is_temp(&self) -> bool {
        matches!(self, Self::Temp(_))
    }

    /// The server-assigned id, if this thread has one.
    pub fn as_server(&self) -> Option<i64> {
        match self {
            Self::Server(id) => Some(*id),
            Self::Temp(_) => None,
        }
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temp(id) => write!(f, "{}", id),
            Self::Server(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for ThreadId {
    fn from(id: i64) -> Self {
        Self::Server(id)
    }
}

/// A conversation thread as tracked by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub id: ThreadId,
    pub title: String,
    pub last_updated: DateTime<Utc>,
}
