use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shiga_types::ThreadId;

/// Lifecycle of the session's current conversation.
///
/// A temporary id is visible only while `Pending`; the first successful
/// exchange replaces it with the server id everywhere at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ThreadState {
    /// No conversation selected.
    NoThread,
    /// First message sent (or about to be) on a client-minted id; the
    /// server has not acknowledged the thread yet.
    Pending(ThreadId),
    /// Server-acknowledged thread.
    Bound(ThreadId),
}

impl ThreadState {
    pub fn thread_id(&self) -> Option<&ThreadId> {
        match self {
            Self::NoThread => None,
            Self::Pending(id) | Self::Bound(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptState {
    Idle,
    Sending,
    Succeeded,
    Failed,
}

/// One question-send attempt.
///
/// Carries the ids of the optimistic UI entries it added, so a rollback
/// removes exactly what this attempt put in and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendAttempt {
    pub id: Uuid,
    /// The thread this attempt belongs to. Completion bookkeeping keys off
    /// this id, not off whatever thread is current when the response lands.
    pub thread: ThreadId,
    pub user_message_id: Uuid,
    pub placeholder_id: Uuid,
    pub state: AttemptState,
    pub error: Option<String>,
}

impl SendAttempt {
    pub fn new(thread: ThreadId, user_message_id: Uuid, placeholder_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            thread,
            user_message_id,
            placeholder_id,
            state: AttemptState::Idle,
            error: None,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.state == AttemptState::Sending
    }
}
