use serde::{Deserialize, Serialize};

use crate::thread::ThreadId;

/// Application events broadcast on the in-process event bus.
///
/// Replaces the ambient window-scoped events of the original UI with typed
/// payloads: every surface that tracks the active thread (chat view,
/// navigation sidebar, notification badge) subscribes to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// The active thread changed.
    ThreadSelected { id: ThreadId },

    /// A temporary thread id was replaced by its server-assigned id.
    /// Subscribers holding the temp id must reconcile their own state.
    ThreadBound { temp: ThreadId, server: ThreadId },

    /// A thread was deleted (locally and, for server threads, remotely).
    ThreadDeleted { id: ThreadId },

    /// The current chat was cleared without selecting another thread.
    ChatCleared,

    /// The backend rejected our credentials; the session is over.
    SessionExpired,

    /// Unread notification count changed.
    NotificationCount { unread: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = AppEvent::ThreadBound {
            temp: ThreadId::Temp("tmp-x".to_string()),
            server: ThreadId::Server(12),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"thread_bound\""));

        let back: AppEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
