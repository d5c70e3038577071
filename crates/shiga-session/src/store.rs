use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use shiga_types::{Message, ThreadId};

/// Composite cache key: one message list per user per thread.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub user_id: String,
    pub thread_id: ThreadId,
}

impl CacheKey {
    pub fn new(user_id: impl Into<String>, thread_id: ThreadId) -> Self {
        Self {
            user_id: user_id.into(),
            thread_id,
        }
    }
}

/// In-memory message cache for the session.
///
/// All mutation happens under one lock, so a thread's list is either fully
/// under its old key or fully under its new one; `rekey` can never expose
/// a half-migrated cache to an interleaved callback.
#[derive(Clone, Default)]
pub struct MessageStore {
    inner: Arc<Mutex<HashMap<CacheKey, Vec<Message>>>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, key: &CacheKey, message: Message) {
        let mut map = self.inner.lock().unwrap();
        map.entry(key.clone()).or_default().push(message);
    }

    /// Snapshot of a thread's messages; empty if the key is absent.
    pub fn messages(&self, key: &CacheKey) -> Vec<Message> {
        let map = self.inner.lock().unwrap();
        map.get(key).cloned().unwrap_or_default()
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.inner.lock().unwrap().contains_key(key)
    }

    /// Swap a cached message for another in place. Returns false if the key
    /// or the message id is unknown.
    pub fn replace_message(&self, key: &CacheKey, message_id: Uuid, replacement: Message) -> bool {
        let mut map = self.inner.lock().unwrap();
        let Some(messages) = map.get_mut(key) else {
            return false;
        };
        match messages.iter_mut().find(|m| m.id == message_id) {
            Some(slot) => {
                *slot = replacement;
                true
            }
            None => false,
        }
    }

    pub fn remove_message(&self, key: &CacheKey, message_id: Uuid) -> bool {
        let mut map = self.inner.lock().unwrap();
        let Some(messages) = map.get_mut(key) else {
            return false;
        };
        let before = messages.len();
        messages.retain(|m| m.id != message_id);
        messages.len() != before
    }

    pub fn remove(&self, key: &CacheKey) {
        self.inner.lock().unwrap().remove(key);
    }

    /// Move a message list from one key to another. The new key is written
    /// before the old one is deleted, inside a single critical section, so
    /// no observer ever sees both keys or neither.
    pub fn rekey(&self, from: &CacheKey, to: &CacheKey) -> bool {
        let mut map = self.inner.lock().unwrap();
        let Some(messages) = map.get(from).cloned() else {
            return false;
        };
        map.insert(to.clone(), messages);
        map.remove(from);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(user: &str, thread: ThreadId) -> CacheKey {
        CacheKey::new(user, thread)
    }

    #[test]
    fn test_append_and_read_back() {
        let store = MessageStore::new();
        let k = key("u1", ThreadId::Server(1));

        store.append(&k, Message::user("hello"));
        store.append(&k, Message::assistant("hi"));

        let messages = store.messages(&k);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "hello");
    }

    #[test]
    fn test_same_thread_different_users_are_distinct() {
        let store = MessageStore::new();
        store.append(&key("u1", ThreadId::Server(1)), Message::user("mine"));

        assert!(store.messages(&key("u2", ThreadId::Server(1))).is_empty());
    }

    #[test]
    fn test_rekey_moves_list_and_drops_old_key() {
        let store = MessageStore::new();
        let temp = key("u1", ThreadId::Temp("tmp-a".to_string()));
        let bound = key("u1", ThreadId::Server(9));

        store.append(&temp, Message::user("first"));
        assert!(store.rekey(&temp, &bound));

        assert!(!store.contains(&temp));
        let messages = store.messages(&bound);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "first");
    }

    #[test]
    fn test_rekey_unknown_key_is_a_noop() {
        let store = MessageStore::new();
        let from = key("u1", ThreadId::Temp("tmp-x".to_string()));
        let to = key("u1", ThreadId::Server(1));

        assert!(!store.rekey(&from, &to));
        assert!(!store.contains(&to));
    }

    #[test]
    fn test_replace_and_remove_message() {
        let store = MessageStore::new();
        let k = key("u1", ThreadId::Server(2));
        let placeholder = Message::action("typing");
        let placeholder_id = placeholder.id;
        store.append(&k, placeholder);

        assert!(store.replace_message(&k, placeholder_id, Message::assistant("done")));
        assert_eq!(store.messages(&k)[0].content, "done");

        let answer_id = store.messages(&k)[0].id;
        assert!(store.remove_message(&k, answer_id));
        assert!(store.messages(&k).is_empty());
    }
}
