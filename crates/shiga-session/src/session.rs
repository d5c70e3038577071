use std::sync::{Arc, Mutex};

use shiga_api::QuestionBackend;
use shiga_types::{AppEvent, Message, Thread, ThreadId};

use crate::bus::EventBus;
use crate::error::{Result, SessionError};
use crate::state::{AttemptState, SendAttempt, ThreadState};
use crate::store::{CacheKey, MessageStore};

const TYPING_PLACEHOLDER: &str = "…";

/// Result of a successful send.
#[derive(Debug, Clone)]
pub struct SendOutcome {
    /// The thread the exchange now lives under. Always a server id once the
    /// backend has answered, even if the send started on a temporary id.
    pub thread: ThreadId,
    pub answer: Message,
}

struct SessionInner {
    user_id: String,
    current: ThreadState,
    attempt: Option<SendAttempt>,
}

/// Client-side conversation state for one user.
///
/// Owns the thread lifecycle (`NoThread -> Pending -> Bound`), the message
/// cache, and the optimistic-send bookkeeping. The inner lock is never held
/// across an await: state is updated before dispatching a request and again
/// when the response lands, each time as one critical section, so no
/// interleaved callback can observe a half-migrated cache.
pub struct ChatSession<B> {
    backend: Arc<B>,
    store: MessageStore,
    bus: EventBus,
    inner: Mutex<SessionInner>,
}

impl<B: QuestionBackend> ChatSession<B> {
    pub fn new(backend: Arc<B>, user_id: impl Into<String>) -> Self {
        Self {
            backend,
            store: MessageStore::new(),
            bus: EventBus::default(),
            inner: Mutex::new(SessionInner {
                user_id: user_id.into(),
                current: ThreadState::NoThread,
                attempt: None,
            }),
        }
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn current_thread(&self) -> ThreadState {
        self.inner.lock().unwrap().current.clone()
    }

    /// Snapshot of a thread's cached messages.
    pub fn messages(&self, thread: &ThreadId) -> Vec<Message> {
        let key = self.key_for(thread);
        self.store.messages(&key)
    }

    /// Error recorded by the most recent send attempt, if it failed.
    pub fn last_error(&self) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner.attempt.as_ref().and_then(|a| a.error.clone())
    }

    /// Shareable deep link for the current thread. Never exposes a
    /// temporary id once the thread is bound.
    pub fn share_link(&self) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner
            .current
            .thread_id()
            .map(|id| format!("?thread={}", id))
    }

    /// Send a question on the current thread, creating one if none is
    /// selected. Only one send may be in flight at a time.
    pub async fn send(&self, text: &str) -> Result<SendOutcome> {
        let (attempt_thread, wire_id, key, placeholder_id) = self.begin_attempt(text)?;

        let result = self.backend.send_question(wire_id, text).await;

        // Critical section: everything between receiving the response and
        // returning is applied under the session lock, keyed off the
        // attempt's own thread. A response for a thread the user has
        // navigated away from still completes its own bookkeeping and
        // cannot touch the currently displayed thread.
        let mut inner = self.inner.lock().unwrap();
        match result {
            Ok(response) => {
                let final_thread = if attempt_thread.is_temp() {
                    let server = ThreadId::Server(response.thread_id);
                    let new_key = CacheKey::new(&inner.user_id, server.clone());
                    self.store.rekey(&key, &new_key);
                    if inner.current == ThreadState::Pending(attempt_thread.clone()) {
                        inner.current = ThreadState::Bound(server.clone());
                    }
                    self.bus.publish(AppEvent::ThreadBound {
                        temp: attempt_thread.clone(),
                        server: server.clone(),
                    });
                    server
                } else {
                    attempt_thread.clone()
                };

                let final_key = CacheKey::new(&inner.user_id, final_thread.clone());
                let answer =
                    Message::assistant(response.answer).with_references(response.references);
                self.store
                    .replace_message(&final_key, placeholder_id, answer.clone());

                if let Some(attempt) = inner.attempt.as_mut() {
                    attempt.state = AttemptState::Succeeded;
                }

                Ok(SendOutcome {
                    thread: final_thread,
                    answer,
                })
            }
            Err(err) => {
                // Roll back the placeholder, keep the user's message, leave
                // the thread in its pre-attempt state. No partial commits.
                self.store.remove_message(&key, placeholder_id);
                if let Some(attempt) = inner.attempt.as_mut() {
                    attempt.state = AttemptState::Failed;
                    attempt.error = Some(err.to_string());
                }
                tracing::warn!(thread = %attempt_thread, "Question send failed: {}", err);
                Err(SessionError::Api(err))
            }
        }
    }

    /// First half of a send: allocate the thread if needed, add the
    /// optimistic entries, and record the attempt. One critical section.
    fn begin_attempt(
        &self,
        text: &str,
    ) -> Result<(ThreadId, Option<i64>, CacheKey, uuid::Uuid)> {
        let mut inner = self.inner.lock().unwrap();

        if inner.attempt.as_ref().is_some_and(|a| a.is_sending()) {
            return Err(SessionError::SendInFlight);
        }

        let attempt_thread = match &inner.current {
            ThreadState::NoThread => {
                let temp = ThreadId::fresh_temp();
                inner.current = ThreadState::Pending(temp.clone());
                self.bus.publish(AppEvent::ThreadSelected { id: temp.clone() });
                temp
            }
            ThreadState::Pending(id) | ThreadState::Bound(id) => id.clone(),
        };

        // Temp ids are never sent as an update target.
        let wire_id = attempt_thread.as_server();
        let key = CacheKey::new(&inner.user_id, attempt_thread.clone());

        let user_message = Message::user(text);
        let placeholder = Message::action(TYPING_PLACEHOLDER);
        let user_message_id = user_message.id;
        let placeholder_id = placeholder.id;
        self.store.append(&key, user_message);
        self.store.append(&key, placeholder);

        let mut attempt = SendAttempt::new(attempt_thread.clone(), user_message_id, placeholder_id);
        attempt.state = AttemptState::Sending;
        inner.attempt = Some(attempt);

        Ok((attempt_thread, wire_id, key, placeholder_id))
    }

    /// Switch the active thread. Does not disturb an in-flight send; its
    /// completion keys off the attempt's own thread id.
    pub fn select_thread(&self, id: ThreadId) {
        let mut inner = self.inner.lock().unwrap();
        inner.current = if id.is_temp() {
            ThreadState::Pending(id.clone())
        } else {
            ThreadState::Bound(id.clone())
        };
        self.bus.publish(AppEvent::ThreadSelected { id });
    }

    /// Start over with no thread selected.
    pub fn new_chat(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.current = ThreadState::NoThread;
        self.bus.publish(AppEvent::ChatCleared);
    }

    /// Delete a thread. Server threads are deleted remotely first; the
    /// local cache is dropped only once that succeeds. Temporary threads
    /// exist nowhere but this session and are deleted locally.
    pub async fn delete_thread(&self, id: ThreadId) -> Result<()> {
        if let Some(server_id) = id.as_server() {
            self.backend.delete_thread(server_id).await?;
        }

        let mut inner = self.inner.lock().unwrap();
        let key = CacheKey::new(&inner.user_id, id.clone());
        self.store.remove(&key);
        if inner.current.thread_id() == Some(&id) {
            inner.current = ThreadState::NoThread;
        }
        self.bus.publish(AppEvent::ThreadDeleted { id });
        Ok(())
    }

    /// Fetch the user's thread list, e.g. to refresh a sidebar after a
    /// bind.
    pub async fn refresh_threads(&self) -> Result<Vec<Thread>> {
        let summaries = self.backend.list_threads().await?;
        Ok(summaries.into_iter().map(Thread::from).collect())
    }

    fn key_for(&self, thread: &ThreadId) -> CacheKey {
        let inner = self.inner.lock().unwrap();
        CacheKey::new(&inner.user_id, thread.clone())
    }
}
