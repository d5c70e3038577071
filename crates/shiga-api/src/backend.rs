use async_trait::async_trait;

use shiga_types::AnswerRevision;

use crate::error::Result;
use crate::types::{QuestionResponse, ThreadSummary};

/// Operations the ShigaChat backend exposes to the client.
///
/// The session layer depends on this trait rather than on the concrete HTTP
/// client so its state transitions can be exercised against a fake.
#[async_trait]
pub trait QuestionBackend: Send + Sync {
    /// Submit a question. `thread_id` is `None` for a brand-new conversation;
    /// the response always carries the server-assigned thread id.
    async fn send_question(&self, thread_id: Option<i64>, text: &str) -> Result<QuestionResponse>;

    /// List the caller's threads, most recently updated first.
    async fn list_threads(&self) -> Result<Vec<ThreadSummary>>;

    /// Rename a thread.
    async fn rename_thread(&self, thread_id: i64, title: &str) -> Result<()>;

    /// Delete a thread and its messages.
    async fn delete_thread(&self, thread_id: i64) -> Result<()>;

    /// Edit history for an answer in the given language, oldest first.
    async fn answer_history(&self, answer_id: i64, language: &str) -> Result<Vec<AnswerRevision>>;

    /// Number of unread notifications for the caller.
    async fn unread_count(&self) -> Result<u64>;
}
