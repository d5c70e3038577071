use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shiga_types::{RagReference, Thread, ThreadId};

#[derive(Debug, Serialize)]
pub struct QuestionRequest {
    pub text: String,
    pub language: String,
    /// Omitted for a brand-new thread; the server mints the id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionResponse {
    pub thread_id: i64,
    pub answer: String,
    #[serde(default)]
    pub references: Vec<RagReference>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub thread_id: i64,
    pub title: String,
    pub last_updated: DateTime<Utc>,
}

impl From<ThreadSummary> for Thread {
    fn from(summary: ThreadSummary) -> Self {
        Thread {
            id: ThreadId::Server(summary.thread_id),
            title: summary.title,
            last_updated: summary.last_updated,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListThreadsResponse {
    pub threads: Vec<ThreadSummary>,
}

#[derive(Debug, Serialize)]
pub struct RenameThreadRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct AnswerHistoryResponse {
    pub history: Vec<shiga_types::AnswerRevision>,
}

#[derive(Debug, Deserialize)]
pub struct UnreadCountResponse {
    pub unread: u64,
}

/// Error body shape used by the backend for non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_request_omits_missing_thread_id() {
        let req = QuestionRequest {
            text: "how do I register my address?".to_string(),
            language: "en".to_string(),
            thread_id: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("thread_id"));
    }

    #[test]
    fn test_question_response_defaults_references() {
        let resp: QuestionResponse =
            serde_json::from_str(r#"{"thread_id":3,"answer":"Go to the city office."}"#).unwrap();
        assert_eq!(resp.thread_id, 3);
        assert!(resp.references.is_empty());
    }

    #[test]
    fn test_thread_summary_converts_to_thread() {
        let summary = ThreadSummary {
            thread_id: 11,
            title: "Garbage collection day".to_string(),
            last_updated: Utc::now(),
        };
        let thread: Thread = summary.into();
        assert_eq!(thread.id, ThreadId::Server(11));
    }
}
