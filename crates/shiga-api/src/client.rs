use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;

use shiga_types::AnswerRevision;

use crate::backend::QuestionBackend;
use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::types::{
    AnswerHistoryResponse, ErrorBody, ListThreadsResponse, QuestionRequest, QuestionResponse,
    RenameThreadRequest, ThreadSummary, UnreadCountResponse,
};

/// HTTP client for the ShigaChat backend.
///
/// All HTTP details (paths, auth header, status mapping) live here; the
/// session layer only sees the [`QuestionBackend`] trait.
#[derive(Clone)]
pub struct ChatApi {
    http_client: reqwest::Client,
    base_url: String,
    language: String,
}

impl ChatApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.bearer_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ApiError::Config("Invalid bearer token format".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url,
            language: config.language,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map non-2xx statuses to typed errors, pulling the backend's
    /// `{"detail": ...}` message out of the body when present.
    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.detail)
            .unwrap_or(body);

        tracing::error!("Backend request failed: status={}, detail={}", status, message);

        if status == StatusCode::UNAUTHORIZED {
            Err(ApiError::Unauthorized)
        } else {
            Err(ApiError::Status {
                code: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl QuestionBackend for ChatApi {
    async fn send_question(&self, thread_id: Option<i64>, text: &str) -> Result<QuestionResponse> {
        tracing::debug!(?thread_id, "Sending question");

        let request = QuestionRequest {
            text: text.to_string(),
            language: self.language.clone(),
            thread_id,
        };

        let response = self
            .http_client
            .post(self.url("/question"))
            .json(&request)
            .send()
            .await?;

        Ok(self.check(response).await?.json().await?)
    }

    async fn list_threads(&self) -> Result<Vec<ThreadSummary>> {
        let response = self.http_client.get(self.url("/threads")).send().await?;

        let list: ListThreadsResponse = self.check(response).await?.json().await?;
        Ok(list.threads)
    }

    async fn rename_thread(&self, thread_id: i64, title: &str) -> Result<()> {
        let response = self
            .http_client
            .put(self.url(&format!("/threads/{}/title", thread_id)))
            .json(&RenameThreadRequest {
                title: title.to_string(),
            })
            .send()
            .await?;

        self.check(response).await?;
        Ok(())
    }

    async fn delete_thread(&self, thread_id: i64) -> Result<()> {
        tracing::debug!(thread_id, "Deleting thread");

        let response = self
            .http_client
            .delete(self.url(&format!("/threads/{}", thread_id)))
            .send()
            .await?;

        self.check(response).await?;
        Ok(())
    }

    async fn answer_history(&self, answer_id: i64, language: &str) -> Result<Vec<AnswerRevision>> {
        let response = self
            .http_client
            .get(self.url(&format!("/answers/{}/history", answer_id)))
            .query(&[("language", language)])
            .send()
            .await?;

        let history: AnswerHistoryResponse = self.check(response).await?.json().await?;
        Ok(history.history)
    }

    async fn unread_count(&self) -> Result<u64> {
        let response = self
            .http_client
            .get(self.url("/notifications/unread"))
            .send()
            .await?;

        let count: UnreadCountResponse = self.check(response).await?.json().await?;
        Ok(count.unread)
    }
}
