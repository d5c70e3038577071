//! # ShigaChat client core
//!
//! Client-side engine for the ShigaChat multilingual Q&A support service:
//! users ask free-text questions that a retrieval backend answers, browse
//! their conversation threads, and admins review answer edit history.
//!
//! ## Overview
//!
//! This workspace is the non-UI core of that client:
//!
//! - **Thread reconciliation**: a conversation starts on a client-minted
//!   temporary id; the first successful exchange atomically rebinds every
//!   piece of local state (message cache, current-thread pointer, share
//!   link) to the server-assigned id.
//! - **Optimistic sends** with rollback: the user message and a typing
//!   placeholder appear immediately, and a failed request removes exactly
//!   the placeholder while surfacing the error.
//! - **Edit-history diffing**: a line-level LCS diff renders what each
//!   answer revision changed relative to the version that replaced it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shigachat::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ApiConfig::builder()
//!         .base_url("https://chat.example.org/api")
//!         .bearer_token(std::env::var("SHIGACHAT_TOKEN")?)
//!         .language("en")
//!         .build()?;
//!     let api = Arc::new(ChatApi::new(config)?);
//!
//!     let session = ChatSession::new(api, "user-1");
//!     let outcome = session.send("How do I register my address?").await?;
//!
//!     println!("thread {}: {}", outcome.thread, outcome.answer.content);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The workspace is organized into focused crates:
//!
//! - **`shiga-types`**: domain types and the application event model
//! - **`shiga-diff`**: line-level LCS diff for answer edit history
//! - **`shiga-api`**: REST client for the retrieval backend
//! - **`shiga-session`**: thread reconciler, message cache, event bus,
//!   notification poller

pub mod prelude;

pub use shiga_types::{
    AnswerRevision, AppEvent, Message, MessageKind, MessageRole, RagReference, Thread, ThreadId,
};

pub use shiga_diff::{diff_against_successors, diff_lines, DiffKind, DiffSegment, RevisionDiff};

pub use shiga_api::{
    ApiConfig, ApiConfigBuilder, ApiError, ChatApi, QuestionBackend, QuestionResponse,
    ThreadSummary,
};

pub use shiga_session::{
    AttemptState, CacheKey, ChatSession, EventBus, MessageStore, NotificationPoller, SendAttempt,
    SendOutcome, SessionError, ThreadState,
};
