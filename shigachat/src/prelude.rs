//! Prelude module for convenient imports
//!
//! Import everything you need with:
//! ```rust
//! use shigachat::prelude::*;
//! ```

pub use crate::{
    diff_against_successors, diff_lines, AnswerRevision, ApiConfig, ApiError, AppEvent, ChatApi,
    ChatSession, DiffKind, DiffSegment, EventBus, Message, MessageKind, MessageRole,
    NotificationPoller, QuestionBackend, SendOutcome, SessionError, Thread, ThreadId, ThreadState,
};
