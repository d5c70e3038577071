pub mod events;
pub mod message;
pub mod revision;
pub mod thread;

pub use events::AppEvent;
pub use message::{Message, MessageKind, MessageRole, RagReference};
pub use revision::AnswerRevision;
pub use thread::{Thread, ThreadId};
