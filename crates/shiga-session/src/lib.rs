pub mod bus;
pub mod error;
pub mod poller;
pub mod session;
pub mod state;
pub mod store;

pub use bus::EventBus;
pub use error::{Result, SessionError};
pub use poller::NotificationPoller;
pub use session::{ChatSession, SendOutcome};
pub use state::{AttemptState, SendAttempt, ThreadState};
pub use store::{CacheKey, MessageStore};
