use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use shiga_api::{ApiError, QuestionBackend};
use shiga_types::AppEvent;

use crate::bus::EventBus;

/// Background task that keeps the unread-notification badge current.
///
/// Polls the backend on a fixed interval and publishes
/// [`AppEvent::NotificationCount`] when the count changes. A 401 means the
/// session is over: the poller publishes [`AppEvent::SessionExpired`] and
/// stops. Other errors are logged and the next tick retries.
pub struct NotificationPoller<B> {
    backend: Arc<B>,
    bus: EventBus,
    interval: Duration,
}

impl<B: QuestionBackend + 'static> NotificationPoller<B> {
    pub fn new(backend: Arc<B>, bus: EventBus, interval: Duration) -> Self {
        Self {
            backend,
            bus,
            interval,
        }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }

    async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        let mut last: Option<u64> = None;

        loop {
            ticker.tick().await;

            match self.backend.unread_count().await {
                Ok(count) => {
                    if last != Some(count) {
                        last = Some(count);
                        self.bus.publish(AppEvent::NotificationCount { unread: count });
                    }
                }
                Err(ApiError::Unauthorized) => {
                    self.bus.publish(AppEvent::SessionExpired);
                    break;
                }
                Err(err) => {
                    tracing::warn!("Notification poll failed: {}", err);
                }
            }
        }
    }
}
