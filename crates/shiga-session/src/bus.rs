use tokio::sync::broadcast;

use shiga_types::AppEvent;

const DEFAULT_CAPACITY: usize = 64;

/// In-process publish/subscribe channel for [`AppEvent`]s.
///
/// Every UI surface that tracks session state (chat view, sidebar,
/// notification badge) holds its own receiver. Publishing never blocks;
/// an event with no subscribers is simply dropped.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: AppEvent) {
        tracing::debug!(?event, "Publishing event");
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
