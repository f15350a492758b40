// Event bus
//
// Publish mechanism between the services and the display layer. Events fan
// out over a broadcast channel; a subscriber that falls behind sees
// `RecvError::Lagged` and can resubscribe.

use tokio::sync::broadcast;

use crate::models::events::ChatEvent;

const CHANNEL_CAPACITY: usize = 64;

/// Broadcast sink for display-layer notifications.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ChatEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// New receiver observing every event emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.tx.subscribe()
    }

    /// Publish an event. Never fails; without subscribers the event is
    /// dropped.
    pub fn emit(&self, event: ChatEvent) {
        let name = event.name();
        if self.tx.send(event).is_err() {
            log::debug!("[EventBus] dropped {} (no subscribers)", name);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.emit(ChatEvent::BalanceUpdated { balance: 9 });

        let event = rx.try_recv().unwrap();
        assert_eq!(event, ChatEvent::BalanceUpdated { balance: 9 });
    }

    #[tokio::test]
    async fn test_emit_without_subscribers_is_silent() {
        let bus = EventBus::new();
        assert_eq!(bus.subscriber_count(), 0);
        bus.emit(ChatEvent::TrackingCleared);
    }

    #[tokio::test]
    async fn test_each_subscriber_sees_every_event() {
        let bus = EventBus::new();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.emit(ChatEvent::TrackingCleared);

        assert_eq!(first.try_recv().unwrap(), ChatEvent::TrackingCleared);
        assert_eq!(second.try_recv().unwrap(), ChatEvent::TrackingCleared);
    }
}
