// Account balance watcher
//
// Refreshes the balance on demand and on a fixed interval. The node RPC is
// not safe to hammer from overlapping refreshes (a click during the
// periodic tick), so callers serialize behind an async mutex.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::models::events::ChatEvent;
use crate::services::events::EventBus;
use crate::services::node::{NodeResult, SharedNodeApi};

/// Default delay between periodic refreshes.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Polls the account balance and publishes updates.
pub struct BalanceWatcher {
    api: SharedNodeApi,
    events: EventBus,
    guard: Mutex<()>,
    refresh_interval: Duration,
}

impl BalanceWatcher {
    pub fn new(api: SharedNodeApi, events: EventBus) -> Self {
        Self {
            api,
            events,
            guard: Mutex::new(()),
            refresh_interval: REFRESH_INTERVAL,
        }
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Fetch the balance and publish it. Concurrent callers wait their turn
    /// instead of racing the node.
    pub async fn refresh(&self) -> NodeResult<u64> {
        let _guard = self.guard.lock().await;
        let balance = self.api.balance().await?;
        log::debug!("[BalanceWatcher] balance: {}", balance);
        self.events.emit(ChatEvent::BalanceUpdated { balance });
        Ok(balance)
    }

    /// Spawn the periodic refresh loop. Failures are logged and the loop
    /// keeps going.
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        let interval = self.refresh_interval;
        tokio::spawn(async move {
            loop {
                if let Err(err) = self.refresh().await {
                    log::warn!("[BalanceWatcher] refresh failed: {}", err);
                }
                tokio::time::sleep(interval).await;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::{QueryId, QueryStatus};
    use crate::models::history::ChatMessage;
    use crate::services::node::{NodeApi, NodeError};
    use async_trait::async_trait;

    struct MockApi {
        balance: Result<u64, String>,
    }

    #[async_trait]
    impl NodeApi for MockApi {
        async fn ask(&self, _question: &str) -> NodeResult<QueryId> {
            Ok("q-1".to_string())
        }

        async fn status(&self, _id: &QueryId) -> NodeResult<QueryStatus> {
            Ok(QueryStatus { response: vec![] })
        }

        async fn history(&self, _id: &QueryId) -> NodeResult<Vec<ChatMessage>> {
            Ok(vec![])
        }

        async fn balance(&self) -> NodeResult<u64> {
            self.balance
                .clone()
                .map_err(|message| NodeError::ApiError(message))
        }
    }

    #[tokio::test]
    async fn test_refresh_emits_balance() {
        let events = EventBus::new();
        let mut rx = events.subscribe();
        let watcher = BalanceWatcher::new(Arc::new(MockApi { balance: Ok(250) }), events);

        assert_eq!(watcher.refresh().await.unwrap(), 250);
        assert_eq!(
            rx.try_recv().unwrap(),
            ChatEvent::BalanceUpdated { balance: 250 }
        );
    }

    #[tokio::test]
    async fn test_failed_refresh_emits_nothing() {
        let events = EventBus::new();
        let mut rx = events.subscribe();
        let watcher = BalanceWatcher::new(
            Arc::new(MockApi {
                balance: Err("account not found".to_string()),
            }),
            events,
        );

        assert!(watcher.refresh().await.is_err());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_spawned_loop_publishes_periodically() {
        let events = EventBus::new();
        let mut rx = events.subscribe();
        let watcher = Arc::new(
            BalanceWatcher::new(Arc::new(MockApi { balance: Ok(7) }), events)
                .with_refresh_interval(Duration::from_millis(10)),
        );

        let handle = watcher.spawn();
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.abort();

        let mut updates = 0;
        while let Ok(event) = rx.try_recv() {
            assert_eq!(event, ChatEvent::BalanceUpdated { balance: 7 });
            updates += 1;
        }
        assert!(updates >= 2);
    }
}
