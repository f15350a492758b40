// Chat query tracker
//
// Owns the set of in-flight queries and drives the poll loop that turns the
// node's raw per-peer results into display notifications. One logical
// poller; submit/clear interleave between fetches, never during one.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::error::{ChatError, ChatResult};
use crate::models::chat::{PeerReply, QueryId};
use crate::models::events::ChatEvent;
use crate::services::events::EventBus;
use crate::services::node::SharedNodeApi;

/// Default delay between poll sweeps.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Tracks in-flight queries and polls the node for their progress.
pub struct ChatTracker {
    api: SharedNodeApi,
    events: EventBus,
    tracking: RwLock<Vec<QueryId>>,
    poll_interval: Duration,
}

impl ChatTracker {
    pub fn new(api: SharedNodeApi, events: EventBus) -> Self {
        Self {
            api,
            events,
            tracking: RwLock::new(Vec::new()),
            poll_interval: POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Ids currently being polled, in tracking order.
    pub async fn tracked(&self) -> Vec<QueryId> {
        self.tracking.read().await.clone()
    }

    /// Submit a question and start tracking the assigned query id.
    pub async fn submit(&self, question: &str) -> ChatResult<QueryId> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ChatError::EmptyQuestion);
        }

        let id = self.api.ask(question).await?;
        {
            let mut tracking = self.tracking.write().await;
            if tracking.contains(&id) {
                // the node assigns ids; a repeat is its inconsistency, not ours
                log::warn!("[ChatTracker] node returned an already tracked id: {}", id);
            } else {
                tracking.push(id.clone());
            }
        }

        log::info!("[ChatTracker] tracking query {}", id);
        self.events.emit(ChatEvent::QueryStarted {
            id: id.clone(),
            text: question.to_string(),
        });
        Ok(id)
    }

    /// Drop every tracked query. In-flight fetches for dropped ids resolve
    /// unobserved.
    pub async fn clear(&self) {
        self.tracking.write().await.clear();
        log::info!("[ChatTracker] tracking cleared");
        self.events.emit(ChatEvent::TrackingCleared);
    }

    /// One sweep over every tracked query.
    ///
    /// A failed fetch leaves its query tracked and never stops the sweep for
    /// the remaining ids.
    pub async fn poll_cycle(&self) {
        let snapshot = self.tracking.read().await.clone();
        for id in snapshot {
            // clear() may have run since the snapshot
            if !self.is_tracked(&id).await {
                continue;
            }

            let status = match self.api.status(&id).await {
                Ok(status) => status,
                Err(err) => {
                    log::warn!("[ChatTracker] status fetch failed for {}: {}", id, err);
                    continue;
                }
            };

            let finished = status.response.iter().filter(|r| r.is_terminal()).count();
            let complete = !status.response.is_empty() && finished == status.response.len();
            let replies = merge_replies(status.response.iter().map(PeerReply::from).collect());

            // a clear() during the fetch makes the late result unobservable
            if !self.is_tracked(&id).await {
                continue;
            }

            if complete {
                self.tracking.write().await.retain(|tracked| tracked != &id);
                log::info!("[ChatTracker] query {} finished with {} replies", id, replies.len());
                self.events.emit(ChatEvent::QueryFinished { id, replies });
            } else {
                self.events.emit(ChatEvent::QueryResponse { id, replies });
            }
        }
    }

    /// Spawn the self-rescheduling poll loop. Each sweep reschedules
    /// unconditionally, even over an empty tracking set.
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        let interval = self.poll_interval;
        tokio::spawn(async move {
            loop {
                self.poll_cycle().await;
                tokio::time::sleep(interval).await;
            }
        })
    }

    async fn is_tracked(&self, id: &QueryId) -> bool {
        self.tracking.read().await.iter().any(|tracked| tracked == id)
    }
}

/// Collapse duplicate peer entries, keeping the newest per node id.
fn merge_replies(replies: Vec<PeerReply>) -> Vec<PeerReply> {
    let mut merged: Vec<PeerReply> = Vec::with_capacity(replies.len());
    for reply in replies {
        match merged.iter_mut().find(|m| m.node_id == reply.node_id) {
            Some(existing) => {
                log::warn!("[ChatTracker] duplicate peer entry for {}", reply.node_id);
                *existing = reply;
            }
            None => merged.push(reply),
        }
    }
    merged
}
