// Chat service facade
//
// Composes the tracker and the history service the way the host UI uses
// them: asking remembers the query for transcript resume, clearing empties
// both the transcript and the tracking set.

use std::sync::Arc;
use tokio::task::JoinHandle;

use super::error::ChatResult;
use super::history::ChatHistory;
use super::tracker::ChatTracker;
use crate::models::chat::QueryId;
use crate::models::history::ChatMessage;
use crate::repositories::SessionRepository;
use crate::services::events::EventBus;
use crate::services::node::SharedNodeApi;

pub struct ChatService {
    tracker: Arc<ChatTracker>,
    history: ChatHistory,
}

impl ChatService {
    pub fn new(api: SharedNodeApi, events: EventBus, repo: SessionRepository) -> Self {
        Self {
            tracker: Arc::new(ChatTracker::new(api.clone(), events)),
            history: ChatHistory::new(api, repo),
        }
    }

    pub fn tracker(&self) -> &Arc<ChatTracker> {
        &self.tracker
    }

    /// Submit a question; the assigned id becomes the transcript anchor.
    pub async fn ask(&self, question: &str) -> ChatResult<QueryId> {
        let id = self.tracker.submit(question).await?;
        self.history.remember(&id).await?;
        Ok(id)
    }

    /// Drop the transcript and every tracked query.
    pub async fn clear(&self) -> ChatResult<()> {
        self.history.clear().await?;
        self.tracker.clear().await;
        Ok(())
    }

    /// Transcript for startup rendering.
    pub async fn transcript(&self) -> ChatResult<Vec<ChatMessage>> {
        self.history.load().await
    }

    /// Start the poll loop.
    pub fn spawn_poller(&self) -> JoinHandle<()> {
        Arc::clone(&self.tracker).spawn()
    }
}
