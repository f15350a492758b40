// Chat history service
//
// The transcript is owned by the node; this service remembers which query
// closed the conversation, fetches the transcript from there at startup,
// and caches it for the session.

use tokio::sync::RwLock;

use super::error::ChatResult;
use crate::models::chat::QueryId;
use crate::models::history::ChatMessage;
use crate::repositories::SessionRepository;
use crate::services::node::SharedNodeApi;

/// Loads and caches the conversation transcript.
pub struct ChatHistory {
    api: SharedNodeApi,
    repo: SessionRepository,
    cache: RwLock<Vec<ChatMessage>>,
}

impl ChatHistory {
    pub fn new(api: SharedNodeApi, repo: SessionRepository) -> Self {
        Self {
            api,
            repo,
            cache: RwLock::new(Vec::new()),
        }
    }

    /// Transcript ending at the last remembered query. Empty when no query
    /// has been remembered; cached after the first fetch.
    pub async fn load(&self) -> ChatResult<Vec<ChatMessage>> {
        {
            let cache = self.cache.read().await;
            if !cache.is_empty() {
                return Ok(cache.clone());
            }
        }

        let Some(last_query) = self.repo.last_query()? else {
            return Ok(Vec::new());
        };

        let history = self.api.history(&last_query).await?;
        log::info!("[ChatHistory] loaded {} transcript entries", history.len());

        let mut cache = self.cache.write().await;
        *cache = history.clone();
        Ok(history)
    }

    /// Record the newest query id; the cached transcript is stale from here.
    pub async fn remember(&self, id: &QueryId) -> ChatResult<()> {
        self.repo.save_last_query(id)?;
        self.cache.write().await.clear();
        Ok(())
    }

    /// Forget the transcript and the remembered query id.
    pub async fn clear(&self) -> ChatResult<()> {
        self.cache.write().await.clear();
        self.repo.clear_last_query()?;
        log::info!("[ChatHistory] history cleared");
        Ok(())
    }
}
