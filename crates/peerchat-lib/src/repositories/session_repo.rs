// Session repository
//
// One JSON document per install holding the id of the last submitted query
// (the transcript anchor) and the node settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::chat::QueryId;
use crate::models::settings::NodeSettings;
use crate::utils::get_app_data_dir;

const STORE_FILENAME: &str = "peerchat.json";

/// Session store error
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not determine application data directory")]
    NoDataDir,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionStore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_query: Option<QueryId>,
    #[serde(default)]
    settings: NodeSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// File-backed access to the session store.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    path: PathBuf,
}

impl SessionRepository {
    /// Repository over the store file in the app data directory.
    pub fn new() -> Result<Self, StoreError> {
        let dir = get_app_data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self {
            path: dir.join(STORE_FILENAME),
        })
    }

    /// Repository over an explicit store path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn read(&self) -> Result<SessionStore, StoreError> {
        if !self.path.exists() {
            return Ok(SessionStore::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write(&self, mut store: SessionStore) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        store.updated_at = Some(Utc::now());
        fs::write(&self.path, serde_json::to_string_pretty(&store)?)?;
        Ok(())
    }

    pub fn last_query(&self) -> Result<Option<QueryId>, StoreError> {
        Ok(self.read()?.last_query)
    }

    pub fn save_last_query(&self, id: &QueryId) -> Result<(), StoreError> {
        let mut store = self.read()?;
        store.last_query = Some(id.clone());
        self.write(store)
    }

    pub fn clear_last_query(&self) -> Result<(), StoreError> {
        let mut store = self.read()?;
        store.last_query = None;
        self.write(store)
    }

    pub fn settings(&self) -> Result<NodeSettings, StoreError> {
        Ok(self.read()?.settings)
    }

    pub fn save_settings(&self, settings: &NodeSettings) -> Result<(), StoreError> {
        let mut store = self.read()?;
        store.settings = settings.clone();
        self.write(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_repo() -> SessionRepository {
        let path = std::env::temp_dir()
            .join(format!("peerchat-test-{}", uuid::Uuid::new_v4()))
            .join(STORE_FILENAME);
        SessionRepository::with_path(path)
    }

    #[test]
    fn test_missing_store_yields_defaults() {
        let repo = temp_repo();
        assert_eq!(repo.last_query().unwrap(), None);
        assert_eq!(repo.settings().unwrap(), NodeSettings::default());
    }

    #[test]
    fn test_last_query_roundtrip() {
        let repo = temp_repo();
        repo.save_last_query(&"q-42".to_string()).unwrap();
        assert_eq!(repo.last_query().unwrap(), Some("q-42".to_string()));

        repo.clear_last_query().unwrap();
        assert_eq!(repo.last_query().unwrap(), None);
    }

    #[test]
    fn test_settings_survive_last_query_updates() {
        let repo = temp_repo();
        let settings = NodeSettings {
            endpoint: "http://10.0.0.2:1733".to_string(),
            ..NodeSettings::default()
        };
        repo.save_settings(&settings).unwrap();
        repo.save_last_query(&"q-1".to_string()).unwrap();

        assert_eq!(repo.settings().unwrap(), settings);
        assert_eq!(repo.last_query().unwrap(), Some("q-1".to_string()));
    }

    #[test]
    fn test_corrupted_store_is_a_parse_error() {
        let repo = temp_repo();
        fs::create_dir_all(repo.path.parent().unwrap()).unwrap();
        fs::write(&repo.path, "{not json").unwrap();
        assert!(matches!(repo.last_query(), Err(StoreError::Parse(_))));
    }
}
