// HTTP node API implementation
//
// Talks to the node RPC over plain JSON. The node holds the private key and
// signs queries itself; this client only moves payloads.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use super::error::{NodeError, NodeResult};
use super::NodeApi;
use crate::models::chat::{QueryId, QueryStatus};
use crate::models::history::ChatMessage;
use crate::models::settings::NodeSettings;
use async_trait::async_trait;

/// HTTP client for the local node RPC.
pub struct HttpNodeApi {
    endpoint: String,
    client: Client,
}

impl HttpNodeApi {
    /// Build a client for the given RPC endpoint.
    pub fn new(endpoint: &str) -> NodeResult<Self> {
        Url::parse(endpoint).map_err(|e| NodeError::InvalidEndpoint(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client: Client::new(),
        })
    }

    pub fn from_settings(settings: &NodeSettings) -> NodeResult<Self> {
        Self::new(&settings.endpoint)
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    async fn get_json<R>(&self, path: &str) -> NodeResult<R>
    where
        R: for<'de> Deserialize<'de>,
    {
        let response = self.client.get(self.api_url(path)).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NodeError::ApiError(format!(
                "node RPC error ({}): {}",
                status, body
            )));
        }
        Ok(response.json().await?)
    }
}

// Node RPC request types
#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct AccountInfo {
    balance: u64,
}

#[async_trait]
impl NodeApi for HttpNodeApi {
    async fn ask(&self, question: &str) -> NodeResult<QueryId> {
        let response = self
            .client
            .post(self.api_url("/query"))
            .json(&AskRequest { question })
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NodeError::ApiError(format!(
                "node RPC error ({}): {}",
                status, body
            )));
        }
        Ok(response.json().await?)
    }

    async fn status(&self, id: &QueryId) -> NodeResult<QueryStatus> {
        self.get_json(&format!("/answer/{}", id)).await
    }

    async fn history(&self, id: &QueryId) -> NodeResult<Vec<ChatMessage>> {
        self.get_json(&format!("/history/{}", id)).await
    }

    async fn balance(&self) -> NodeResult<u64> {
        let account: AccountInfo = self.get_json("/account").await?;
        Ok(account.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_endpoint_rejected() {
        assert!(matches!(
            HttpNodeApi::new("not a url"),
            Err(NodeError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_api_url_strips_trailing_slash() {
        let api = HttpNodeApi::new("http://127.0.0.1:1733/").unwrap();
        assert_eq!(api.api_url("/answer/abc"), "http://127.0.0.1:1733/answer/abc");
    }

    #[test]
    fn test_from_settings_uses_endpoint() {
        let settings = NodeSettings::default();
        assert!(HttpNodeApi::from_settings(&settings).is_ok());
    }
}
