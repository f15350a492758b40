// Node connection settings
// Serde-level defaults keep partially written stores loadable.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default node RPC endpoint
fn default_endpoint() -> String {
    String::from("http://127.0.0.1:1733")
}

/// Default delay between poll sweeps in milliseconds
fn default_poll_interval_ms() -> u64 {
    1000
}

/// Default balance refresh interval in seconds
fn default_balance_refresh_secs() -> u64 {
    60
}

/// Connection and scheduling settings for the local node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodeSettings {
    /// Base URL of the node RPC
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Delay between chat poll sweeps
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Delay between periodic balance refreshes
    #[serde(default = "default_balance_refresh_secs")]
    pub balance_refresh_secs: u64,
}

impl Default for NodeSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            poll_interval_ms: default_poll_interval_ms(),
            balance_refresh_secs: default_balance_refresh_secs(),
        }
    }
}

impl NodeSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn balance_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.balance_refresh_secs)
    }
}
