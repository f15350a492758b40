// PeerChat shared library
//
// State bookkeeping between a web-node front-end and the locally running
// peer-network node: chat query tracking and polling, node RPC access,
// transcript persistence, balance refresh, and the event bus the display
// layer subscribes to. The host UI wires these services together and
// renders the events they emit.

pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

// Re-export all models for convenience
pub use models::*;

pub use repositories::SessionRepository;
pub use services::balance::BalanceWatcher;
pub use services::chat::{ChatError, ChatHistory, ChatService, ChatTracker};
pub use services::events::EventBus;
pub use services::node::{HttpNodeApi, NodeApi, NodeError, SharedNodeApi};
