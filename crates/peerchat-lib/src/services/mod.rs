// Services module
// Business logic and background services

pub mod balance;
pub mod chat;
pub mod events;
pub mod node;

pub use balance::BalanceWatcher;
pub use chat::{ChatHistory, ChatService, ChatTracker};
pub use events::EventBus;
pub use node::{HttpNodeApi, NodeApi, SharedNodeApi};
