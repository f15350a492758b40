// Data models module
// Wire types shared with the local node plus the view/event types the
// display layer consumes

pub mod chat;
pub mod events;
pub mod history;
pub mod settings;

// Re-export all models for convenience
pub use chat::*;
pub use events::*;
pub use history::*;
pub use settings::*;
