// Chat Service Module
//
// The chat side of the library:
// - query tracking and the poll loop that turns raw peer results into
//   display notifications
// - transcript loading and last-query persistence
// - a facade composing the two the way the host UI uses them

pub mod error;
pub mod history;
pub mod service;
pub mod tracker;

pub use error::{ChatError, ChatResult};
pub use history::ChatHistory;
pub use service::ChatService;
pub use tracker::ChatTracker;
