// Repository Layer
// Data access for the on-disk session store

pub mod session_repo;

pub use session_repo::{SessionRepository, StoreError};
