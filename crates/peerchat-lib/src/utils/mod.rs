// Utilities module

use std::path::PathBuf;

/// App identifier for the data directory
pub const APP_IDENTIFIER: &str = "com.peerchat.PeerChat";

/// Application data directory, if the platform exposes one.
pub fn get_app_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(APP_IDENTIFIER))
}
