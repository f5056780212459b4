use once_cell::sync::Lazy;
use secrecy::SecretString;
use std::env;
use std::path::PathBuf;

use crate::core::error::{AppError, AppResult};

/// Configuration constants for the bot
/// Ledger file path
/// Read from LEDGER_PATH environment variable
/// Default: progress.json
pub static LEDGER_PATH: Lazy<String> =
    Lazy::new(|| env::var("LEDGER_PATH").unwrap_or_else(|_| "progress.json".to_string()));

/// Root directory of the quest images
/// Expected layout: `<dir>/pieces/piece<N>.<ext>` and `<dir>/full/full.<ext>`
/// Read from IMAGES_DIR environment variable
/// Default: images
pub static IMAGES_DIR: Lazy<String> = Lazy::new(|| env::var("IMAGES_DIR").unwrap_or_else(|_| "images".to_string()));

/// Image file extension (without the dot)
/// Read from IMAGE_EXT environment variable
/// Default: jpg
pub static IMAGE_EXT: Lazy<String> = Lazy::new(|| {
    env::var("IMAGE_EXT")
        .map(|ext| ext.trim_start_matches('.').to_string())
        .unwrap_or_else(|_| "jpg".to_string())
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: quest.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "quest.log".to_string()));

/// Custom Bot API server URL (local Bot API server)
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| env::var("BOT_API_URL").ok());

/// Environment variables checked for the bot token, in order
pub const TOKEN_VARS: [&str; 3] = ["TOKEN", "BOT_TOKEN", "TELOXIDE_TOKEN"];

/// Reads the bot token from the environment.
///
/// The token is required: the bot must not start without it. Empty values count as
/// missing.
///
/// # Returns
/// * `Ok(SecretString)` - Token found
/// * `Err(AppError::Config)` - None of [`TOKEN_VARS`] is set
pub fn require_bot_token() -> AppResult<SecretString> {
    TOKEN_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .map(SecretString::from)
        .ok_or_else(|| AppError::Config(format!("bot token is not set (checked {})", TOKEN_VARS.join(", "))))
}

/// Network configuration
pub mod network {
    use std::time::Duration;

    /// Request timeout for Bot API calls (in seconds)
    /// Long polling itself waits up to 10 seconds, photos are small
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Paths the quest reads and writes, injected into the store and the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestConfig {
    pub ledger_path: PathBuf,
    pub images_dir: PathBuf,
    pub image_ext: String,
}

impl QuestConfig {
    /// Builds the configuration from the process environment
    pub fn from_env() -> Self {
        Self {
            ledger_path: PathBuf::from(LEDGER_PATH.as_str()),
            images_dir: PathBuf::from(IMAGES_DIR.as_str()),
            image_ext: IMAGE_EXT.clone(),
        }
    }
}
