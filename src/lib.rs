//! Puzzle Quest - Telegram bot for a QR scavenger hunt
//!
//! Players scan QR codes that open the bot with `/start <code>`. Ten codes unlock
//! the ten pieces of a picture; decoy codes are scattered around too. Progress is
//! kept per user in a single JSON ledger file.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors and logging
//! - `quest`: pieces, code classification, progress summary and the command router
//! - `storage`: the ledger file and image lookup
//! - `telegram`: teloxide dispatcher schema delivering router replies

pub mod cli;
pub mod core;
pub mod quest;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult, QuestConfig};
pub use quest::{CommandRequest, CommandResponse, CommandRouter, QuestRouter, Reply};
pub use storage::{ImageLocator, ProgressLedger, ProgressStore, StorageError};
