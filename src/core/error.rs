use thiserror::Error;

use crate::storage::StorageError;

/// Centralized error types for the application
///
/// Everything a command can fail with ends up here. Code validation problems are
/// not errors at this level: the router turns them into replies.
///
/// # Example
///
/// ```no_run
/// use puzzle_quest::core::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Ledger file could not be read, parsed or written
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Missing or invalid process configuration (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
