//! Ledger persistence and image lookup

pub mod images;
pub mod ledger;
pub mod store;

// Re-exports for convenience
pub use images::ImageLocator;
pub use ledger::{ProgressLedger, StorageError};
pub use store::ProgressStore;
