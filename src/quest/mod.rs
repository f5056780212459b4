//! Quest rules: pieces, codes, progress summary and command routing

pub mod code;
pub mod pieces;
pub mod progress;
pub mod router;
pub mod texts;

// Re-exports for convenience
pub use code::{classify, CodeKind};
pub use pieces::{OwnedPieces, PieceIndex, TOTAL_PIECES};
pub use progress::format_progress;
pub use router::{CommandRequest, CommandResponse, CommandRouter, QuestRouter, Reply};
