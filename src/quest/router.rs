//! Command routing independent of any chat transport
//!
//! Each command takes a [`CommandRequest`] and answers with an ordered list of
//! replies instead of sending anything itself. The Telegram layer delivers the
//! replies; tests just inspect them.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

use super::code::{classify, has_piece_prefix, CodeKind};
use super::pieces::PieceIndex;
use super::progress::format_progress;
use super::texts;
use crate::core::error::AppResult;
use crate::storage::{ImageLocator, ProgressStore};

/// One inbound command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    /// Opaque id of the user who sent the command
    pub user_id: String,
    /// Everything after the command name
    pub args: String,
}

impl CommandRequest {
    pub fn new(user_id: impl Into<String>, args: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            args: args.into(),
        }
    }

    /// First whitespace-separated argument, if any
    pub fn first_arg(&self) -> Option<&str> {
        self.args.split_whitespace().next()
    }
}

/// One outbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    /// Local image file to upload
    Image(PathBuf),
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text(text.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reply::Text(text) => Some(text),
            Reply::Image(_) => None,
        }
    }
}

/// Replies to send, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResponse {
    pub replies: Vec<Reply>,
}

impl CommandResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(text: impl Into<String>) -> Self {
        Self {
            replies: vec![Reply::text(text)],
        }
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.replies.push(Reply::text(text));
    }

    pub fn push_image(&mut self, path: PathBuf) {
        self.replies.push(Reply::Image(path));
    }

    /// Text replies only, in order
    pub fn texts(&self) -> Vec<&str> {
        self.replies.iter().filter_map(Reply::as_text).collect()
    }
}

/// The three quest commands
///
/// Errors are storage failures only; bad codes are answered, not returned.
#[async_trait]
pub trait CommandRouter: Send + Sync {
    /// `/start [code]`: greet, or classify and claim a scanned code
    async fn start(&self, request: &CommandRequest) -> AppResult<CommandResponse>;

    /// `/progress`: what the user found so far
    async fn progress(&self, request: &CommandRequest) -> AppResult<CommandResponse>;

    /// `/resetme`: forget the user's progress
    async fn reset(&self, request: &CommandRequest) -> AppResult<CommandResponse>;
}

/// [`CommandRouter`] backed by the ledger file and the image directory
#[derive(Clone)]
pub struct QuestRouter {
    store: Arc<ProgressStore>,
    images: ImageLocator,
}

impl QuestRouter {
    pub fn new(store: Arc<ProgressStore>, images: ImageLocator) -> Self {
        Self { store, images }
    }

    pub fn store(&self) -> &Arc<ProgressStore> {
        &self.store
    }

    async fn claim(&self, user_id: &str, piece: PieceIndex) -> AppResult<CommandResponse> {
        let (already_owned, owned) = self
            .store
            .update(|ledger| {
                let already_owned = ledger.claim_piece(user_id, piece);
                (already_owned, ledger.pieces(user_id))
            })
            .await?;

        let mut response = CommandResponse::new();
        if already_owned {
            log::info!("🔁 User {} scanned piece {} again", user_id, piece);
            response.push_text(texts::piece_already_owned(piece));
        } else {
            log::info!("🧩 User {} claimed piece {} ({} owned)", user_id, piece, owned.len());
            response.push_text(texts::piece_claimed(piece));
        }

        match self.images.piece_image(piece) {
            Some(path) => response.push_image(path),
            None => response.push_text(texts::PIECE_IMAGE_MISSING),
        }

        response.push_text(format_progress(&owned));

        // Only the claim that completes the picture celebrates
        if !already_owned && owned.is_complete() {
            log::info!("🎯 User {} collected the full picture", user_id);
            match self.images.full_picture() {
                Some(path) => response.push_image(path),
                None => response.push_text(texts::FULL_IMAGE_MISSING),
            }
            response.push_text(texts::CONGRATULATIONS);
        }

        Ok(response)
    }
}

#[async_trait]
impl CommandRouter for QuestRouter {
    async fn start(&self, request: &CommandRequest) -> AppResult<CommandResponse> {
        let Some(code) = request.first_arg() else {
            return Ok(CommandResponse::single(texts::WELCOME));
        };

        match classify(code) {
            CodeKind::Fake => {
                log::info!("User {} scanned a decoy code {:?}", request.user_id, code);
                Ok(CommandResponse::single(texts::FAKE_CODE))
            }
            CodeKind::Piece(piece) => self.claim(&request.user_id, piece).await,
            CodeKind::Unknown if has_piece_prefix(code) => {
                log::info!("User {} sent an unknown piece code {:?}", request.user_id, code);
                Ok(CommandResponse::single(texts::UNKNOWN_PIECE))
            }
            CodeKind::Unknown => {
                log::info!("User {} sent an unrecognized code {:?}", request.user_id, code);
                Ok(CommandResponse::single(texts::UNKNOWN_CODE))
            }
        }
    }

    async fn progress(&self, request: &CommandRequest) -> AppResult<CommandResponse> {
        let ledger = self.store.snapshot().await?;
        Ok(CommandResponse::single(format_progress(&ledger.pieces(&request.user_id))))
    }

    async fn reset(&self, request: &CommandRequest) -> AppResult<CommandResponse> {
        let existed = self.store.update(|ledger| ledger.reset_user(&request.user_id)).await?;

        if existed {
            log::info!("🔁 Progress of user {} cleared", request.user_id);
            Ok(CommandResponse::single(texts::RESET_DONE))
        } else {
            Ok(CommandResponse::single(texts::NOTHING_TO_RESET))
        }
    }
}
