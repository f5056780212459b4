//! Test fixtures for quest flows
//!
//! Provides QuestFixture that sets up everything a router needs:
//! - A temporary ledger file
//! - A temporary image directory (empty until images are added)

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use puzzle_quest::quest::{CommandRequest, CommandResponse, CommandRouter, PieceIndex, QuestRouter, Reply};
use puzzle_quest::storage::{ImageLocator, ProgressStore};
use tempfile::TempDir;

/// Isolated router with its own ledger and images
///
/// # Example
/// ```ignore
/// let fx = QuestFixture::new();
/// fx.add_piece_image(3);
/// let response = fx.start("42", "piece3").await;
/// ```
pub struct QuestFixture {
    pub dir: TempDir,
    pub router: QuestRouter,
}

impl QuestFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = Arc::new(ProgressStore::new(dir.path().join("progress.json")));
        let images = ImageLocator::new(dir.path().join("images"), "jpg");
        let router = QuestRouter::new(store, images);
        Self { dir, router }
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.dir.path().join("progress.json")
    }

    pub fn images(&self) -> ImageLocator {
        ImageLocator::new(self.dir.path().join("images"), "jpg")
    }

    /// Writes a dummy image for `piece`
    pub fn add_piece_image(&self, piece: u64) -> PathBuf {
        let path = self.images().piece_path(PieceIndex::new(piece).expect("piece in range"));
        write_dummy(&path);
        path
    }

    /// Writes a dummy full picture
    pub fn add_full_picture(&self) -> PathBuf {
        let path = self.images().full_path();
        write_dummy(&path);
        path
    }

    pub async fn start(&self, user: &str, args: &str) -> CommandResponse {
        self.router
            .start(&CommandRequest::new(user, args))
            .await
            .expect("start should succeed")
    }

    pub async fn progress(&self, user: &str) -> CommandResponse {
        self.router
            .progress(&CommandRequest::new(user, ""))
            .await
            .expect("progress should succeed")
    }

    pub async fn reset(&self, user: &str) -> CommandResponse {
        self.router
            .reset(&CommandRequest::new(user, ""))
            .await
            .expect("reset should succeed")
    }
}

fn write_dummy(path: &std::path::Path) {
    std::fs::create_dir_all(path.parent().expect("image path has a parent")).expect("Failed to create image dir");
    std::fs::write(path, b"\xFF\xD8\xFF").expect("Failed to write image");
}

/// Shorthand for an expected text reply
pub fn text(s: impl Into<String>) -> Reply {
    Reply::Text(s.into())
}
