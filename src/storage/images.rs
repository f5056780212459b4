//! Lookup of the piece and full-picture images
//!
//! Images live under a conventional layout:
//! - `<root>/pieces/piece<N>.<ext>`
//! - `<root>/full/full.<ext>`
//!
//! Lookups only check that the file exists; a missing image is never an error.

use std::path::{Path, PathBuf};

use crate::quest::pieces::PieceIndex;

#[derive(Debug, Clone)]
pub struct ImageLocator {
    root: PathBuf,
    ext: String,
}

impl ImageLocator {
    pub fn new(root: impl Into<PathBuf>, ext: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ext: ext.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the image of `piece` is expected
    pub fn piece_path(&self, piece: PieceIndex) -> PathBuf {
        self.root.join("pieces").join(format!("piece{}.{}", piece, self.ext))
    }

    /// Where the full picture is expected
    pub fn full_path(&self) -> PathBuf {
        self.root.join("full").join(format!("full.{}", self.ext))
    }

    /// Image of `piece`, if present on disk
    pub fn piece_image(&self, piece: PieceIndex) -> Option<PathBuf> {
        existing(self.piece_path(piece))
    }

    /// The full picture, if present on disk
    pub fn full_picture(&self) -> Option<PathBuf> {
        existing(self.full_path())
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        log::debug!("Image not found: {}", path.display());
        None
    }
}
