//! Human-readable progress summary

use super::pieces::{OwnedPieces, PieceIndex};
use super::texts::{COMPLETE_BANNER, FOUND_LABEL, MISSING_LABEL};

/// Formats what a user has found and what is still missing.
///
/// Both lists are ascending. The completion banner is appended on its own line once
/// all pieces are owned.
///
/// # Example
///
/// ```
/// use puzzle_quest::quest::{format_progress, OwnedPieces, PieceIndex};
///
/// let owned: OwnedPieces = PieceIndex::new(3).into_iter().collect();
/// assert_eq!(
///     format_progress(&owned),
///     "🧩 Знайдено: 3\n🔍 Ще залишилось: 1, 2, 4, 5, 6, 7, 8, 9, 10"
/// );
/// ```
pub fn format_progress(owned: &OwnedPieces) -> String {
    let mut text = format!(
        "{} {}\n{} {}",
        FOUND_LABEL,
        join(&owned.sorted()),
        MISSING_LABEL,
        join(&owned.missing())
    );
    if owned.is_complete() {
        text.push('\n');
        text.push_str(COMPLETE_BANNER);
    }
    text
}

fn join(pieces: &[PieceIndex]) -> String {
    pieces.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
