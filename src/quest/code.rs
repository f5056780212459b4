//! Classification of scanned QR codes
//!
//! Codes arrive as the argument of a `/start` deep link. The classifier is pure and
//! total: every string maps to exactly one [`CodeKind`].

use super::pieces::{PieceIndex, TOTAL_PIECES};

/// Prefix of real piece codes (`piece1` .. `piece10`)
pub const PIECE_PREFIX: &str = "piece";

/// Prefix of decoy codes (`fake1` .. `fake10`)
pub const FAKE_PREFIX: &str = "fake";

/// What a scanned code turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    /// One of the decoy codes hidden next to the real ones
    Fake,
    /// A real piece
    Piece(PieceIndex),
    /// Anything else, including an empty code
    Unknown,
}

/// Classifies a raw code token, ignoring letter case and surrounding whitespace
pub fn classify(raw: &str) -> CodeKind {
    let code = raw.trim().to_lowercase();

    // Decoys are an exact set: `fake03` is not `fake3`
    if PieceIndex::all().any(|n| code == format!("{}{}", FAKE_PREFIX, n)) {
        return CodeKind::Fake;
    }

    match code.strip_prefix(PIECE_PREFIX).and_then(parse_index) {
        Some(piece) => CodeKind::Piece(piece),
        None => CodeKind::Unknown,
    }
}

/// True for tokens that look like a piece code even if the number is bad
///
/// Used to pick between the "unknown piece" and "unknown code" replies.
pub fn has_piece_prefix(raw: &str) -> bool {
    raw.trim().to_lowercase().starts_with(PIECE_PREFIX)
}

/// Parses a suffix made only of ASCII digits into a piece index
fn parse_index(suffix: &str) -> Option<PieceIndex> {
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Longer suffixes cannot be in range and could overflow
    if suffix.trim_start_matches('0').len() > usize::from(TOTAL_PIECES).to_string().len() {
        return None;
    }
    suffix.parse::<u64>().ok().and_then(PieceIndex::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(n: u64) -> CodeKind {
        CodeKind::Piece(PieceIndex::new(n).unwrap())
    }

    #[test]
    fn test_fake_codes_any_case() {
        for i in 1..=10 {
            assert_eq!(classify(&format!("fake{}", i)), CodeKind::Fake);
            assert_eq!(classify(&format!("FAKE{}", i)), CodeKind::Fake);
            assert_eq!(classify(&format!("FaKe{}", i)), CodeKind::Fake);
        }
    }

    #[test]
    fn test_fake_out_of_set_is_unknown() {
        assert_eq!(classify("fake0"), CodeKind::Unknown);
        assert_eq!(classify("fake11"), CodeKind::Unknown);
        assert_eq!(classify("fake"), CodeKind::Unknown);
        assert_eq!(classify("fake03"), CodeKind::Unknown);
    }

    #[test]
    fn test_piece_codes() {
        assert_eq!(classify("piece7"), piece(7));
        assert_eq!(classify("PIECE1"), piece(1));
        assert_eq!(classify("piece10"), piece(10));
        assert_eq!(classify("  piece4 "), piece(4));
        assert_eq!(classify("piece03"), piece(3));
    }

    #[test]
    fn test_bad_piece_codes_are_unknown() {
        for code in ["piece0", "piece11", "piecex", "piece", "piece+3", "piece-1", "piece3piece4", "piece 3"] {
            assert_eq!(classify(code), CodeKind::Unknown, "code {:?}", code);
        }
        assert_eq!(classify("piece99999999999999999999999"), CodeKind::Unknown);
    }

    #[test]
    fn test_everything_else_is_unknown() {
        assert_eq!(classify(""), CodeKind::Unknown);
        assert_eq!(classify("   "), CodeKind::Unknown);
        assert_eq!(classify("hello"), CodeKind::Unknown);
        assert_eq!(classify("3"), CodeKind::Unknown);
    }

    #[test]
    fn test_has_piece_prefix() {
        assert!(has_piece_prefix("piece11"));
        assert!(has_piece_prefix("Piecex"));
        assert!(!has_piece_prefix("fake3"));
    }
}
