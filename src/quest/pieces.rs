//! Puzzle piece indices and per-user owned piece sets

use serde::Serialize;
use std::fmt;

/// Number of pieces in the picture
pub const TOTAL_PIECES: u8 = 10;

/// Index of one puzzle piece, always in `1..=TOTAL_PIECES`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PieceIndex(u8);

impl PieceIndex {
    /// Returns the piece with the given number, or `None` when it is out of range
    pub fn new(n: u64) -> Option<Self> {
        if (1..=u64::from(TOTAL_PIECES)).contains(&n) {
            Some(Self(n as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// All pieces in ascending order
    pub fn all() -> impl Iterator<Item = PieceIndex> {
        (1..=TOTAL_PIECES).map(PieceIndex)
    }
}

impl fmt::Display for PieceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pieces owned by one user
///
/// Keeps insertion order (that is how the ledger file stores them) while refusing
/// duplicates, so it behaves as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OwnedPieces(Vec<PieceIndex>);

impl OwnedPieces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, piece: PieceIndex) -> bool {
        self.0.contains(&piece)
    }

    /// Adds a piece. Returns `false` if it was already owned.
    pub fn insert(&mut self, piece: PieceIndex) -> bool {
        if self.contains(piece) {
            return false;
        }
        self.0.push(piece);
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True once every piece of the picture is owned
    pub fn is_complete(&self) -> bool {
        self.0.len() == usize::from(TOTAL_PIECES)
    }

    /// Owned pieces in insertion order
    pub fn iter(&self) -> impl Iterator<Item = PieceIndex> + '_ {
        self.0.iter().copied()
    }

    /// Owned pieces in ascending order
    pub fn sorted(&self) -> Vec<PieceIndex> {
        let mut pieces = self.0.clone();
        pieces.sort_unstable();
        pieces
    }

    /// Pieces still missing, in ascending order
    pub fn missing(&self) -> Vec<PieceIndex> {
        PieceIndex::all().filter(|piece| !self.contains(*piece)).collect()
    }
}

impl FromIterator<PieceIndex> for OwnedPieces {
    /// Collects pieces, silently skipping repeats
    fn from_iter<I: IntoIterator<Item = PieceIndex>>(iter: I) -> Self {
        let mut owned = OwnedPieces::new();
        for piece in iter {
            owned.insert(piece);
        }
        owned
    }
}
