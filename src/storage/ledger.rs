//! The progress ledger: who owns which pieces
//!
//! On disk the ledger is a single JSON object mapping a user id to the list of
//! pieces that user found, in the order they were found:
//!
//! ```json
//! {
//!   "42": [3, 7]
//! }
//! ```
//!
//! Any JSON layout is accepted on load, but [`ProgressLedger::to_json`] always writes
//! the canonical form above (pretty-printed, users sorted, trailing newline). A compact
//! or hand-written file is therefore rewritten once, on the first change the bot
//! saves, and stays byte-stable after that.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::quest::pieces::{OwnedPieces, PieceIndex};

/// Errors reading or writing the ledger file
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading, writing or renaming the file failed
    #[error("ledger I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a JSON object of string -> integer list
    #[error("ledger is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The JSON shape is right but a value breaks the ledger rules
    #[error("ledger entry for user {user} is invalid: {reason}")]
    Schema { user: String, reason: String },
}

/// Mapping from user id to the pieces that user owns
///
/// Users are kept sorted so the serialized form is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProgressLedger(BTreeMap<String, OwnedPieces>);

impl ProgressLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pieces owned by `user`, `None` if the user never claimed anything
    pub fn get(&self, user: &str) -> Option<&OwnedPieces> {
        self.0.get(user)
    }

    /// Pieces owned by `user`, empty if the user has no entry
    pub fn pieces(&self, user: &str) -> OwnedPieces {
        self.get(user).cloned().unwrap_or_default()
    }

    /// Registers `piece` for `user`, creating the entry on the first claim.
    ///
    /// Returns `true` if the user already owned the piece; the ledger is left
    /// untouched in that case.
    pub fn claim_piece(&mut self, user: &str, piece: PieceIndex) -> bool {
        if self.get(user).is_some_and(|owned| owned.contains(piece)) {
            return true;
        }
        self.0.entry(user.to_string()).or_default().insert(piece);
        false
    }

    /// Removes every piece of `user`. Returns whether there was an entry to remove.
    pub fn reset_user(&mut self, user: &str) -> bool {
        self.0.remove(user).is_some()
    }

    /// Users and their pieces, ordered by user id
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OwnedPieces)> {
        self.0.iter().map(|(user, owned)| (user.as_str(), owned))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses and validates the persisted form.
    ///
    /// Out-of-range pieces are rejected. Repeated pieces are dropped (first
    /// occurrence wins) with a warning, since a hand-edited file may contain them.
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        let raw: BTreeMap<String, Vec<i64>> = serde_json::from_str(json)?;

        let mut ledger = ProgressLedger::new();
        for (user, pieces) in raw {
            let mut owned = OwnedPieces::new();
            for n in pieces {
                let piece = u64::try_from(n)
                    .ok()
                    .and_then(PieceIndex::new)
                    .ok_or_else(|| StorageError::Schema {
                        user: user.clone(),
                        reason: format!("piece {} is out of range", n),
                    })?;
                if !owned.insert(piece) {
                    log::warn!("⚠️ Ledger lists piece {} twice for user {}, keeping one", piece, user);
                }
            }
            ledger.0.insert(user, owned);
        }

        Ok(ledger)
    }

    /// Serializes the ledger. Equal ledgers always produce identical text.
    pub fn to_json(&self) -> Result<String, StorageError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
