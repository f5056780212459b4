//! File-backed ledger store with a single writer
//!
//! Every operation reads the whole file, and every change rewrites the whole file.
//! All access from the bot goes through one async mutex, so two updates can never
//! interleave their load-mutate-save cycles. The async paths use `fs_err::tokio`
//! so the lock is held across non-blocking file I/O only.

use fs_err as fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::ledger::{ProgressLedger, StorageError};

/// Owner of the ledger file
pub struct ProgressStore {
    path: PathBuf,
    /// Serializes load-mutate-save cycles
    lock: Mutex<()>,
}

impl ProgressStore {
    /// Creates a store for the ledger at `path`. The file does not have to exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the ledger file without taking the lock.
    ///
    /// A missing file is an empty ledger. Meant for offline tools; the bot uses
    /// [`snapshot`](Self::snapshot) and [`update`](Self::update).
    pub fn load(&self) -> Result<ProgressLedger, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => ProgressLedger::from_json(&json),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ProgressLedger::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces the ledger file.
    ///
    /// Writes a sibling temp file and renames it over the ledger, so readers see
    /// either the old or the new content, never a partial write.
    pub fn save(&self, ledger: &ProgressLedger) -> Result<(), StorageError> {
        let json = ledger.to_json()?;

        if let Some(parent) = self.parent_dir() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.tmp_path();
        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        log::debug!("Saved ledger with {} user(s) to {}", ledger.len(), self.path.display());
        Ok(())
    }

    /// Reads the current ledger under the lock
    pub async fn snapshot(&self) -> Result<ProgressLedger, StorageError> {
        let _guard = self.lock.lock().await;
        self.load_async().await
    }

    /// Runs one load-mutate-save transaction.
    ///
    /// The file is only rewritten when `mutate` actually changed the ledger.
    /// Nothing is saved if loading fails.
    pub async fn update<T>(&self, mutate: impl FnOnce(&mut ProgressLedger) -> T) -> Result<T, StorageError> {
        let _guard = self.lock.lock().await;

        let mut ledger = self.load_async().await?;
        let before = ledger.clone();
        let result = mutate(&mut ledger);

        if ledger != before {
            self.save_async(&ledger).await?;
        }
        Ok(result)
    }

    async fn load_async(&self) -> Result<ProgressLedger, StorageError> {
        match fs::tokio::read_to_string(&self.path).await {
            Ok(json) => ProgressLedger::from_json(&json),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ProgressLedger::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Same temp file + rename sequence as [`save`](Self::save), on the runtime's I/O
    async fn save_async(&self, ledger: &ProgressLedger) -> Result<(), StorageError> {
        let json = ledger.to_json()?;

        if let Some(parent) = self.parent_dir() {
            fs::tokio::create_dir_all(parent).await?;
        }

        let tmp_path = self.tmp_path();
        {
            let mut file = fs::tokio::File::create(&tmp_path).await?;
            file.write_all(json.as_bytes()).await?;
            file.sync_all().await?;
        }
        fs::tokio::rename(&tmp_path, &self.path).await?;

        log::debug!("Saved ledger with {} user(s) to {}", ledger.len(), self.path.display());
        Ok(())
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "progress.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }
}
