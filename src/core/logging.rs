//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - A startup summary of where the quest reads and writes

use anyhow::Result;
use simplelog::*;
use std::fs::File;
use std::path::PathBuf;

use crate::core::config::QuestConfig;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to create the log file or a logger is already set
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the ledger and image locations at startup
///
/// Missing image directories are not fatal (every reply has a text fallback), but
/// they are almost always a deployment mistake, so they get a warning.
///
/// # Returns
/// The image directories that were not found
pub fn log_quest_configuration(config: &QuestConfig) -> Vec<PathBuf> {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("🧩 Quest Configuration Check");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if config.ledger_path.exists() {
        log::info!("✅ Ledger: {}", config.ledger_path.display());
    } else {
        log::info!(
            "🆕 Ledger: {} (not created yet, starts empty)",
            config.ledger_path.display()
        );
    }

    let mut missing = Vec::new();
    for sub in ["pieces", "full"] {
        let dir = config.images_dir.join(sub);
        if dir.is_dir() {
            log::info!("✅ Images ({}): {}", sub, dir.display());
        } else {
            log::warn!("⚠️  Images ({}): {} (NOT FOUND, text fallbacks will be sent)", sub, dir.display());
            missing.push(dir);
        }
    }
    log::info!("   Image extension: .{}", config.image_ext);

    missing
}
