use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;

use puzzle_quest::cli::{Cli, Commands};
use puzzle_quest::core::{config, init_logger, log_quest_configuration, QuestConfig};
use puzzle_quest::quest::{format_progress, CommandRouter, QuestRouter, TOTAL_PIECES};
use puzzle_quest::storage::{ImageLocator, ProgressStore};
use puzzle_quest::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, missing token, bot creation)
/// or if an offline command cannot read the ledger.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Log panics instead of losing them on stderr only
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    // Load environment variables from .env if present (before config is read)
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    let quest_config = QuestConfig::from_env();

    match cli.command {
        Some(Commands::Run) | None => run_bot(quest_config).await,
        Some(Commands::Show { user }) => run_show(&quest_config, user.as_deref()),
        Some(Commands::Check) => run_check(&quest_config).await,
    }
}

/// Starts the bot in long polling mode
async fn run_bot(quest_config: QuestConfig) -> Result<()> {
    let token = match config::require_bot_token() {
        Ok(token) => token,
        Err(e) => {
            eprintln!("❌ {}", e);
            log::error!("❌ {}. Set TOKEN in the environment or in .env", e);
            return Err(e.into());
        }
    };

    log_quest_configuration(&quest_config);

    let store = Arc::new(ProgressStore::new(&quest_config.ledger_path));
    // A broken ledger is not fatal: each command fails and logs on its own
    match store.snapshot().await {
        Ok(ledger) => log::info!("📒 Ledger loaded: {} user(s)", ledger.len()),
        Err(e) => log::error!("❌ Ledger {} is unreadable: {}", store.path().display(), e),
    }

    let images = ImageLocator::new(&quest_config.images_dir, quest_config.image_ext.clone());
    let router: Arc<dyn CommandRouter> = Arc::new(QuestRouter::new(store, images));

    let bot = create_bot(&token)?;
    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let handler = schema(HandlerDeps::new(router));

    log::info!("================================================");
    log::info!("🚀 Bot started, waiting for updates");
    log::info!("================================================");

    // Updates queued while the bot was down are still delivered
    Dispatcher::builder(bot, handler)
        .error_handler(LoggingErrorHandler::with_custom_text("⚠️ Error while handling a command"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}

/// Prints progress for one user or a table of every user
fn run_show(quest_config: &QuestConfig, user: Option<&str>) -> Result<()> {
    let ledger = ProgressStore::new(&quest_config.ledger_path).load()?;

    match user {
        Some(user) => {
            println!("👤 {}", user);
            println!("{}", format_progress(&ledger.pieces(user)));
        }
        None if ledger.is_empty() => println!("No progress recorded yet"),
        None => {
            for (user, owned) in ledger.iter() {
                println!("👤 {:<16} {:>2}/{}", user, owned.len(), TOTAL_PIECES);
            }
        }
    }

    Ok(())
}

/// Loads the ledger and reports whether it is valid
async fn run_check(quest_config: &QuestConfig) -> Result<()> {
    let store = ProgressStore::new(&quest_config.ledger_path);
    match store.snapshot().await {
        Ok(ledger) => {
            let complete = ledger.iter().filter(|(_, owned)| owned.is_complete()).count();
            println!(
                "✅ {}: {} user(s), {} with the full picture",
                store.path().display(),
                ledger.len(),
                complete
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}: {}", store.path().display(), e);
            Err(e.into())
        }
    }
}
