use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "puzzle-quest")]
#[command(author, version, about = "Telegram bot for a QR puzzle quest", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Print progress from the ledger file without starting the bot
    Show {
        /// Only show this user id
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Validate the ledger file
    Check,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
