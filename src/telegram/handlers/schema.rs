//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::commands::{handle_progress_command, handle_reset_command, handle_start_command};
use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::Command;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// The same schema is used in production and in tests. Messages that are not one
/// of the known commands fall through unhandled.
///
/// # Arguments
/// * `deps` - Handler dependencies (command router)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry().branch(command_handler(deps))
}

/// Handler for the commands in the [`Command`] enum
///
/// Errors (storage, Telegram API) are returned to the dispatcher, whose error
/// handler logs them. The user gets no reply in that case.
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Start(code) => {
                        handle_start_command(&bot, &msg, &code, &deps).await?;
                    }
                    Command::Progress => {
                        handle_progress_command(&bot, &msg, &deps).await?;
                    }
                    Command::Resetme => {
                        handle_reset_command(&bot, &msg, &deps).await?;
                    }
                }

                Ok(())
            }
        },
    ))
}
