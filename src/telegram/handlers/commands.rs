//! Command handler implementations (/start, /progress, /resetme)

use teloxide::prelude::*;
use teloxide::types::{InputFile, Message};

use super::types::{request_from_message, HandlerDeps, HandlerError};
use crate::quest::{CommandResponse, Reply};

/// Handle /start command, with or without a scanned code
pub(super) async fn handle_start_command(
    bot: &Bot,
    msg: &Message,
    code: &str,
    deps: &HandlerDeps,
) -> Result<(), HandlerError> {
    let Some(request) = request_from_message(msg, code) else {
        log::warn!("/start without a sender in chat {}, ignoring", msg.chat.id);
        return Ok(());
    };

    let response = deps.router.start(&request).await?;
    deliver(bot, msg.chat.id, response).await
}

/// Handle /progress command
pub(super) async fn handle_progress_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let Some(request) = request_from_message(msg, "") else {
        log::warn!("/progress without a sender in chat {}, ignoring", msg.chat.id);
        return Ok(());
    };

    let response = deps.router.progress(&request).await?;
    deliver(bot, msg.chat.id, response).await
}

/// Handle /resetme command
pub(super) async fn handle_reset_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let Some(request) = request_from_message(msg, "") else {
        log::warn!("/resetme without a sender in chat {}, ignoring", msg.chat.id);
        return Ok(());
    };

    let response = deps.router.reset(&request).await?;
    deliver(bot, msg.chat.id, response).await
}

/// Sends the replies one by one, preserving their order
async fn deliver(bot: &Bot, chat_id: ChatId, response: CommandResponse) -> Result<(), HandlerError> {
    for reply in response.replies {
        match reply {
            Reply::Text(text) => {
                bot.send_message(chat_id, text).await?;
            }
            Reply::Image(path) => {
                log::debug!("Sending image {} to chat {}", path.display(), chat_id);
                bot.send_photo(chat_id, InputFile::file(path)).await?;
            }
        }
    }
    Ok(())
}
