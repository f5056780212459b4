//! Handler types, dependencies and request extraction

use std::sync::Arc;

use teloxide::types::Message;

use crate::quest::{CommandRequest, CommandRouter};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub router: Arc<dyn CommandRouter>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(router: Arc<dyn CommandRouter>) -> Self {
        Self { router }
    }
}

/// Builds the transport-free request for a command message.
///
/// Returns `None` for messages without a sender (channel posts, anonymous admins),
/// since progress is tracked per user.
pub fn request_from_message(msg: &Message, args: &str) -> Option<CommandRequest> {
    let user = msg.from.as_ref()?;
    Some(CommandRequest::new(user.id.0.to_string(), args))
}
