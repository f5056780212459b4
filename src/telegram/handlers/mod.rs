//! Telegram bot handler tree configuration
//!
//! Handlers only translate between Telegram messages and the transport-free
//! [`CommandRouter`](crate::quest::CommandRouter); all quest logic lives there.

mod commands;
mod schema;
mod types;

pub use schema::schema;
pub use types::{request_from_message, HandlerDeps, HandlerError};
