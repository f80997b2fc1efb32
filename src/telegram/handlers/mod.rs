//! Telegram bot handler tree configuration
//!
//! This module provides the main dispatcher schema for the Telegram bot.
//! The handlers talk to Telegram through [`ChatGateway`](crate::telegram::ChatGateway),
//! so integration tests can drive them with a recording fake.

pub mod commands;
pub mod media;
mod schema;
mod types;

pub use commands::{handle_start_command, WELCOME_TEXT};
pub use media::{handle_media_message, process_media, IntakeOutcome};
pub use schema::{is_private_media, schema};
pub use types::{HandlerDeps, HandlerError};
