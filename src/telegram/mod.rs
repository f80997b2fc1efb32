//! Telegram bot integration and handlers

pub mod bot;
pub mod gateway;
pub mod handlers;
pub mod keyboards;
pub mod types;

// Re-exports for convenience
pub use bot::{create_bot, run_dispatcher, setup_bot_commands, Command};
pub use gateway::{ChatGateway, TelegramGateway};
pub use handlers::{schema, HandlerDeps, HandlerError, IntakeOutcome};
pub use types::{InboundMedia, MediaKind};
