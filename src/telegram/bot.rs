//! Bot initialization and dispatcher lifecycle
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - The dispatcher service run under the supervisor

use std::time::Duration;

use reqwest::ClientBuilder;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tokio_util::sync::CancellationToken;

use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::telegram::handlers::{schema, HandlerDeps};

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "show the welcome message")]
    Start,
}

/// Creates a Bot instance with custom or default API URL
///
/// # Arguments
/// * `token` - Bot API token
/// * `api_url` - Custom Bot API server (e.g. a local telegram-bot-api)
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(AppError)` - Missing token, invalid URL or HTTP client failure
pub fn create_bot(token: &str, api_url: Option<&str>) -> AppResult<Bot> {
    if token.trim().is_empty() {
        return Err(AppError::Config(
            "BOT_TOKEN environment variable not set".to_string(),
        ));
    }

    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    let bot = Bot::with_client(token, client);

    match api_url {
        Some(api_url) => {
            log::info!("Using custom Bot API URL: {}", api_url);
            let url = url::Url::parse(api_url)?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Sets up bot commands in Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

/// Run the update dispatcher until `shutdown` is cancelled
///
/// Updates from one chat are handled in order; different chats are handled
/// concurrently.
pub async fn run_dispatcher(bot: Bot, deps: HandlerDeps, shutdown: CancellationToken) -> anyhow::Result<()> {
    let mut dispatcher = Dispatcher::builder(bot, schema(deps))
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .build();

    let dispatcher_token = dispatcher.shutdown_token();
    let shutdown_watcher = tokio::spawn(async move {
        shutdown.cancelled().await;
        log::info!("Stopping dispatcher...");
        // The dispatcher refuses to shut down before it has started polling
        loop {
            match dispatcher_token.shutdown() {
                Ok(done) => {
                    done.await;
                    break;
                }
                Err(_) => tokio::time::sleep(Duration::from_millis(100)).await,
            }
        }
    });

    log::info!("📡 Ready to receive updates!");
    dispatcher.dispatch().await;
    shutdown_watcher.abort();

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
