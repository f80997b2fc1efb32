use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use teloxide::prelude::*;
use tokio::signal;
use url::Url;

use catbox_uploader::cli::{Cli, Commands};
use catbox_uploader::core::{config, init_logger, HealthServer, Supervisor};
use catbox_uploader::telegram::{create_bot, run_dispatcher, setup_bot_commands, HandlerDeps};
use catbox_uploader::upload::{CatboxClient, FileHost};

/// Main entry point for the catbox uploader bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, bot creation, port binding).
#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Load environment variables from .env if present, before any config is read
    let _ = dotenv();

    // Initialize logger (console + optional file)
    init_logger(config::LOG_FILE_PATH.as_deref())?;

    // Log panics through the logger so they land in the log file too
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
        if let Some(msg) = panic_info.payload().downcast_ref::<&str>() {
            log::error!("Panic message: {}", msg);
        }
    }));

    match cli.command {
        Some(Commands::Run) => run_bot().await,
        Some(Commands::Upload { path }) => run_cli_upload(path).await,
        None => {
            log::info!("No command specified, running bot in default mode");
            run_bot().await
        }
    }
}

/// Upload one local file and print the resulting link
async fn run_cli_upload(path: PathBuf) -> Result<()> {
    let client = CatboxClient::from_config()?;
    log::info!("Uploading {:?} to {}", path, client.endpoint());

    let url = client
        .upload(&path)
        .await
        .with_context(|| format!("Upload of {} failed", path.display()))?;
    println!("{}", url);
    Ok(())
}

/// Run the bot and the health endpoint until Ctrl+C or a service failure
async fn run_bot() -> Result<()> {
    log::info!("Starting catbox uploader bot...");

    let bot = create_bot(&config::BOT_TOKEN, config::BOT_API_URL.as_deref())?;

    let me = bot.get_me().await.context("Failed to reach the Bot API")?;
    log::info!("🤖 Logged in as @{}", me.username());

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let temp_dir = config::TEMP_FILES_DIR.clone();
    fs_err::tokio::create_dir_all(&temp_dir).await?;
    log::info!("Temp files directory: {:?}", temp_dir);

    let file_host: Arc<dyn FileHost> = Arc::new(CatboxClient::from_config()?);
    let promo_url = Url::parse(&config::PROMO_URL).context("PROMO_URL is not a valid URL")?;
    let deps = HandlerDeps::new(file_host, temp_dir, promo_url);

    let health = HealthServer::bind_port(*config::health::PORT)
        .await
        .with_context(|| format!("Failed to bind health server on port {}", *config::health::PORT))?;
    log::info!("🩺 Health server listening on {}", health.local_addr());

    let mut supervisor = Supervisor::new();

    let health_shutdown = supervisor.shutdown_token();
    supervisor.spawn("health-server", async move {
        health.serve(health_shutdown).await?;
        Ok(())
    });

    let dispatcher_shutdown = supervisor.shutdown_token();
    supervisor.spawn("telegram-dispatcher", run_dispatcher(bot, deps, dispatcher_shutdown));

    supervisor
        .run_until(async {
            if let Err(e) = signal::ctrl_c().await {
                log::error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await?;

    log::info!("Bot stopped");
    Ok(())
}
