//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::commands::handle_start_command;
use super::media::handle_media_message;
use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::Command;
use crate::telegram::gateway::TelegramGateway;
use crate::telegram::types::InboundMedia;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// The same tree runs in production and in dispatcher-level tests.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_media = deps;

    dptree::entry()
        .branch(command_handler(deps_commands))
        .branch(media_handler(deps_media))
}

/// True for a private-chat message carrying a photo or a video
pub fn is_private_media(msg: &Message) -> bool {
    msg.chat.is_private() && (msg.photo().is_some() || msg.video().is_some())
}

fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Start => {
                        let gateway = TelegramGateway::new(bot);
                        handle_start_command(&gateway, msg.chat.id, &deps.promo_url).await?;
                    }
                }
                Ok(())
            }
        },
    ))
}

fn media_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| is_private_media(&msg))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let media = InboundMedia::from_message(&msg);
                log::info!(
                    "📤 Media message {} from chat {}: {:?}",
                    msg.id,
                    msg.chat.id,
                    media.as_ref().map(|m| m.kind)
                );

                let gateway = TelegramGateway::new(bot);
                handle_media_message(&gateway, &deps, msg.chat.id, media.as_ref()).await;
                Ok(())
            }
        })
}
