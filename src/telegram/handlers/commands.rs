//! Command handler implementations (/start)

use indoc::indoc;
use teloxide::types::ChatId;
use url::Url;

use crate::core::error::AppResult;
use crate::telegram::gateway::ChatGateway;
use crate::telegram::keyboards::join_keyboard;

/// Reply to /start
pub const WELCOME_TEXT: &str = indoc! {"
    👋 Welcome to the Media Uploader Bot!

    Send me a photo or video to upload!"};

/// Handle /start command
pub async fn handle_start_command(gateway: &dyn ChatGateway, chat_id: ChatId, promo_url: &Url) -> AppResult<()> {
    gateway
        .send_text(chat_id, WELCOME_TEXT, Some(join_keyboard(promo_url)))
        .await?;
    Ok(())
}
