//! The slice of the Bot API the handlers talk to.
//!
//! Handlers only send a reply, edit it, and download an attachment. Keeping
//! that behind [`ChatGateway`] lets the handler logic run against a recording
//! fake in tests, while [`TelegramGateway`] is the teloxide-backed version.

use async_trait::async_trait;
use std::path::Path;
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{FileId, InlineKeyboardMarkup, MessageId, ParseMode};
use tokio::io::AsyncWriteExt;

use crate::core::error::AppResult;

#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Send a plain-text message, returning its id
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> AppResult<MessageId>;

    /// Replace the text of a message sent earlier (HTML parse mode)
    async fn edit_html(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        html: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> AppResult<()>;

    /// Download the file behind `file_id` to `destination`
    async fn download(&self, file_id: &str, destination: &Path) -> AppResult<()>;
}

/// [`ChatGateway`] backed by a teloxide [`Bot`]
#[derive(Clone)]
pub struct TelegramGateway {
    bot: Bot,
}

impl TelegramGateway {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatGateway for TelegramGateway {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> AppResult<MessageId> {
        let mut req = self.bot.send_message(chat_id, text);
        if let Some(kb) = keyboard {
            req = req.reply_markup(kb);
        }
        let sent = req.await?;
        Ok(sent.id)
    }

    async fn edit_html(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        html: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> AppResult<()> {
        let mut req = self
            .bot
            .edit_message_text(chat_id, message_id, html)
            .parse_mode(ParseMode::Html);
        if let Some(kb) = keyboard {
            req = req.reply_markup(kb);
        }
        req.await?;
        Ok(())
    }

    async fn download(&self, file_id: &str, destination: &Path) -> AppResult<()> {
        let file = self.bot.get_file(FileId(file_id.to_string())).await?;
        log::info!(
            "✅ File info retrieved: path = {}, size = {} bytes",
            file.path,
            file.size
        );

        // A local Bot API server reports an absolute path on its own disk;
        // when that disk is shared with us, copy instead of downloading
        let local_source = Path::new(&file.path);
        if local_source.is_absolute() && tokio::fs::try_exists(local_source).await.unwrap_or(false) {
            log::info!("📂 Local Bot API: copying {:?} directly", local_source);
            fs_err::tokio::copy(local_source, destination).await?;
            return Ok(());
        }

        let mut dst = tokio::fs::File::create(destination).await?;
        self.bot.download_file(&file.path, &mut dst).await?;
        dst.flush().await?;

        log::info!("✅ File downloaded successfully to: {:?}", destination);
        Ok(())
    }
}
