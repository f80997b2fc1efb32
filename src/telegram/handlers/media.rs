//! Media intake: photo/video in, catbox link out
//!
//! One pass per message:
//! 1. size check (hard 200 MiB ceiling)
//! 2. "Processing..." reply
//! 3. download to a fresh temp file, edit reply to "Uploading 100%..."
//! 4. upload through the [`FileHost`]
//! 5. remove the temp file
//! 6. edit reply with the link (or a generic failure text)

use std::path::Path;

use teloxide::types::{ChatId, MessageId};
use teloxide::utils::html;

use super::types::HandlerDeps;
use crate::core::config::limits::MAX_MEDIA_SIZE_BYTES;
use crate::core::error::{AppError, AppResult};
use crate::telegram::gateway::ChatGateway;
use crate::telegram::keyboards::credit_keyboard;
use crate::telegram::types::InboundMedia;
use crate::upload::{FileHost, UploadResult};

pub const SIZE_LIMIT_TEXT: &str = "Pʟᴇᴀsᴇ ᴘʀᴏᴠɪᴅᴇ ᴀ ᴍᴇᴅɪᴀ ғɪʟᴇ ᴜɴᴅᴇʀ 200MB.";
pub const PROCESSING_TEXT: &str = "Processing...";
pub const UPLOADING_TEXT: &str = "Uploading 100%...";
pub const UPLOAD_FAILED_TEXT: &str = "❍ ᴀɴ ᴇʀʀᴏʀ ᴏᴄᴄᴜʀʀᴇᴅ ᴡʜɪʟᴇ ᴜᴘʟᴏᴀᴅɪɴɢ.";

/// How one intake pass ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// Media over the size ceiling, nothing downloaded
    Rejected { size: u64 },
    /// Uploaded, user got the link
    Uploaded { url: String },
    /// Upload attempt failed, user got the generic failure text
    UploadFailed { diagnostic: String },
}

/// True when `size` is over the upload ceiling
pub fn exceeds_size_limit(size: u64) -> bool {
    size > MAX_MEDIA_SIZE_BYTES
}

/// Reply text carrying the public link
pub fn link_reply_html(url: &str) -> String {
    let href = html::escape(url).replace('"', "&quot;");
    format!("❍ | <a href=\"{}\">ʜᴏʟᴅ ᴛʜᴇ ʟɪɴᴋ</a>", href)
}

/// Handle one incoming photo/video and report any fault to the chat.
///
/// Never fails: faults are logged and sent to the user as
/// "An error occurred: ...", so one bad message cannot affect others.
pub async fn handle_media_message(
    gateway: &dyn ChatGateway,
    deps: &HandlerDeps,
    chat_id: ChatId,
    media: Option<&InboundMedia>,
) {
    match process_media(gateway, deps, chat_id, media).await {
        Ok(outcome) => log::info!("Media from chat {} handled: {:?}", chat_id, outcome),
        Err(e) => {
            log::error!("❌ Media handling failed for chat {}: {}", chat_id, e);
            let text = format!("An error occurred: {}", e);
            if let Err(send_err) = gateway.send_text(chat_id, &text, None).await {
                log::error!("Failed to report error to chat {}: {}", chat_id, send_err);
            }
        }
    }
}

/// Run the intake state machine for one message.
///
/// The temp file is removed before the final reply is edited, so it never
/// outlives the call even when that edit fails.
pub async fn process_media(
    gateway: &dyn ChatGateway,
    deps: &HandlerDeps,
    chat_id: ChatId,
    media: Option<&InboundMedia>,
) -> AppResult<IntakeOutcome> {
    let size = media.map_or(0, |m| m.size);
    if exceeds_size_limit(size) {
        log::info!("Rejecting media from chat {}: {} bytes over limit", chat_id, size);
        gateway.send_text(chat_id, SIZE_LIMIT_TEXT, None).await?;
        return Ok(IntakeOutcome::Rejected { size });
    }

    let progress = gateway.send_text(chat_id, PROCESSING_TEXT, None).await?;

    let media = media.ok_or(AppError::NoMedia)?;
    let local_path = deps.temp_path_for(media);

    let attempt = download_and_upload(
        gateway,
        deps.file_host.as_ref(),
        chat_id,
        progress,
        media,
        &local_path,
    )
    .await;
    remove_temp_file(&local_path).await;

    match attempt? {
        Ok(url) => {
            log::info!("✅ Uploaded {} for chat {}: {}", media.kind, chat_id, url);
            gateway
                .edit_html(
                    chat_id,
                    progress,
                    &link_reply_html(&url),
                    Some(credit_keyboard(&deps.promo_url)),
                )
                .await?;
            Ok(IntakeOutcome::Uploaded { url })
        }
        Err(e) => {
            let diagnostic = e.to_string();
            log::warn!(
                "Upload to {} failed for chat {}: {}",
                deps.file_host.name(),
                chat_id,
                diagnostic
            );
            gateway
                .edit_html(chat_id, progress, UPLOAD_FAILED_TEXT, None)
                .await?;
            Ok(IntakeOutcome::UploadFailed { diagnostic })
        }
    }
}

/// Download the media, flip the progress reply, upload.
///
/// The outer error is a fault in the chat round-trips or the download; the
/// inner result is the upload attempt itself.
async fn download_and_upload(
    gateway: &dyn ChatGateway,
    host: &dyn FileHost,
    chat_id: ChatId,
    progress: MessageId,
    media: &InboundMedia,
    local_path: &Path,
) -> AppResult<UploadResult> {
    log::info!(
        "📥 Downloading {} ({} bytes) for chat {} to {:?}",
        media.kind,
        media.size,
        chat_id,
        local_path
    );
    gateway.download(&media.file_id, local_path).await?;
    gateway.edit_html(chat_id, progress, UPLOADING_TEXT, None).await?;

    Ok(host.upload(local_path).await)
}

/// Best-effort removal; a file that was never created is fine
async fn remove_temp_file(path: &Path) {
    match fs_err::tokio::remove_file(path).await {
        Ok(()) => log::debug!("Removed temp file {:?}", path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => log::warn!("Failed to remove temp file: {}", e),
    }
}
