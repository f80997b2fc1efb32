//! Media types extracted from incoming Telegram messages

use std::fmt;
use teloxide::types::Message;

/// Kind of media the bot accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A photo or video attached to an incoming message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMedia {
    pub file_id: String,
    pub size: u64,
    pub kind: MediaKind,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
}

impl InboundMedia {
    /// Extract the media from a message.
    ///
    /// For photos Telegram sends several sizes; the largest file is used.
    /// A size Telegram did not report counts as 0 and never trips the limit.
    /// Returns `None` when the message has neither a photo nor a video.
    pub fn from_message(msg: &Message) -> Option<Self> {
        if let Some(photos) = msg.photo() {
            let photo = photos
                .iter()
                .max_by_key(|p| (known_size(p.file.size), u64::from(p.width) * u64::from(p.height)))?;
            return Some(Self {
                file_id: photo.file.id.0.clone(),
                size: known_size(photo.file.size),
                kind: MediaKind::Photo,
                file_name: None,
                mime_type: Some("image/jpeg".to_string()),
            });
        }

        let video = msg.video()?;
        Some(Self {
            file_id: video.file.id.0.clone(),
            size: known_size(video.file.size),
            kind: MediaKind::Video,
            file_name: video.file_name.clone(),
            mime_type: video.mime_type.as_ref().map(|m| m.to_string()),
        })
    }

    /// File extension for the local copy.
    ///
    /// catbox keeps the extension of the uploaded name, so it has to match
    /// the content: original file name first, then the MIME subtype.
    pub fn extension(&self) -> String {
        if self.kind == MediaKind::Photo {
            return "jpg".to_string();
        }

        let from_name = self
            .file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext);
        if let Some(ext) = from_name.filter(|ext| is_plain_extension(ext)) {
            return ext.to_lowercase();
        }

        match self.mime_type.as_deref() {
            Some("video/quicktime") => "mov".to_string(),
            Some("video/x-matroska") => "mkv".to_string(),
            Some(mime) => mime
                .strip_prefix("video/")
                .filter(|ext| is_plain_extension(ext))
                .map(str::to_lowercase)
                .unwrap_or_else(|| "mp4".to_string()),
            None => "mp4".to_string(),
        }
    }
}

/// Size reported by Telegram; 0 when it left `file_size` out
///
/// teloxide fills a missing `file_size` with `u32::MAX`.
fn known_size(size: u32) -> u64 {
    if size == u32::MAX {
        0
    } else {
        u64::from(size)
    }
}

fn is_plain_extension(ext: &str) -> bool {
    !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric())
}
