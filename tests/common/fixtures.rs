//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use catbox_uploader::telegram::{HandlerDeps, InboundMedia, MediaKind};
use catbox_uploader::upload::FileHost;
use teloxide::types::ChatId;
use url::Url;

/// Chat used by every handler test
pub const TEST_CHAT_ID: ChatId = ChatId(123456789);

/// Promo link wired into test handler deps
pub const TEST_PROMO_URL: &str = "https://t.me/test_channel";

pub fn test_deps(host: Arc<dyn FileHost>, temp_dir: &Path) -> HandlerDeps {
    HandlerDeps::new(
        host,
        temp_dir.to_path_buf(),
        Url::parse(TEST_PROMO_URL).unwrap(),
    )
}

pub fn photo_media(size: u64) -> InboundMedia {
    InboundMedia {
        file_id: "photo-file-id".to_string(),
        size,
        kind: MediaKind::Photo,
        file_name: None,
        mime_type: Some("image/jpeg".to_string()),
    }
}

pub fn video_media(size: u64) -> InboundMedia {
    InboundMedia {
        file_id: "video-file-id".to_string(),
        size,
        kind: MediaKind::Video,
        file_name: Some("clip.mp4".to_string()),
        mime_type: Some("video/mp4".to_string()),
    }
}
