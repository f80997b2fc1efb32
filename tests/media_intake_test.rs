//! Media intake flow against a recording gateway and a scripted host
//!
//! Run with: cargo test --test media_intake_test

mod common;

use std::sync::Arc;

use catbox_uploader::telegram::handlers::media::{
    handle_media_message, process_media, IntakeOutcome, PROCESSING_TEXT, SIZE_LIMIT_TEXT, UPLOADING_TEXT,
    UPLOAD_FAILED_TEXT,
};
use catbox_uploader::telegram::keyboards::CREDIT_BUTTON_TEXT;
use common::{photo_media, test_deps, video_media, ChatCall, RecordingGateway, ScriptedHost, TEST_CHAT_ID};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use teloxide::types::MessageId;

const MB: u64 = 1024 * 1024;

fn dir_is_empty(dir: &TempDir) -> bool {
    std::fs::read_dir(dir.path()).unwrap().next().is_none()
}

#[tokio::test]
async fn test_oversized_video_is_rejected_without_download() {
    let dir = TempDir::new().unwrap();
    let host = Arc::new(ScriptedHost::returning_link("https://files.catbox.moe/unused.mp4"));
    let deps = test_deps(host.clone(), dir.path());
    let gateway = RecordingGateway::new();

    let media = video_media(300 * 1000 * 1000);
    let outcome = process_media(&gateway, &deps, TEST_CHAT_ID, Some(&media)).await.unwrap();

    assert_eq!(outcome, IntakeOutcome::Rejected { size: 300 * 1000 * 1000 });
    assert_eq!(gateway.sent_texts(), vec![SIZE_LIMIT_TEXT.to_string()]);
    assert!(gateway.downloads().is_empty());
    assert!(host.uploads().is_empty());
}

#[tokio::test]
async fn test_photo_is_uploaded_and_link_replied() {
    let dir = TempDir::new().unwrap();
    let host = Arc::new(ScriptedHost::returning_link("https://files.catbox.moe/abc123.jpg"));
    let deps = test_deps(host.clone(), dir.path());
    let gateway = RecordingGateway::new();

    let media = photo_media(5 * MB);
    let outcome = process_media(&gateway, &deps, TEST_CHAT_ID, Some(&media)).await.unwrap();

    assert_eq!(
        outcome,
        IntakeOutcome::Uploaded {
            url: "https://files.catbox.moe/abc123.jpg".to_string()
        }
    );

    let calls = gateway.calls();
    assert_eq!(calls.len(), 4, "send, download, edit, edit: {:?}", calls);
    assert!(matches!(&calls[0], ChatCall::Send { text, .. } if text == PROCESSING_TEXT));
    assert!(matches!(&calls[1], ChatCall::Download { file_id, .. } if file_id == "photo-file-id"));
    assert!(matches!(&calls[2], ChatCall::Edit { html, .. } if html == UPLOADING_TEXT));

    match &calls[3] {
        ChatCall::Edit {
            chat_id,
            message_id,
            html,
            keyboard,
        } => {
            assert_eq!(*chat_id, TEST_CHAT_ID);
            assert_eq!(*message_id, MessageId(101));
            assert_eq!(
                html,
                "❍ | <a href=\"https://files.catbox.moe/abc123.jpg\">ʜᴏʟᴅ ᴛʜᴇ ʟɪɴᴋ</a>"
            );
            let keyboard = keyboard.as_ref().expect("credit keyboard attached");
            assert_eq!(keyboard.inline_keyboard[0][0].text, CREDIT_BUTTON_TEXT);
        }
        other => panic!("expected final edit, got {:?}", other),
    }

    // The host saw the downloaded file, and it is gone afterwards
    let uploads = host.uploads();
    assert_eq!(uploads.len(), 1);
    let (uploaded_path, existed) = &uploads[0];
    assert!(*existed);
    assert_eq!(uploaded_path.parent(), Some(dir.path()));
    let name = uploaded_path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("photo_"));
    assert!(name.ends_with(".jpg"));
    assert!(!uploaded_path.exists());
    assert!(dir_is_empty(&dir));
}

#[tokio::test]
async fn test_upload_failure_replies_generic_text_and_cleans_up() {
    let dir = TempDir::new().unwrap();
    let host = Arc::new(ScriptedHost::returning_status(500, "server error"));
    let deps = test_deps(host.clone(), dir.path());
    let gateway = RecordingGateway::new();

    let media = video_media(10 * MB);
    let outcome = process_media(&gateway, &deps, TEST_CHAT_ID, Some(&media)).await.unwrap();

    match outcome {
        IntakeOutcome::UploadFailed { diagnostic } => {
            assert_eq!(diagnostic, "Error: 500 - server error");
        }
        other => panic!("expected upload failure, got {:?}", other),
    }

    let edits = gateway.edited_texts();
    assert_eq!(edits, vec![UPLOADING_TEXT.to_string(), UPLOAD_FAILED_TEXT.to_string()]);
    // The diagnostic never reaches the chat
    assert!(gateway.calls().iter().all(|c| !format!("{:?}", c).contains("server error")));
    assert!(dir_is_empty(&dir));
}

#[tokio::test]
async fn test_download_failure_reports_error_and_cleans_up() {
    let dir = TempDir::new().unwrap();
    let host = Arc::new(ScriptedHost::returning_link("https://files.catbox.moe/never.mp4"));
    let deps = test_deps(host.clone(), dir.path());
    let gateway = RecordingGateway::failing_downloads();

    let media = video_media(MB);
    handle_media_message(&gateway, &deps, TEST_CHAT_ID, Some(&media)).await;

    let sent = gateway.sent_texts();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0], PROCESSING_TEXT);
    assert!(sent[1].starts_with("An error occurred: "), "got {:?}", sent[1]);
    assert!(sent[1].contains("connection reset mid-download"));

    assert!(host.uploads().is_empty());
    assert!(dir_is_empty(&dir));
}

#[tokio::test]
async fn test_missing_media_reports_error() {
    let dir = TempDir::new().unwrap();
    let host = Arc::new(ScriptedHost::returning_link("https://files.catbox.moe/never.jpg"));
    let deps = test_deps(host.clone(), dir.path());
    let gateway = RecordingGateway::new();

    handle_media_message(&gateway, &deps, TEST_CHAT_ID, None).await;

    assert_eq!(
        gateway.sent_texts(),
        vec![
            PROCESSING_TEXT.to_string(),
            "An error occurred: message has no photo or video attached".to_string()
        ]
    );
    assert!(gateway.downloads().is_empty());
    assert!(host.uploads().is_empty());
}

#[tokio::test]
async fn test_media_at_exact_limit_is_accepted() {
    let dir = TempDir::new().unwrap();
    let host = Arc::new(ScriptedHost::returning_link("https://files.catbox.moe/edge.mp4"));
    let deps = test_deps(host.clone(), dir.path());
    let gateway = RecordingGateway::new();

    let media = video_media(200 * MB);
    let outcome = process_media(&gateway, &deps, TEST_CHAT_ID, Some(&media)).await.unwrap();

    assert!(matches!(outcome, IntakeOutcome::Uploaded { .. }));
    assert_eq!(host.uploads().len(), 1);
    let name = host.uploads()[0].0.file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("video_") && name.ends_with(".mp4"), "got {}", name);
}

#[tokio::test]
async fn test_concurrent_uploads_use_distinct_temp_files() {
    let dir = TempDir::new().unwrap();
    let host = Arc::new(ScriptedHost::returning_link("https://files.catbox.moe/same.jpg"));
    let deps = test_deps(host.clone(), dir.path());
    let gateway = RecordingGateway::new();
    let media = photo_media(MB);

    let (a, b) = tokio::join!(
        process_media(&gateway, &deps, TEST_CHAT_ID, Some(&media)),
        process_media(&gateway, &deps, TEST_CHAT_ID, Some(&media)),
    );
    assert!(a.is_ok() && b.is_ok());

    let uploads = host.uploads();
    assert_eq!(uploads.len(), 2);
    assert_ne!(uploads[0].0, uploads[1].0);
    assert!(dir_is_empty(&dir));
}
