//! In-memory stand-ins for Telegram and the file host
//!
//! [`RecordingGateway`] records every Bot API call the handlers make and
//! writes a small fake file on download. [`ScriptedHost`] returns a canned
//! upload result and remembers which paths it was asked to upload.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use catbox_uploader::core::{AppError, AppResult};
use catbox_uploader::telegram::ChatGateway;
use catbox_uploader::upload::{FileHost, UploadError, UploadResult};
use teloxide::types::{ChatId, InlineKeyboardMarkup, MessageId};

/// One recorded Bot API call
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCall {
    Send {
        chat_id: ChatId,
        text: String,
        keyboard: Option<InlineKeyboardMarkup>,
    },
    Edit {
        chat_id: ChatId,
        message_id: MessageId,
        html: String,
        keyboard: Option<InlineKeyboardMarkup>,
    },
    Download {
        file_id: String,
        destination: PathBuf,
    },
}

/// Records calls; optionally fails downloads
#[derive(Default)]
pub struct RecordingGateway {
    calls: Mutex<Vec<ChatCall>>,
    fail_downloads: bool,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway whose downloads always fail after touching the destination
    pub fn failing_downloads() -> Self {
        Self {
            fail_downloads: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<ChatCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ChatCall::Send { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn edited_texts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ChatCall::Edit { html, .. } => Some(html),
                _ => None,
            })
            .collect()
    }

    pub fn downloads(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ChatCall::Download { destination, .. } => Some(destination),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ChatCall) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        calls.len()
    }
}

#[async_trait]
impl ChatGateway for RecordingGateway {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> AppResult<MessageId> {
        let n = self.record(ChatCall::Send {
            chat_id,
            text: text.to_string(),
            keyboard,
        });
        Ok(MessageId(100 + n as i32))
    }

    async fn edit_html(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        html: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> AppResult<()> {
        self.record(ChatCall::Edit {
            chat_id,
            message_id,
            html: html.to_string(),
            keyboard,
        });
        Ok(())
    }

    async fn download(&self, file_id: &str, destination: &Path) -> AppResult<()> {
        self.record(ChatCall::Download {
            file_id: file_id.to_string(),
            destination: destination.to_path_buf(),
        });
        std::fs::write(destination, b"fake media bytes")?;

        if self.fail_downloads {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset mid-download",
            )));
        }
        Ok(())
    }
}

/// How the scripted host answers
#[derive(Debug, Clone)]
pub enum Script {
    Link(String),
    Upstream { status: u16, body: String },
}

/// File host returning a canned result
pub struct ScriptedHost {
    script: Script,
    uploads: Mutex<Vec<(PathBuf, bool)>>,
}

impl ScriptedHost {
    pub fn returning_link(url: &str) -> Self {
        Self::new(Script::Link(url.to_string()))
    }

    pub fn returning_status(status: u16, body: &str) -> Self {
        Self::new(Script::Upstream {
            status,
            body: body.to_string(),
        })
    }

    fn new(script: Script) -> Self {
        Self {
            script,
            uploads: Mutex::new(Vec::new()),
        }
    }

    /// Uploaded paths, each paired with whether the file existed at upload time
    pub fn uploads(&self) -> Vec<(PathBuf, bool)> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileHost for ScriptedHost {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn upload(&self, path: &Path) -> UploadResult {
        self.uploads
            .lock()
            .unwrap()
            .push((path.to_path_buf(), path.exists()));

        match &self.script {
            Script::Link(url) => Ok(url.clone()),
            Script::Upstream { status, body } => Err(UploadError::Upstream {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
