//! Hosted-file upload abstraction.
//!
//! The media handler only needs "turn this local file into a public link".
//! That contract is the [`FileHost`] trait; [`CatboxClient`] implements it
//! against the catbox.moe API. Tests plug in scripted hosts.

pub mod catbox;

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

pub use catbox::CatboxClient;

/// Why an upload attempt failed.
///
/// The `Display` text is the diagnostic message: it is logged, never shown
/// to the end user.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The host answered with a status other than 200
    #[error("Error: {status} - {body}")]
    Upstream { status: u16, body: String },

    /// Connection, TLS or body-read failure talking to the host
    #[error("Exception occurred: {0}")]
    Transport(#[from] reqwest::Error),

    /// The host answered 200 but the body carries no usable link
    #[error("Error: no link in response - {body}")]
    MissingLink { body: String },

    /// The local file could not be opened or inspected
    #[error("Exception occurred: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of one upload attempt: the public URL, or why it failed.
pub type UploadResult = Result<String, UploadError>;

/// A service that stores a local file and hands back a public link.
///
/// One call is one best-effort attempt: implementations do not retry.
#[async_trait]
pub trait FileHost: Send + Sync {
    /// Human-readable name for logs (e.g. "catbox").
    fn name(&self) -> &str;

    /// Upload the file at `path`.
    async fn upload(&self, path: &Path) -> UploadResult;
}
