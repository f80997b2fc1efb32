//! catbox.moe upload client.
//!
//! One multipart POST per file, streamed from disk:
//! - `reqtype=fileupload`
//! - `json=true`
//! - `fileToUpload=<binary>`
//!
//! catbox answers 200 with either a JSON object carrying `url` or the bare
//! link as plain text, so both are accepted.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, StatusCode};
use serde::Deserialize;
use std::path::Path;
use url::Url;

use super::{FileHost, UploadError, UploadResult};
use crate::core::config;
use crate::core::error::AppResult;

/// Upload client for the catbox.moe user API.
#[derive(Debug, Clone)]
pub struct CatboxClient {
    client: Client,
    endpoint: Url,
}

impl CatboxClient {
    /// Client posting to `endpoint` with the shared network timeout
    pub fn new(endpoint: Url) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("catbox-uploader/", env!("CARGO_PKG_VERSION")))
            .timeout(config::network::timeout())
            .build()?;

        Ok(Self::with_client(client, endpoint))
    }

    /// Client posting to `endpoint` through an existing HTTP client
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Client for the endpoint configured via CATBOX_API_URL
    pub fn from_config() -> AppResult<Self> {
        let endpoint = Url::parse(&config::catbox::API_URL)?;
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the multipart form, streaming the file from disk.
    ///
    /// The file handle is owned by the request body and dropped with it.
    async fn build_form(path: &Path) -> std::io::Result<Form> {
        let file = tokio::fs::File::open(path).await?;
        let length = file.metadata().await?.len();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin")
            .to_string();

        let part = Part::stream_with_length(Body::from(file), length).file_name(file_name);

        Ok(Form::new()
            .text("reqtype", config::catbox::REQUEST_TYPE)
            .text("json", config::catbox::JSON_RESPONSE)
            .part(config::catbox::FILE_FIELD, part))
    }
}

/// JSON shape catbox answers with when `json=true` is honoured
#[derive(Debug, Deserialize)]
struct CatboxJsonResponse {
    #[serde(default)]
    url: Option<String>,
}

/// Extract the link from a 200 response body.
///
/// A JSON object must carry a non-empty string `url`; any other body is
/// taken as the bare link, trimmed. `None` when no link is left.
fn link_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    let link = if trimmed.starts_with('{') {
        serde_json::from_str::<CatboxJsonResponse>(trimmed).ok()?.url?
    } else {
        trimmed.to_string()
    };

    let link = link.trim();
    (!link.is_empty()).then(|| link.to_string())
}

#[async_trait]
impl FileHost for CatboxClient {
    fn name(&self) -> &str {
        "catbox"
    }

    async fn upload(&self, path: &Path) -> UploadResult {
        log::info!("📤 Uploading {} to {}", path.display(), self.endpoint);

        let form = Self::build_form(path).await?;
        let response = self.client.post(self.endpoint.clone()).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;
        log::info!("Response from catbox ({}): {}", status, body);

        if status != StatusCode::OK {
            return Err(UploadError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        match link_from_body(&body) {
            Some(link) => Ok(link),
            None => {
                log::warn!("catbox answered 200 without a link: {:?}", body);
                Err(UploadError::MissingLink { body })
            }
        }
    }
}
