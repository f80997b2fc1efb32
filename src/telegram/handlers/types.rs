//! Handler types and dependencies

use std::path::PathBuf;
use std::sync::Arc;

use url::Url;
use uuid::Uuid;

use crate::telegram::types::InboundMedia;
use crate::upload::FileHost;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub file_host: Arc<dyn FileHost>,
    pub temp_dir: PathBuf,
    pub promo_url: Url,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(file_host: Arc<dyn FileHost>, temp_dir: PathBuf, promo_url: Url) -> Self {
        Self {
            file_host,
            temp_dir,
            promo_url,
        }
    }

    /// Fresh, unique local path for downloading `media`
    pub fn temp_path_for(&self, media: &InboundMedia) -> PathBuf {
        let file_name = format!("{}_{}.{}", media.kind, Uuid::new_v4().simple(), media.extension());
        self.temp_dir.join(file_name)
    }
}
