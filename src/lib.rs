//! Catbox uploader - Telegram bot that turns photos and videos into catbox.moe links
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, health endpoint and service supervision
//! - `upload`: hosted-file upload abstraction and the catbox.moe client
//! - `telegram`: bot setup, dispatcher schema and handlers
//! - `cli`: command-line interface

pub mod cli;
pub mod core;
pub mod telegram;
pub mod upload;

// Re-export commonly used types for convenience
pub use core::{config, AppError, AppResult};
pub use telegram::{create_bot, schema, HandlerDeps};
pub use upload::{CatboxClient, FileHost, UploadError, UploadResult};
