use thiserror::Error;

/// Centralized error types for the application
///
/// Everything that can abort the handling of a single update is converted
/// to this enum. Upload failures are not errors at this level: the uploader
/// returns them as [`crate::upload::UploadError`] values and the media
/// handler turns them into a user-facing reply.
///
/// # Example
///
/// ```no_run
/// use catbox_uploader::core::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Telegram file download errors
    #[error("Download error: {0}")]
    Download(#[from] teloxide::DownloadError),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The message carried no photo or video to download
    #[error("message has no photo or video attached")]
    NoMedia,
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
