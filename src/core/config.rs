use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration values for the bot
/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Custom Bot API server URL (e.g. a local telegram-bot-api instance)
/// Read from BOT_API_URL environment variable
/// A local server is required for files over 20 MB
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| non_empty_var("BOT_API_URL"));

/// Temporary files directory for downloaded media
/// Read from TEMP_FILES_DIR environment variable
/// Defaults to the system temp directory
pub static TEMP_FILES_DIR: Lazy<PathBuf> = Lazy::new(|| {
    non_empty_var("TEMP_FILES_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(env::temp_dir)
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// When unset, logs only go to the console
pub static LOG_FILE_PATH: Lazy<Option<String>> = Lazy::new(|| non_empty_var("LOG_FILE_PATH"));

/// Link attached to the /start "Join" button and to the upload credit button
/// Read from PROMO_URL environment variable
pub static PROMO_URL: Lazy<String> =
    Lazy::new(|| non_empty_var("PROMO_URL").unwrap_or_else(|| "https://t.me/BABY09_WORLD".to_string()));

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Media size policy
pub mod limits {
    /// Largest photo/video accepted for upload (200 MiB)
    pub const MAX_MEDIA_SIZE_MB: u64 = 200;

    /// Largest photo/video accepted for upload, in bytes
    pub const MAX_MEDIA_SIZE_BYTES: u64 = MAX_MEDIA_SIZE_MB * 1024 * 1024;
}

/// catbox.moe upload API configuration
pub mod catbox {
    use once_cell::sync::Lazy;

    /// Public catbox.moe API endpoint
    pub const DEFAULT_API_URL: &str = "https://catbox.moe/user/api.php";

    /// Upload endpoint
    /// Read from CATBOX_API_URL environment variable
    pub static API_URL: Lazy<String> =
        Lazy::new(|| super::non_empty_var("CATBOX_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()));

    /// Multipart field carrying the file payload
    pub const FILE_FIELD: &str = "fileToUpload";

    /// Fixed `reqtype` form value
    pub const REQUEST_TYPE: &str = "fileupload";

    /// Ask catbox for a JSON response (it may still answer with plain text)
    pub const JSON_RESPONSE: &str = "true";
}

/// Health check server configuration
pub mod health {
    use once_cell::sync::Lazy;
    use std::env;

    /// Default port for the health check server
    pub const DEFAULT_PORT: u16 = 8000;

    /// Port for the health check server
    /// Read from HEALTH_PORT environment variable
    /// Default: 8000
    pub static PORT: Lazy<u16> = Lazy::new(|| {
        env::var("HEALTH_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT)
    });

    /// Static liveness body returned by `GET /`
    pub const LIVENESS_BODY: &str = "Catbox uploader is running!";
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for HTTP requests (in seconds)
    /// Generous enough for a 200 MB upload over a slow link
    pub const REQUEST_TIMEOUT_SECS: u64 = 900; // 15 minutes

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
