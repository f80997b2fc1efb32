//! Core utilities, configuration, and common functionality

pub mod config;
pub mod error;
pub mod health_server;
pub mod logging;
pub mod supervisor;

// Re-exports for convenience
pub use error::{AppError, AppResult};
pub use health_server::HealthServer;
pub use logging::init_logger;
pub use supervisor::Supervisor;
