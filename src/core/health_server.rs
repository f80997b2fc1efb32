//! HTTP liveness endpoint
//!
//! A single `GET /` route returning a static string, used by external uptime
//! monitors. It runs as its own task next to the bot dispatcher and shares no
//! state with it.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::core::config;

/// Build the health check router
pub fn health_router() -> Router {
    Router::new().route("/", get(liveness_handler))
}

/// Handler for `/`
async fn liveness_handler() -> impl IntoResponse {
    (StatusCode::OK, config::health::LIVENESS_BODY)
}

/// Health server bound to a local address, not yet serving
pub struct HealthServer {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl HealthServer {
    /// Bind the listener. Port 0 picks a free port (useful in tests).
    pub async fn bind(addr: SocketAddr) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        Ok(Self { listener, local_addr })
    }

    /// Bind on all interfaces at `port`
    pub async fn bind_port(port: u16) -> std::io::Result<Self> {
        Self::bind(SocketAddr::from(([0, 0, 0, 0], port))).await
    }

    /// Address the server is listening on
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve until `shutdown` is cancelled
    pub async fn serve(self, shutdown: CancellationToken) -> std::io::Result<()> {
        log::info!("Starting health server on http://{}", self.local_addr);
        log::info!("  /  - Liveness check");

        axum::serve(self.listener, health_router())
            .with_graceful_shutdown(shutdown.cancelled_owned())
            .await?;

        log::info!("Health server stopped");
        Ok(())
    }
}
