//! Supervision of the long-running services
//!
//! The process runs two independent services (the bot dispatcher and the
//! health server). Each is spawned as a named task holding a clone of one
//! shared [`CancellationToken`]. When any task exits, or when the stop signal
//! fires, the token is cancelled and the supervisor waits for the remaining
//! tasks to wind down.

use std::future::Future;

use anyhow::{anyhow, Result};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// Owns the service tasks and their shared shutdown token
pub struct Supervisor {
    shutdown: CancellationToken,
    tasks: JoinSet<(&'static str, Result<()>)>,
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new()
    }
}

impl Supervisor {
    pub fn new() -> Self {
        Self {
            shutdown: CancellationToken::new(),
            tasks: JoinSet::new(),
        }
    }

    /// Token a service must watch to know when to stop
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Start a named service task
    pub fn spawn<F>(&mut self, name: &'static str, service: F)
    where
        F: Future<Output = Result<()>> + Send + 'static,
    {
        log::info!("Starting service: {}", name);
        self.tasks.spawn(async move { (name, service.await) });
    }

    /// Wait until `stop` resolves or any service exits, then stop the rest.
    ///
    /// Returns the first service error, if any service failed or panicked.
    pub async fn run_until<S>(mut self, stop: S) -> Result<()>
    where
        S: Future<Output = ()>,
    {
        let mut first_error: Option<anyhow::Error> = None;

        tokio::select! {
            _ = stop => {
                log::info!("Shutdown requested, stopping services...");
            }
            Some(joined) = self.tasks.join_next() => {
                record_exit(joined, &mut first_error);
                log::warn!("A service exited, stopping the remaining ones...");
            }
        }

        self.shutdown.cancel();

        while let Some(joined) = self.tasks.join_next().await {
            record_exit(joined, &mut first_error);
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn record_exit(
    joined: Result<(&'static str, Result<()>), tokio::task::JoinError>,
    first_error: &mut Option<anyhow::Error>,
) {
    let error = match joined {
        Ok((name, Ok(()))) => {
            log::info!("Service {} stopped", name);
            return;
        }
        Ok((name, Err(e))) => {
            log::error!("Service {} failed: {:#}", name, e);
            e.context(format!("service {} failed", name))
        }
        Err(join_err) => {
            log::error!("Service task panicked or was cancelled: {}", join_err);
            anyhow!("service task aborted: {}", join_err)
        }
    };

    if first_error.is_none() {
        *first_error = Some(error);
    }
}
