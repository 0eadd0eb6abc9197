//! Graceful shutdown signal handling

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Waits for Ctrl+C (or SIGTERM on Unix), then stops the server gracefully.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    #[cfg(unix)]
    {
        let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(ShutdownSignalError::SigTerm)?;

        tokio::select! {
            result = signal::ctrl_c() => {
                result.map_err(ShutdownSignalError::CtrlC)?;
                tracing::info!("ctrl_c signal received");
            }
            _ = terminate.recv() => {
                tracing::info!("terminate signal received");
            }
        };
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c()
            .await
            .map_err(ShutdownSignalError::CtrlC)?;
        tracing::info!("ctrl_c signal received");
    }

    // Graceful Shutdown Server
    handle.stop_graceful(None);

    Ok(())
}
