//! Stash catalog page and JSON API server

use std::process;

use salvo::{oapi::OpenApi, prelude::*};
use tracing::{error, info};

use stash_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

mod assets;
mod config;
mod extensions;
mod healthcheck;
mod logging;
mod pages;
mod products;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Stash server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    if let Err(error) = logging::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "the logging subscriber itself failed to install"
        )]
        {
            eprintln!("Logging error: {error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let app = match AppContext::from_data_file(&config.store.data_file).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let router = router::router(State::from_app_context(app));

    let doc = OpenApi::new("Stash API", "0.1.0").merge_router(&router);

    let router = router.push(doc.into_router("/api-doc/openapi.json"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
