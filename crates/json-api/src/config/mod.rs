//! Server configuration module

use clap::Parser;

use crate::config::{
    logging::LoggingConfig, server::ServerRuntimeConfig, store::StoreConfig,
};

pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod store;

/// Stash server configuration
#[derive(Debug, Parser)]
#[command(name = "stash-json", about = "Stash catalog server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Product store settings.
    #[command(flatten)]
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_bind_port_5000_with_the_bundled_data_file() -> TestResult {
        let config = ServerConfig::try_parse_from(["stash-json"])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:5000");
        assert_eq!(config.store.data_file, Path::new("data/products.json"));
        assert_eq!(config.logging.log_level, "info");

        Ok(())
    }

    #[test]
    fn cli_arguments_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "stash-json",
            "--port",
            "8080",
            "--data-file",
            "/tmp/stash.json",
        ])?;

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.data_file, Path::new("/tmp/stash.json"));

        Ok(())
    }
}
