//! Product Store Config

use std::path::PathBuf;

use clap::Args;

/// Product store settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Path of the JSON product data file
    #[arg(long, env = "DATA_FILE", default_value = "data/products.json")]
    pub data_file: PathBuf,
}
