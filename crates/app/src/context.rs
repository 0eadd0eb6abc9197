//! App Context

use std::{path::Path, sync::Arc};

use thiserror::Error;
use tokio::fs;
use tracing::info;

use crate::domain::products::{FileProductsService, ProductsService};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to prepare product store")]
    Store(#[source] std::io::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context from a product data file path.
    ///
    /// Creates the data directory and seeds an empty collection when the
    /// file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the data directory or seed file cannot be
    /// created.
    pub async fn from_data_file(path: &Path) -> Result<Self, AppInitError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await.map_err(AppInitError::Store)?;
        }

        if !fs::try_exists(path).await.map_err(AppInitError::Store)? {
            fs::write(path, "[]").await.map_err(AppInitError::Store)?;

            info!("seeded empty product store at {}", path.display());
        }

        Ok(Self {
            products: Arc::new(FileProductsService::new(path)),
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn from_data_file_seeds_an_empty_collection() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("data").join("products.json");

        let app = AppContext::from_data_file(&path).await?;

        assert_eq!(std::fs::read_to_string(&path)?, "[]");
        assert!(app.products.list_products().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn from_data_file_keeps_an_existing_collection() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("products.json");

        std::fs::write(
            &path,
            r#"[{
                "id": "a3bb189e-8bf9-3888-9912-ace4e6543002",
                "title": "Widget",
                "url": "http://x.test",
                "created_at": "2024-05-04T10:30:00Z"
            }]"#,
        )?;

        let app = AppContext::from_data_file(&path).await?;

        assert_eq!(app.products.list_products().await?.len(), 1);

        Ok(())
    }
}
