//! Products service.

use std::path::PathBuf;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::domain::products::{
    data::NewProduct,
    errors::ProductsServiceError,
    models::{Product, ProductUuid},
    records::ProductRecord,
    repository::JsonFileStore,
};

/// Products service backed by the JSON-file store.
#[derive(Debug)]
pub struct FileProductsService {
    store: JsonFileStore,
}

impl FileProductsService {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }
}

#[async_trait]
impl ProductsService for FileProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let records = self.store.list().await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let title = product.title.trim();
        let url = product.url.trim();

        if title.is_empty() || url.is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        let product = Product {
            uuid: ProductUuid::new(),
            title: title.to_string(),
            url: url.to_string(),
            price: product.price.trim().to_string(),
            image: product.image.trim().to_string(),
            notes: product.notes.trim().to_string(),
            created_at: Timestamp::now(),
        };

        self.store
            .prepend(ProductRecord::from(product.clone()))
            .await?;

        Ok(product)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        self.store.remove(product).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in stored (newest-first) order.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Creates a new product from the submitted draft.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Deletes the product with the given UUID.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}
