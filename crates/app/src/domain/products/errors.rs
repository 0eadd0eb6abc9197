//! Products service errors.

use thiserror::Error;

/// Errors raised by the product store.
#[derive(Debug, Error)]
pub enum ProductsStoreError {
    #[error("failed to access product store")]
    Io(#[source] std::io::Error),

    #[error("malformed product store")]
    Encoding(#[source] serde_json::Error),

    #[error("product not found")]
    NotFound,
}

/// Errors raised by the products service.
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("missing required data")]
    MissingRequiredData,

    #[error("product not found")]
    NotFound,

    #[error("storage error")]
    Store(#[source] ProductsStoreError),
}

impl From<ProductsStoreError> for ProductsServiceError {
    fn from(error: ProductsStoreError) -> Self {
        match error {
            ProductsStoreError::NotFound => Self::NotFound,
            other => Self::Store(other),
        }
    }
}
