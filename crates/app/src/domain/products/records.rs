//! Product Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::domain::products::models::{Product, ProductUuid};

/// Product Record
///
/// The persisted JSON shape of a product. The UUID is stored under the
/// wire field name `id`; timestamps are RFC 3339 text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductUuid,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: Timestamp,
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            id: product.uuid,
            title: product.title,
            url: product.url,
            price: product.price,
            image: product.image,
            notes: product.notes,
            created_at: product.created_at,
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            uuid: record.id,
            title: record.title,
            url: record.url,
            price: record.price,
            image: record.image,
            notes: record.notes,
            created_at: record.created_at,
        }
    }
}
