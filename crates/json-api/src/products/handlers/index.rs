//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stash_app::domain::products::models::Product;

use crate::{extensions::*, products::errors::ApiError, state::State};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    /// The product title
    pub title: String,

    /// The destination link
    pub url: String,

    /// Free-form price text
    pub price: String,

    /// Image URL; empty when absent
    pub image: String,

    /// Free-form notes
    pub notes: String,

    /// The date and time the product was created
    pub created_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.uuid.into_uuid(),
            title: product.title,
            url: product.url,
            price: product.price,
            image: product.image,
            notes: product.notes,
            created_at: product.created_at.to_string(),
        }
    }
}

/// Product Index Handler
///
/// Returns the full product collection, newest first.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state.app.products.list_products().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
