//! Delete Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use stash_app::domain::products::models::ProductUuid;

use crate::{extensions::*, products::errors::ApiError, state::State};

/// Product Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDeletedResponse {
    /// Whether the product was deleted
    pub success: bool,
}

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    // Ids are matched against backend-assigned uuids; an unparseable id is
    // indistinguishable from an unknown one.
    let uuid: ProductUuid = id
        .into_inner()
        .parse()
        .map_err(|_ignored| ApiError::not_found())?;

    state.app.products.delete_product(uuid).await?;

    Ok(Json(ProductDeletedResponse { success: true }))
}
