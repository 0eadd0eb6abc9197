//! Delete Product Page Handler

use std::sync::Arc;

use salvo::{prelude::*, writing::Redirect};

use stash_app::domain::products::{ProductsServiceError, models::ProductUuid};

use crate::{extensions::*, pages::html::FormValues, state::State};

use super::render_catalog;

/// Delete Product Page Handler
///
/// One stable route serves every card's delete form. On success the
/// browser is redirected back to the catalog for a full refresh; on
/// failure the page is re-rendered with a generic notice.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let id = req
        .param::<String>("id")
        .ok_or_else(StatusError::bad_request)?;

    // An unparseable id cannot match any backend-assigned uuid.
    let result = match id.parse::<ProductUuid>() {
        Ok(uuid) => state.app.products.delete_product(uuid).await,
        Err(_) => Err(ProductsServiceError::NotFound),
    };

    match result {
        Ok(()) => {
            res.render(Redirect::other("/"));

            Ok(())
        }
        Err(error) => {
            let status = match &error {
                ProductsServiceError::NotFound => StatusCode::NOT_FOUND,
                ProductsServiceError::MissingRequiredData => StatusCode::BAD_REQUEST,
                ProductsServiceError::Store(source) => {
                    tracing::error!("failed to delete product: {source}");

                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };

            render_catalog(state, status, "Failed to delete", &FormValues::default(), res).await
        }
    }
}
