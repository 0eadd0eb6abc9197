//! Catalog Page Handler

use std::sync::Arc;

use salvo::{prelude::*, writing::Text};

use crate::{
    extensions::*,
    pages::html::{self, FormValues},
    state::State,
};

/// Catalog Page Handler
///
/// Reads the full collection and renders the catalog page.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Text<String>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .or_500("failed to fetch products")?;

    Ok(Text::Html(html::render_page(
        &products,
        None,
        &FormValues::default(),
    )))
}
