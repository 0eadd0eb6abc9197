//! Page Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;

use salvo::{http::StatusCode, prelude::*, writing::Text};

use crate::{
    extensions::*,
    pages::html::{self, FormValues},
    state::State,
};

/// Re-renders the catalog with an alert after a rejected submission.
async fn render_catalog(
    state: &State,
    status: StatusCode,
    alert: &str,
    form: &FormValues,
    res: &mut Response,
) -> Result<(), StatusError> {
    let products = state
        .app
        .products
        .list_products()
        .await
        .or_500("failed to fetch products")?;

    res.status_code(status);
    res.render(Text::Html(html::render_page(&products, Some(alert), form)));

    Ok(())
}
