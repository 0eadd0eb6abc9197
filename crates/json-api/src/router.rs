//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{assets, healthcheck, pages, products, state::State};

pub(crate) fn router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .get(pages::handlers::index::handler)
        .push(
            Router::with_path("products")
                .post(pages::handlers::create::handler)
                .push(Router::with_path("{id}/delete").post(pages::handlers::delete::handler)),
        )
        .push(Router::with_path("assets/style.css").get(assets::stylesheet))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api/products")
                .get(products::handlers::index::handler)
                .post(products::handlers::create::handler)
                .push(Router::with_path("{id}").delete(products::handlers::delete::handler)),
        )
}
