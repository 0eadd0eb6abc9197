//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use stash_app::{
    context::AppContext,
    domain::products::{
        MockProductsService,
        models::{Product, ProductUuid},
    },
};

use crate::state::State;

pub(crate) fn make_product(uuid: ProductUuid, title: &str) -> Product {
    Product {
        uuid,
        title: title.to_string(),
        url: "http://x.test".to_string(),
        price: "9.99".to_string(),
        image: String::new(),
        notes: String::new(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        products: Arc::new(products),
    }))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}
