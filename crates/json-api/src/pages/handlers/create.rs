//! Create Product Page Handler

use std::sync::Arc;

use salvo::{
    prelude::*,
    writing::Redirect,
};
use serde::Deserialize;

use stash_app::domain::products::{ProductsServiceError, data::NewProduct};

use crate::{
    extensions::*,
    pages::html::FormValues,
    state::State,
};

use super::render_catalog;

/// Creation form fields, as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CreateProductForm {
    pub title: String,
    pub url: String,
    pub price: String,
    pub image: String,
    pub notes: String,
}

impl From<&CreateProductForm> for FormValues {
    fn from(form: &CreateProductForm) -> Self {
        Self {
            title: form.title.clone(),
            url: form.url.clone(),
            price: form.price.clone(),
            image: form.image.clone(),
            notes: form.notes.clone(),
        }
    }
}

impl From<CreateProductForm> for NewProduct {
    fn from(form: CreateProductForm) -> Self {
        Self {
            title: form.title.trim().to_string(),
            url: form.url.trim().to_string(),
            price: form.price.trim().to_string(),
            image: form.image.trim().to_string(),
            notes: form.notes.trim().to_string(),
        }
    }
}

/// Create Product Page Handler
///
/// Validates the creation form, writes through the service and redirects
/// back to the catalog. A rejected submission re-renders the page with an
/// alert and the submitted values preserved.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let form: CreateProductForm = req
        .parse_form()
        .await
        .map_err(|_ignored| StatusError::bad_request())?;

    if form.title.trim().is_empty() || form.url.trim().is_empty() {
        return render_catalog(
            state,
            StatusCode::BAD_REQUEST,
            "Title and URL are required.",
            &FormValues::from(&form),
            res,
        )
        .await;
    }

    match state.app.products.create_product(form.clone().into()).await {
        Ok(_created) => {
            res.render(Redirect::other("/"));

            Ok(())
        }
        Err(error) => {
            let status = match &error {
                ProductsServiceError::MissingRequiredData => StatusCode::BAD_REQUEST,
                ProductsServiceError::NotFound => StatusCode::NOT_FOUND,
                ProductsServiceError::Store(source) => {
                    tracing::error!("failed to create product: {source}");

                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };

            render_catalog(
                state,
                status,
                &format!("Error: {error}"),
                &FormValues::from(&form),
                res,
            )
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stash_app::domain::products::{
        MockProductsService, ProductsServiceError, ProductsStoreError, models::ProductUuid,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").post(handler))
    }

    fn post_form(body: &'static str) -> salvo::test::RequestBuilder {
        TestClient::post("http://example.com/products")
            .add_header("content-type", "application/x-www-form-urlencoded", true)
            .body(body)
    }

    #[tokio::test]
    async fn test_valid_submission_creates_and_redirects() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid, "Widget");

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| {
                new.title == "Widget"
                    && new.url == "http://x.test"
                    && new.price.is_empty()
                    && new.image.is_empty()
                    && new.notes.is_empty()
            })
            .return_once(move |_| Ok(product));

        repo.expect_list_products().never();
        repo.expect_delete_product().never();

        let res = post_form("title=Widget&url=http://x.test")
            .send(&make_service(repo))
            .await;

        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));
        assert_eq!(location, Some("/"));

        Ok(())
    }

    #[tokio::test]
    async fn test_submitted_values_are_trimmed() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid, "Widget");

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| new.title == "Widget" && new.url == "http://x.test")
            .return_once(move |_| Ok(product));

        let res = post_form("title=++Widget++&url=++http://x.test++")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_title_issues_no_write() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();
        repo.expect_delete_product().never();
        repo.expect_list_products().once().return_once(|| Ok(vec![]));

        let mut res = post_form("title=&url=http://x.test")
            .send(&make_service(repo))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(body.contains("Title and URL are required."));
        assert!(
            body.contains(r#"value="http://x.test""#),
            "submitted values must be preserved"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_url_issues_no_write() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();
        repo.expect_list_products().once().return_once(|| Ok(vec![]));

        let mut res = post_form("title=Widget&url=")
            .send(&make_service(repo))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(body.contains("Title and URL are required."));

        Ok(())
    }

    #[tokio::test]
    async fn test_store_failure_re_renders_with_the_error_message() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().once().return_once(|_| {
            Err(ProductsServiceError::Store(ProductsStoreError::Io(
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            )))
        });

        repo.expect_list_products().once().return_once(|| Ok(vec![]));

        let mut res = post_form("title=Widget&url=http://x.test")
            .send(&make_service(repo))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(body.contains("Error: storage error"));
        assert!(
            body.contains(r#"value="Widget""#),
            "submitted values must be preserved"
        );

        Ok(())
    }
}
