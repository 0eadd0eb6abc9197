//! Embedded static assets.

use salvo::{prelude::*, writing::Text};

const STYLESHEET: &str = include_str!("../assets/style.css");

/// Serves the catalog stylesheet.
#[handler]
pub(crate) async fn stylesheet() -> Text<&'static str> {
    Text::Css(STYLESHEET)
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_stylesheet_is_served_as_css() -> TestResult {
        let router = Router::new().push(Router::with_path("assets/style.css").get(stylesheet));

        let mut res = TestClient::get("http://example.com/assets/style.css")
            .send(&Service::new(router))
            .await;

        let content_type = res
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(content_type.starts_with("text/css"), "got {content_type}");
        assert!(body.contains(".product"));

        Ok(())
    }
}
