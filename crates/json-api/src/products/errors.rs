//! Product API Errors

use salvo::{
    Depot, Request, Response, Writer, async_trait,
    http::{StatusCode, StatusError},
    oapi::{self, EndpointOutRegister, ToSchema},
    writing::Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use stash_app::domain::products::ProductsServiceError;

/// JSON error body carrying the `error` text field the API promises.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

/// An API error rendered as a JSON `{"error": …}` body.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }

    pub(crate) fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "not found".to_string(),
        }
    }

    pub(crate) fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "internal server error".to_string(),
        }
    }
}

impl From<ProductsServiceError> for ApiError {
    fn from(error: ProductsServiceError) -> Self {
        match error {
            ProductsServiceError::MissingRequiredData => {
                Self::bad_request("title and url are required")
            }
            ProductsServiceError::NotFound => Self::not_found(),
            ProductsServiceError::Store(source) => {
                error!("product store failure: {source}");

                Self::internal()
            }
        }
    }
}

impl From<StatusError> for ApiError {
    fn from(error: StatusError) -> Self {
        Self {
            status: error.code,
            message: error.brief,
        }
    }
}

#[async_trait]
impl Writer for ApiError {
    async fn write(self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorBody {
            error: self.message,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut oapi::Components, operation: &mut oapi::Operation) {
        let schema = ErrorBody::to_schema(components);

        for (code, description) in [
            (StatusCode::BAD_REQUEST, "Bad Request"),
            (StatusCode::NOT_FOUND, "Not Found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation.responses.insert(
                code.as_str(),
                oapi::Response::new(description).add_content("application/json", schema.clone()),
            );
        }
    }
}
