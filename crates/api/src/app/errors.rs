//! The one place a failure becomes an HTTP response.
//!
//! Handlers return [`ApiError`]; panics caught by the middleware stack and
//! unmatched routes come through here too.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use catalog_core::{CatalogError, ErrorKind};

pub type ApiResult<T> = Result<T, ApiError>;

/// A catalog failure on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error_response(&self.0)
    }
}

/// Log `err` in full, then answer with its status and public message.
pub fn error_response(err: &CatalogError) -> Response {
    let status = status_for(err.kind());
    if err.kind().is_classified() {
        tracing::warn!(kind = ?err.kind(), status = status.as_u16(), error = %err, "request failed");
    } else {
        tracing::error!(status = status.as_u16(), error = ?err, "unhandled error");
    }

    (status, Json(json!({ "error": err.public_message() }))).into_response()
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    StatusCode::from_u16(kind.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Panic handler for `CatchPanicLayer`.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error_response(&CatalogError::unclassified(format!("handler panicked: {detail}")))
}

/// Router fallback for paths no route matches.
pub async fn route_not_found() -> ApiError {
    CatalogError::not_found("Not Found").into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(res: Response) -> serde_json::Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn classified_errors_keep_status_and_message() {
        let res = ApiError::from(CatalogError::product_not_found()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(res).await, json!({ "error": "Product not found" }));

        let res = ApiError::from(CatalogError::validation("Missing required fields")).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(res).await, json!({ "error": "Missing required fields" }));
    }

    #[tokio::test]
    async fn unclassified_errors_are_opaque() {
        let res = ApiError::from(CatalogError::unclassified("secret: db password wrong")).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(res).await, json!({ "error": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn panics_become_internal_server_errors() {
        let res = panic_response(Box::new("index out of bounds"));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(res).await, json!({ "error": "Internal Server Error" }));
    }
}
