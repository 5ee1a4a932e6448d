use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use serde::Deserialize;

use catalog_core::CatalogError;
use catalog_products::store::{DEFAULT_LIMIT, DEFAULT_PAGE};
use catalog_products::{ListQuery, PageParam, ProductCandidate};

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /api/products`.
///
/// Page values stay raw strings so a bad value gives an empty page instead of
/// a rejected request.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsParams {
    pub category: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl From<ListProductsParams> for ListQuery {
    fn from(params: ListProductsParams) -> Self {
        ListQuery {
            category: params.category,
            page: PageParam::parse(params.page.as_deref(), DEFAULT_PAGE),
            limit: PageParam::parse(params.limit.as_deref(), DEFAULT_LIMIT),
        }
    }
}

/// Query string of `GET /api/products/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

// -------------------------
// Request mapping helpers
// -------------------------

/// Classify an extractor rejection: anything axum blames on the caller is a
/// validation failure, the rest is unclassified.
pub fn rejection(status: StatusCode, detail: String) -> CatalogError {
    if status.is_client_error() {
        CatalogError::validation(detail)
    } else {
        CatalogError::unclassified(detail)
    }
}

/// Unwrap a query extractor, classifying a malformed query string.
pub fn query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, CatalogError> {
    query
        .map(|Query(v)| v)
        .map_err(|e| rejection(e.status(), e.body_text()))
}

/// Unwrap the `:id` path segment (e.g. rejects ids that are not valid UTF-8).
pub fn product_id(path: Result<Path<String>, PathRejection>) -> Result<String, CatalogError> {
    path.map(|Path(id)| id)
        .map_err(|e| rejection(e.status(), e.body_text()))
}

/// Turn a raw request body into a candidate for the validation gate.
///
/// An empty body is a candidate with no fields. A body that could not be
/// read (e.g. over the size limit) is classified like any other rejection.
pub fn product_candidate(
    body: Result<Bytes, BytesRejection>,
) -> Result<ProductCandidate, CatalogError> {
    let body = body.map_err(|e| rejection(e.status(), e.body_text()))?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ProductCandidate::default());
    }
    serde_json::from_slice(&body)
        .map(ProductCandidate::from_value)
        .map_err(|_| CatalogError::validation("Malformed JSON body"))
}
