use axum::http::StatusCode;

pub const WELCOME: &str = "Welcome to the Product API! Go to /api/products to see all products.";

pub async fn welcome() -> &'static str {
    WELCOME
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
