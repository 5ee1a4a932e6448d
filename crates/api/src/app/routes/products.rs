use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use catalog_products::{Product, ProductPage};

use crate::app::dto::{self, ListProductsParams, SearchParams};
use crate::app::errors::ApiResult;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route("/stats/categories", get(category_stats))
        .route(
            "/:id",
            get(get_product).put(replace_product).delete(delete_product),
        )
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Query<ListProductsParams>, QueryRejection>,
) -> ApiResult<Json<ProductPage>> {
    let params = dto::query(params)?;
    let page = services.catalog().list(&params.into())?;
    Ok(Json(page))
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let id = dto::product_id(id)?;
    Ok(Json(services.catalog().get_by_id(&id)?))
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let candidate = dto::product_candidate(body)?;
    let created = services.catalog().insert(&candidate)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn replace_product(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Product>> {
    let id = dto::product_id(id)?;
    let candidate = dto::product_candidate(body)?;
    Ok(Json(services.catalog().replace(&id, &candidate)?))
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = dto::product_id(id)?;
    services.catalog().remove(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn category_stats(
    Extension(services): Extension<Arc<AppServices>>,
) -> ApiResult<Json<BTreeMap<String, usize>>> {
    Ok(Json(services.catalog().stats_by_category()?))
}

pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Product>>> {
    let params = dto::query(params)?;
    Ok(Json(services.catalog().search(params.q.as_deref())?))
}
