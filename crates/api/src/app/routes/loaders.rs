use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{OriginalUri, Path, Query, rejection::QueryRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::json;

use storefront_loaders::{Loader, LoaderRequest, RelatedProductsProps};

use crate::app::errors::{json_error, loader_error_to_response};
use crate::app::services::AppServices;
use crate::context::{SegmentContext, request_url};

/// Envelope for a loader result; `data` is `null` when the loader declined.
#[derive(Debug, Serialize)]
struct LoaderResponse<T> {
    data: Option<T>,
}

pub async fn list(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(json!({ "loaders": services.loaders() }))
}

pub async fn related_products(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(segment): Extension<SegmentContext>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Path(slug): Path<String>,
    props: Result<Query<RelatedProductsProps>, QueryRejection>,
) -> axum::response::Response {
    let Query(props) = match props {
        Ok(q) => q,
        Err(e) => return json_error(StatusCode::BAD_REQUEST, "invalid_props", e.body_text()),
    };

    let url = match request_url(&headers, &uri) {
        Ok(url) => url,
        Err(e) => return json_error(StatusCode::BAD_REQUEST, "invalid_host", e.to_string()),
    };

    let request = LoaderRequest {
        url,
        slug,
        segment: segment.segment().clone(),
    };

    let loader = &services.related_products;
    match loader.load(&request, props).await {
        Ok(data) => (StatusCode::OK, Json(LoaderResponse { data })).into_response(),
        Err(e) => loader_error_to_response(loader.info().name, e),
    }
}
