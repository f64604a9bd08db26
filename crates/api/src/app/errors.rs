use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_loaders::LoaderError;

pub fn loader_error_to_response(loader: &str, err: LoaderError) -> axum::response::Response {
    tracing::warn!(loader, "loader failed: {err}");
    match err {
        LoaderError::Catalog(e) => json_error(StatusCode::BAD_GATEWAY, "upstream_error", e.to_string()),
        LoaderError::MissingSku { .. } => json_error(
            StatusCode::BAD_GATEWAY,
            "malformed_upstream_record",
            err.to_string(),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
