use axum::{http::header, middleware::Next, response::Response};

use storefront_catalog::Segment;

use crate::context::SegmentContext;

/// Resolve the visitor segment from the `Cookie` header(s) and attach it to
/// the request as a [`SegmentContext`].
pub async fn segment_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let segment = req
        .headers()
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(Segment::from_cookie_header)
        .unwrap_or_default();

    req.extensions_mut().insert(SegmentContext::new(segment));

    next.run(req).await
}
