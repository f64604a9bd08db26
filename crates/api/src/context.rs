use axum::http::{HeaderMap, Uri, header};
use url::Url;

use storefront_catalog::Segment;

/// Visitor segment for a request.
///
/// Always present on loader routes; falls back to defaults when the visitor
/// has no (or an unreadable) segment cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentContext {
    segment: Segment,
}

impl SegmentContext {
    pub fn new(segment: Segment) -> Self {
        Self { segment }
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }
}

/// Absolute URL of the inbound request as seen by the visitor.
///
/// Path and query come from the request URI. The origin comes from the URI
/// when it is absolute, otherwise from `X-Forwarded-Proto` (default `http`)
/// and `Host` (default `localhost`).
pub fn request_url(headers: &HeaderMap, uri: &Uri) -> Result<Url, url::ParseError> {
    if uri.scheme().is_some() && uri.authority().is_some() {
        return Url::parse(&uri.to_string());
    }

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .filter(|v| matches!(*v, "http" | "https"))
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    let mut url = Url::parse(&format!("{scheme}://{host}/"))?;
    url.set_path(uri.path());
    url.set_query(uri.query());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn uri(raw: &'static str) -> Uri {
        Uri::from_static(raw)
    }

    #[test]
    fn keeps_path_and_query_of_the_request() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("shop.example.com"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));

        let url = request_url(
            &headers,
            &uri("/loaders/vtex/related-products/blue-shirt?crossSelling=show-together&count=2"),
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://shop.example.com/loaders/vtex/related-products/blue-shirt?crossSelling=show-together&count=2"
        );
    }

    #[test]
    fn defaults_to_plain_http_localhost() {
        let url = request_url(&HeaderMap::new(), &uri("/blue-shirt/p")).unwrap();
        assert_eq!(url.as_str(), "http://localhost/blue-shirt/p");
    }

    #[test]
    fn absolute_uri_wins_over_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("ignored.example.com"));
        let url = request_url(&headers, &uri("https://shop.example.com/x?y=1")).unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/x?y=1");
    }

    #[test]
    fn scheme_relative_looking_path_keeps_the_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("shop.example.com"));
        let url = request_url(&headers, &uri("//evil.example.com/x")).unwrap();
        assert_eq!(url.host_str(), Some("shop.example.com"));
    }

    #[test]
    fn rejects_garbage_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("bad host"));
        assert!(request_url(&headers, &uri("/x")).is_err());
    }
}
