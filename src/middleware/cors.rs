use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use url::Url;

/// CORS policy for the browser frontend served from `frontend`.
///
/// Only the frontend's origin is allowed, with credentials; other origins
/// get no allow-origin header at all.
pub fn frontend_cors(frontend: &Url) -> CorsLayer {
    let origin = HeaderValue::from_str(&frontend.origin().ascii_serialization())
        .unwrap_or_else(|_| HeaderValue::from_static("null"));

    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_drops_path_and_trailing_slash() {
        let url = Url::parse("http://localhost:3000/app/").unwrap();
        assert_eq!(url.origin().ascii_serialization(), "http://localhost:3000");
        let _layer = frontend_cors(&url);
    }
}
