use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Answer every `OPTIONS` request with an empty `200 OK`.
///
/// Runs inside the CORS layer, so the allow-origin headers still land on
/// the response even when the request is not a full CORS preflight.
pub async fn answer_preflight(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(req).await
}
