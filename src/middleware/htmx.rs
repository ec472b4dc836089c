use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Detects a hypermedia-partial-update client via the `HX-Request: true`
/// header. Handlers use it to decide between an HTML fragment and a
/// structured JSON payload.
#[derive(Clone, Copy, Debug)]
pub struct HxRequest(pub bool);

impl<S> FromRequestParts<S> for HxRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts
            .headers
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(HxRequest(is_htmx))
    }
}
