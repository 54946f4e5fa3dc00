//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Answers `302 Found` with the stored target in the `Location` header.
/// Failures are plain-text bodies: 404 for an unknown code, 500 for a
/// storage failure. This path never speaks the JSON error envelope.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.link_service.resolve(&code).await {
        Ok(target) => {
            tracing::debug!(%code, "redirecting");
            (StatusCode::FOUND, [(header::LOCATION, target)]).into_response()
        }
        Err(err) => err.into_plain_response(),
    }
}
