//! Handler for the link creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /encurtar`
///
/// # Request Body
///
/// ```json
/// { "link": "https://example.com/a/b" }
/// ```
///
/// # Response
///
/// ```json
/// { "link_curto": "http://localhost:3000/Qx9Tb1" }
/// ```
///
/// The short URL is built from `PUBLIC_URL` when configured, otherwise from
/// the request's `Host` header with an `http` scheme.
///
/// # Errors
///
/// All failures answer with the `{"erro": "..."}` envelope: 400 for a
/// malformed body or a missing/empty `link`, 500 for storage failures or
/// code allocation exhaustion.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) =
        payload.map_err(|e| AppError::Validation(format!("invalid request body: {}", e.body_text())))?;

    payload.validate()?;

    let link = state.link_service.shorten(&payload.link).await?;

    let base_url = match &state.public_url {
        Some(url) => url.clone(),
        None => format!("http://{}", extract_host(&headers)?),
    };

    let link_curto = state.link_service.short_url(&base_url, &link.code);

    tracing::info!(code = %link.code, "short link created");

    Ok(Json(ShortenResponse { link_curto }))
}
