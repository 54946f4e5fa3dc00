//! Application error taxonomy and HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::utils::db_error::is_unique_violation_on_code;

/// JSON error envelope returned by the creation endpoint.
#[derive(Serialize)]
struct ErrorBody {
    erro: String,
}

/// Errors crossing the core/façade boundary.
///
/// Collisions consumed by the allocator's retry loop never reach here;
/// everything else is translated into a transport status exactly once, at
/// the response boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request body, or a missing/empty target URL.
    #[error("{0}")]
    Validation(String),

    /// No short link stored under the requested code.
    #[error("short link not found")]
    NotFound,

    /// Insert hit the primary-key constraint: the code is already taken.
    #[error("short code already taken")]
    DuplicateCode,

    /// The allocator exhausted its attempt budget without a unique insert.
    #[error("could not allocate a unique short code")]
    CodeSpaceExhausted,

    /// Underlying database failure.
    #[error("storage failure")]
    Storage(#[source] sqlx::Error),
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::DuplicateCode => StatusCode::CONFLICT,
            AppError::CodeSpaceExhausted | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to expose to the caller.
    ///
    /// Storage causes stay in the logs; the caller only sees a generic
    /// message.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Storage(_) => "internal storage error".to_string(),
            other => other.to_string(),
        }
    }

    /// Plain-text rendition used by the redirect path.
    pub fn into_plain_response(self) -> Response {
        self.log();
        (self.status_code(), self.public_message()).into_response()
    }

    fn log(&self) {
        match self {
            AppError::Storage(cause) => {
                tracing::error!(%cause, "storage failure");
            }
            AppError::CodeSpaceExhausted => {
                tracing::error!("short code allocation exhausted its attempt budget");
            }
            _ => {}
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let body = ErrorBody {
            erro: self.public_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Maps a raw SQLx error into the application taxonomy.
///
/// A unique-constraint violation on the `links` primary key means the drawn
/// code is already taken, which the allocator treats as a retry trigger
/// rather than a fatal storage error.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if is_unique_violation_on_code(&e) {
        return AppError::DuplicateCode;
    }

    AppError::Storage(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::DuplicateCode.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::CodeSpaceExhausted.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_message_is_generic() {
        let err = AppError::Storage(sqlx::Error::PoolClosed);
        assert_eq!(err.public_message(), "internal storage error");
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = AppError::Validation("link must not be empty".into());
        assert_eq!(err.public_message(), "link must not be empty");
    }

    #[test]
    fn test_map_sqlx_error_non_unique_is_storage() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Storage(_)));
    }
}
