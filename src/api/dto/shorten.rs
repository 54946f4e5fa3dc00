//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. Stored verbatim; only required to be
    /// non-empty.
    #[validate(length(min = 1, message = "link must not be empty"))]
    pub link: String,
}

/// Successful creation response carrying the full short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub link_curto: String,
}
