//! Host extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Extracts the host from the `Host` header, port included.
///
/// The value is used verbatim as the authority of generated short URLs, so
/// a non-default port must survive (`localhost:3000` stays
/// `localhost:3000`).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the header is missing or contains
/// invalid UTF-8.
pub fn extract_host(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::Validation("missing Host header".to_string()))?
        .to_str()
        .map_err(|_| AppError::Validation("invalid Host header".to_string()))?;

    Ok(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    #[test]
    fn test_extract_host_simple() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com"));

        assert_eq!(extract_host(&headers).unwrap(), "example.com");
    }

    #[test]
    fn test_extract_host_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

        assert_eq!(extract_host(&headers).unwrap(), "localhost:3000");
    }

    #[test]
    fn test_extract_host_missing_header() {
        let headers = HeaderMap::new();

        let result = extract_host(&headers);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_extract_host_invalid_utf8() {
        let mut headers = HeaderMap::new();
        let invalid_bytes = vec![0xFF, 0xFE, 0xFD];
        if let Ok(header_value) = HeaderValue::from_bytes(&invalid_bytes) {
            headers.insert(header::HOST, header_value);

            assert!(extract_host(&headers).is_err());
        }
    }
}
