//! Typed errors for REST calls.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Too many requests")]
    RateLimited,

    #[error("Backend error: {0}")]
    ServerError(String),

    #[error("Request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    #[error("Refusing plain HTTP request from a secure context: {0}")]
    InsecureRequest(String),
}

/// Response bodies are cut to this many bytes in error messages.
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            404 => ApiError::NotFound(truncated),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(truncated),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_mapping() {
        let map = ApiError::from_status;
        assert!(matches!(map(StatusCode::NOT_FOUND, "gone"), ApiError::NotFound(b) if b == "gone"));
        assert!(matches!(map(StatusCode::TOO_MANY_REQUESTS, ""), ApiError::RateLimited));
        assert!(matches!(map(StatusCode::BAD_GATEWAY, ""), ApiError::ServerError(_)));
        assert!(matches!(map(StatusCode::FORBIDDEN, "no"), ApiError::InvalidResponse(_)));
    }

    #[test]
    fn test_long_body_is_truncated() {
        let body = "ä".repeat(400); // 800 bytes, multi-byte chars
        match ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body) {
            ApiError::ServerError(msg) => {
                assert!(msg.contains("truncated, 800 total bytes"));
                assert!(msg.len() < body.len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
