use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

use crate::api::ApiError;

const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

/// Headers attached to every outgoing request.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(X_REQUESTED_WITH, HeaderValue::from_static("XMLHttpRequest"));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}

/// Refuse plain-HTTP requests when the client runs in a secure context.
pub fn check_transport(url: &str, secure_context: bool) -> Result<(), ApiError> {
    if secure_context && url.get(..7).is_some_and(|s| s.eq_ignore_ascii_case("http://")) {
        warn!(url = url, "Blocking insecure HTTP request in HTTPS context");
        return Err(ApiError::InsecureRequest(url.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let headers = default_headers();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers["x-requested-with"], "XMLHttpRequest");
        assert_eq!(headers[header::CACHE_CONTROL], "no-cache");
        assert_eq!(headers[header::PRAGMA], "no-cache");
    }

    #[test]
    fn test_check_transport() {
        assert!(check_transport("https://tacticalteam.de/api/v1/members", true).is_ok());
        assert!(check_transport("http://localhost:8080/members", false).is_ok());
        assert!(matches!(
            check_transport("http://tacticalteam.de/api/v1/members", true),
            Err(ApiError::InsecureRequest(_))
        ));
    }
}
