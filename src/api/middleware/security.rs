//! Security middleware for HTTP headers and request validation

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::types::{ApiError, ApiErrorType};

/// Largest accepted request body; a laptop description is a few hundred bytes
pub const MAX_BODY_SIZE: usize = 64 * 1024;

pub(crate) const UI_CSP: &str = "default-src 'self'; \
     script-src 'self' 'unsafe-inline'; \
     style-src 'self' 'unsafe-inline'; \
     connect-src 'self'; \
     img-src 'self' data:; \
     frame-ancestors 'none'";

pub(crate) const API_CSP: &str = "default-src 'none'; frame-ancestors 'none'";

/// Adds security headers to every response; the UI gets a looser CSP
pub async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let is_ui_path = request.uri().path().starts_with("/ui");
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(if is_ui_path { UI_CSP } else { API_CSP }),
    );

    if !is_ui_path && !headers.contains_key(header::CACHE_CONTROL) {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }

    response
}

/// Rejects oversized bodies and suspicious paths before routing
pub async fn request_guard_middleware(request: Request<Body>, next: Next) -> Response {
    let content_length = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());

    if let Err(error) = validate_content_length(content_length) {
        return error.into_response();
    }
    if let Err(error) = validate_path(request.uri().path()) {
        return error.into_response();
    }

    next.run(request).await
}

pub fn validate_content_length(content_length: Option<usize>) -> Result<(), ApiError> {
    match content_length {
        Some(len) if len > MAX_BODY_SIZE => Err(ApiError::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            ApiErrorType::InvalidRequestError,
            format!(
                "Request body too large: {} bytes (max: {} bytes)",
                len, MAX_BODY_SIZE
            ),
        )
        .with_code("payload_too_large")),
        _ => Ok(()),
    }
}

pub fn validate_path(path: &str) -> Result<(), ApiError> {
    if path.contains("..") || path.contains("//") {
        return Err(
            ApiError::bad_request("Invalid path: path traversal detected")
                .with_code("invalid_path"),
        );
    }
    if path.contains('\0') {
        return Err(
            ApiError::bad_request("Invalid request: prohibited characters")
                .with_code("invalid_path"),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_content_length() {
        assert!(validate_content_length(None).is_ok());
        assert!(validate_content_length(Some(512)).is_ok());
        assert!(validate_content_length(Some(MAX_BODY_SIZE)).is_ok());

        let err = validate_content_length(Some(MAX_BODY_SIZE + 1)).unwrap_err();
        assert_eq!(err.status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.response.error.code.as_deref(), Some("payload_too_large"));
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("/v1/predict").is_ok());
        assert!(validate_path("/ui/index.html").is_ok());
        assert!(validate_path("/ui/../config/default.toml").is_err());
        assert!(validate_path("/v1//predict").is_err());
        assert!(validate_path("/v1/predict\0").is_err());
    }
}
