//! Shared HTTP response helpers for the API client.
//!
//! Centralizes status-code mapping so individual endpoint modules stay
//! focused on request construction and response decoding: a non-success
//! status with a body becomes [`ApiError::Rejected`] (server text surfaced
//! verbatim), one without a body becomes [`ApiError::EmptyFailure`].

use crate::error::ApiError;

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success.
///
/// # Errors
///
/// - Non-success status with a body → [`ApiError::Rejected`]
/// - Non-success status without a body → [`ApiError::EmptyFailure`]
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp.text().await.unwrap_or_default();
    if message.is_empty() {
        Err(ApiError::EmptyFailure {
            status: status.as_u16(),
        })
    } else {
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn rejection_with_body_surfaces_text() {
        let resp = mock_response(400, "Categoria inválida");
        let err = check_response(resp).await.unwrap_err();
        match err {
            ApiError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Categoria inválida");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejection_without_body_is_empty_failure() {
        let resp = mock_response(502, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::EmptyFailure { status: 502 }));
        assert!(err.is_network());
        assert!(err.server_message().is_none());
    }
}
