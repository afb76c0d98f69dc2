//! Account endpoints: sign-up and sign-in.

use serde::{Deserialize, Serialize};

use crate::{ApiClient, error::ApiError, http::check_response};

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

impl ApiClient {
    /// Register a new account via `POST /sign-up`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the server's message when the
    /// request is refused (e.g., email already in use), or a transport error.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/sign-up"))
            .json(&Credentials { email, password })
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }

    /// Exchange credentials for a bearer token via `POST /sign-in`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredentials`] when the server refuses the
    /// credentials (401/403), or a transport error when unreachable.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let resp = self
            .http
            .post(self.url("/sign-in"))
            .json(&Credentials { email, password })
            .send()
            .await?;

        match check_response(resp).await {
            Ok(resp) => {
                let data: TokenResponse = resp.json().await?;
                Ok(data.token)
            }
            Err(err) => Err(map_sign_in_error(err)),
        }
    }
}

/// Collapse a sign-in refusal (401/403, with or without a body) into
/// [`ApiError::InvalidCredentials`]; every other failure passes through.
fn map_sign_in_error(err: ApiError) -> ApiError {
    match err {
        ApiError::Rejected {
            status: 401 | 403, ..
        }
        | ApiError::EmptyFailure { status: 401 | 403 } => ApiError::InvalidCredentials,
        other => other,
    }
}
