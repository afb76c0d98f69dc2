use thiserror::Error;

use prova_api::ApiError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — run `prova auth login`")]
    NotAuthenticated,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("sign-in request failed: {0}")]
    SignIn(#[source] ApiError),

    #[error("token store error: {0}")]
    TokenStore(String),
}
