//! Authenticated session state for the current visit.

use prova_api::{ApiClient, ApiError};

use crate::{error::AuthError, token_store};

/// Process-wide authentication state holding the bearer token.
///
/// Exclusively owns the session: created at application start, cleared on
/// logout or reset. Absence of a token means "not ready" — no dependent may
/// attempt an authorized request.
#[derive(Debug, Default)]
pub struct SessionStore {
    token: Option<String>,
}

impl SessionStore {
    /// Start a session, restoring a persisted token if one exists
    /// (keyring → env → credentials file).
    #[must_use]
    pub fn init() -> Self {
        Self {
            token: token_store::load(),
        }
    }

    /// Start an unauthenticated session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build a session around an already-known token. Used by tests and by
    /// callers that manage persistence themselves.
    #[must_use]
    pub fn from_token(token: Option<String>) -> Self {
        Self { token }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Sign in and store the resulting token.
    ///
    /// The token is readable via [`Self::token`] as soon as this resolves —
    /// no stale read of a previous token is possible afterwards. The token is
    /// also persisted so the session survives process restarts; persistence
    /// failures are logged but do not fail the login.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the server refuses the
    /// credentials, [`AuthError::SignIn`] when the request itself fails. No
    /// retry: a failed login leaves the session unchanged.
    pub async fn login(
        &mut self,
        api: &ApiClient,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let token = api.sign_in(email, password).await.map_err(|err| match err {
            ApiError::InvalidCredentials => AuthError::InvalidCredentials,
            other => AuthError::SignIn(other),
        })?;

        if let Err(error) = token_store::store(&token) {
            tracing::warn!(%error, "failed to persist token; session is in-memory only");
        }
        self.token = Some(token);
        Ok(())
    }

    /// End the session: clear the in-memory token and delete the persisted one.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStore`] if the persisted credentials cannot
    /// be removed; the in-memory token is cleared regardless.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.token = None;
        token_store::delete()
    }

    /// Clear the in-memory token without touching persisted credentials.
    pub fn reset(&mut self) {
        self.token = None;
    }

    /// Which tier the current persisted token came from, for status display.
    #[must_use]
    pub fn token_source() -> Option<String> {
        token_store::detect_token_source()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn anonymous_session_has_no_token() {
        let session = SessionStore::anonymous();
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn from_token_is_authenticated() {
        let session = SessionStore::from_token(Some("tok".into()));
        assert_eq!(session.token(), Some("tok"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn reset_clears_in_memory_token() {
        let mut session = SessionStore::from_token(Some("tok".into()));
        session.reset();
        assert_eq!(session.token(), None);
    }

    #[tokio::test]
    async fn failed_login_leaves_session_unchanged() {
        // Nothing listens on this address; the request errors fast.
        let api = ApiClient::new("http://127.0.0.1:9");
        let mut session = SessionStore::anonymous();

        let result = session.login(&api, "ana@driven.com.br", "s3nh4").await;
        assert!(matches!(result, Err(AuthError::SignIn(_))));
        assert_eq!(session.token(), None);
    }
}
