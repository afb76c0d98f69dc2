//! Shared application resources initialized once at startup.

use anyhow::Context;

use prova_api::ApiClient;
use prova_auth::{AuthError, SessionStore};
use prova_config::ProvaConfig;
use prova_core::AlertChannel;

pub struct AppContext {
    pub config: ProvaConfig,
    pub api: ApiClient,
    pub session: SessionStore,
    pub alerts: AlertChannel,
}

impl AppContext {
    /// Load configuration, restore the session, and build the API client.
    ///
    /// # Errors
    ///
    /// Fails when configuration cannot be loaded or the API base URL is not
    /// configured.
    pub fn init() -> anyhow::Result<Self> {
        let config = ProvaConfig::load_with_dotenv().context("failed to load configuration")?;
        config
            .ensure_configured()
            .context("set PROVA_API__BASE_URL or add api.base_url to .prova/config.toml")?;

        let api = ApiClient::new(config.api.base_url.clone());
        let session = SessionStore::init();

        Ok(Self {
            config,
            api,
            session,
            alerts: AlertChannel::new(),
        })
    }

    /// The session token, or a not-authenticated error for commands that
    /// need one.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] when the session has no token.
    pub fn require_token(&self) -> Result<String, AuthError> {
        self.session
            .token()
            .map(str::to_owned)
            .ok_or(AuthError::NotAuthenticated)
    }
}
