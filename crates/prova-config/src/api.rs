//! Backend API configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the prova backend (e.g., `https://prova.example.com/api`).
    #[serde(default)]
    pub base_url: String,
}

impl ApiConfig {
    /// Check if the API section has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }
}
