//! # prova-api
//!
//! Typed HTTP client for the prova backend.
//!
//! Translates domain operations into authenticated REST calls:
//! - `POST /sign-up`, `POST /sign-in` (no auth)
//! - `GET /tests?groupBy=disciplines|teachers`, `GET /categories`
//! - `GET /tests/info`, `POST /tests/create`, `PATCH /tests/:id/addView`
//!
//! Every authenticated operation takes the bearer token as an argument and
//! attaches it as an `Authorization: Bearer <token>` header. Callers are
//! responsible for not invoking authenticated operations without a token —
//! the session gate, not this client, enforces that.

mod account;
mod create;
mod error;
mod http;
mod listings;
mod types;

pub use error::ApiError;
pub use types::{CreateTestRequest, DisciplineGroup, TeacherGroup, TestsInfo};

/// HTTP client for the prova backend.
///
/// Stateless: holds only the connection pool and the configured base URL.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::builder()
                .user_agent("prova/0.1")
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client should build"),
            base_url,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
