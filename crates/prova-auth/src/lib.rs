//! # prova-auth
//!
//! Session lifecycle for the prova client.
//!
//! Provides the [`SessionStore`] (bearer-token session with login/logout) and
//! persistent token storage across the keyring → env var → file tiers.

pub mod error;
pub mod session;
pub mod token_store;

pub use error::AuthError;
pub use session::SessionStore;
