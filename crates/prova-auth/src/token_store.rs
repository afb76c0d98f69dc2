use std::fs;
use std::path::PathBuf;

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "prova-cli";
const KEYRING_USER: &str = "bearer-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Returns the keyring service name.
///
/// Defaults to `"prova-cli"`. Override via `PROVA_KEYRING_SERVICE` env var
/// for testing (e.g., `"prova-cli-test"`) to avoid touching production
/// credentials.
fn keyring_service() -> String {
    std::env::var("PROVA_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Store a bearer token in the OS keychain. Falls back to file if keyring
/// unavailable.
///
/// # Errors
///
/// Returns `AuthError::TokenStore` if both keyring and file storage fail.
pub fn store(token: &str) -> Result<(), AuthError> {
    match keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        Ok(entry) => match entry.set_password(token) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                store_file(token)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            store_file(token)
        }
    }
}

/// Load a bearer token. Priority: keyring → `PROVA_AUTH__TOKEN` env →
/// file (`~/.prova/credentials`).
#[must_use]
pub fn load() -> Option<String> {
    // 1. Keyring
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        if let Ok(token) = entry.get_password() {
            if !token.is_empty() {
                return Some(token);
            }
        }
    }

    // 2. Environment variable
    if let Ok(token) = std::env::var("PROVA_AUTH__TOKEN") {
        if !token.is_empty() {
            return Some(token);
        }
    }

    // 3. File fallback
    load_file()
}

/// Delete the stored token from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::TokenStore` if the credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    // Delete from keyring (ignore errors — may not exist)
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }

    // Delete credentials file
    let path = credentials_path()?;
    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            AuthError::TokenStore(format!("failed to delete {}: {e}", path.display()))
        })?;
    }

    Ok(())
}

/// Detect which tier the current token came from (for status display).
#[must_use]
pub fn detect_token_source() -> Option<String> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        if entry.get_password().is_ok_and(|t| !t.is_empty()) {
            return Some("keyring".into());
        }
    }
    if std::env::var("PROVA_AUTH__TOKEN").is_ok_and(|t| !t.is_empty()) {
        return Some("env".into());
    }
    if load_file().is_some() {
        return Some("file".into());
    }
    None
}

// --- Private file helpers ---

fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".prova").join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStore("home directory not found — cannot store credentials".into())
        })
}

fn store_file(token: &str) -> Result<(), AuthError> {
    let path = credentials_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStore(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(&path, token)
        .map_err(|e| AuthError::TokenStore(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStore(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn load_file() -> Option<String> {
    let path = credentials_path().ok()?;
    fs::read_to_string(&path)
        .ok()
        .filter(|s| !s.trim().is_empty())
}
