//! API credentials for Coinbase private endpoints
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use secrecy::{ExposeSecret, SecretString};

use crate::error::{CredentialsError, CredentialsResult};
use crate::signing::{self, HttpMethod};

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "COINBASE_API_KEY";

/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "COINBASE_API_SECRET";

/// API credentials for authenticated requests
///
/// Immutable once created. The secret is zeroized when the credentials are
/// dropped.
pub struct Credentials {
    /// API key (sent as `CB-ACCESS-KEY`)
    api_key: String,
    /// API secret (HMAC key, never transmitted)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// Both values are required. An empty or whitespace-only value is
    /// rejected here rather than surfacing later as an opaque signature
    /// failure from the exchange.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> CredentialsResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.trim().is_empty() {
            return Err(CredentialsError::Missing("api_key"));
        }
        if api_secret.trim().is_empty() {
            return Err(CredentialsError::Missing("api_secret"));
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `COINBASE_API_KEY` and `COINBASE_API_SECRET` from the environment.
    pub fn from_env() -> CredentialsResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| CredentialsError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| CredentialsError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        Self::new(api_key, api_secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a request with this credential's secret
    ///
    /// See [`signing::sign`] for the canonical message layout.
    pub fn sign(&self, timestamp: u64, method: HttpMethod, request_path: &str, body: &str) -> String {
        signing::sign(
            self.api_secret.expose_secret(),
            timestamp,
            method,
            request_path,
            body,
        )
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let visible: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", visible))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
