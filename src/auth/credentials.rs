//! Credential management for P2PB2B API authentication.

use secrecy::{ExposeSecret, SecretString};

use crate::error::P2bError;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "P2BP2B_API_KEY";
/// Environment variable holding the API secret.
pub const API_SECRET_ENV: &str = "P2BP2B_API_SECRET";

/// API credentials containing the key and secret.
#[derive(Clone)]
pub struct Credentials {
    /// The API key, sent verbatim in the `X-TXC-APIKEY` header
    pub api_key: String,
    /// The API secret, only ever used as the HMAC key
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Create credentials, rejecting an empty key or secret.
    pub fn try_new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, P2bError> {
        let credentials = Self::new(api_key, api_secret);
        if credentials.api_key.is_empty() || credentials.expose_secret().is_empty() {
            return Err(P2bError::MissingCredentials);
        }
        Ok(credentials)
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret),
        }
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `P2BP2B_API_KEY` and `P2BP2B_API_SECRET`.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    ///
    /// Fails with [`P2bError::MissingCredentials`] if either variable is
    /// unset or empty.
    pub fn from_env() -> Result<Self, P2bError> {
        Self::from_env_vars(API_KEY_ENV, API_SECRET_ENV)
    }

    /// Create credentials from custom environment variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, P2bError> {
        Self::try_from_env_vars(key_var, secret_var).ok_or(P2bError::MissingCredentials)
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if the environment variables are not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(API_KEY_ENV, API_SECRET_ENV)
    }

    /// Try to create credentials from custom environment variable names.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok()?;
        let api_secret = std::env::var(secret_var).ok()?;
        let credentials = Credentials::try_new(api_key, api_secret).ok()?;
        Some(Self { credentials })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
