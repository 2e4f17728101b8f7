//! Error types for credential handling

/// Errors that can occur while loading or validating credentials
#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    /// A required credential was empty
    #[error("Missing credential: {0} must not be empty")]
    Missing(&'static str),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for credential operations
pub type CredentialsResult<T> = Result<T, CredentialsError>;
