//! Error types for REST API operations

use coinbase_auth::CredentialsError;

/// Errors that can occur during REST API operations
///
/// Every error is terminal for the call that raised it. Transport failures
/// ("could not reach the exchange") are kept apart from API failures ("the
/// exchange rejected the request").
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The credentials resolved no accounts
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// No account is flagged primary, or the id was never resolved
    #[error("No primary account found")]
    NoPrimaryAccount,

    /// Server time could not be obtained
    #[error("Time sync failed: {0}")]
    TimeSync(String),

    /// HTTP request could not be completed
    #[error("Transport error: {0}")]
    Transport(String),

    /// Exchange returned a non-success status or an unusable payload
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the exchange, or a description of the payload problem
        message: String,
    },

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RestError {
    /// Check if the exchange could not be reached at all
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// HTTP status attached to this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

impl From<CredentialsError> for RestError {
    fn from(err: CredentialsError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
