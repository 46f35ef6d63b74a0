//! Error types for ghrel operations.

use thiserror::Error;

/// Main error type for ghrel operations.
#[derive(Error, Debug)]
pub enum GhrelError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Connection errors
    #[error("Authentication failed: {0}")]
    AuthError(String),

    // Forge errors
    #[error("{0}")]
    RemoteError(String),

    #[error("Tag '{tag}' not found! Valid tags are '{}'", others.join("', '"))]
    TagNotFound { tag: String, others: Vec<String> },

    #[error("No release found for tag '{0}'")]
    ReleaseNotFound(String),

    #[error("Internal issue. {0}")]
    InternalError(String),

    // Parsing errors - automatic conversions via #[from]
    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using GhrelError
pub type Result<T> = std::result::Result<T, GhrelError>;

impl GhrelError {
    /// Create an authentication error with context
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::AuthError(msg.into())
    }

    /// Create a remote (forge) error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::RemoteError(msg.into())
    }

    /// Create an internal error signaling a caller ordering defect
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }

    /// Create a tag not found error listing the tags that do exist
    pub fn tag_not_found(tag: impl Into<String>, others: Vec<String>) -> Self {
        Self::TagNotFound {
            tag: tag.into(),
            others,
        }
    }
}

// Transport level failures from the GitHub client
impl From<octocrab::Error> for GhrelError {
    fn from(err: octocrab::Error) -> Self {
        Self::RemoteError(format!("GitHub API error: {}", err))
    }
}
