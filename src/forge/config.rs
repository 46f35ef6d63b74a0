//! Configuration for GitHub API connections.
use secrecy::SecretString;

/// Default GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Page size requested for tag and release listings.
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Credentials and endpoint used to build an authenticated client.
#[derive(Debug, Clone)]
pub struct Connection {
    /// Personal access token.
    pub token: SecretString,
    /// REST API base URL (e.g. "https://api.github.com").
    pub api_url: String,
}

impl Default for Connection {
    fn default() -> Self {
        Self {
            token: SecretString::from("".to_string()),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Repository and tag targeted by an operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoRef {
    /// Organization or user owning the repository.
    pub org: String,
    /// Repository name.
    pub repo: String,
    /// Tag name the release is anchored to.
    pub tag: String,
}

impl RepoRef {
    pub fn new(
        org: impl Into<String>,
        repo: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            org: org.into(),
            repo: repo.into(),
            tag: tag.into(),
        }
    }

    /// "org/repo" path used in messages.
    pub fn path(&self) -> String {
        format!("{}/{}", self.org, self.repo)
    }
}
