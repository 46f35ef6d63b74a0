use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Authenticated account returned by the identity lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    pub login: String,
}

/// Repository tag. Only the name is needed for lookups.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tag {
    pub name: String,
}

/// Release as stored by the forge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub id: u64,
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
}

impl Release {
    /// Display name, empty when the forge has none.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Release notes, empty when the forge has none.
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Status and decoded payload of a response received from the forge.
///
/// Transport failures never produce a `ForgeResponse`, so a status is always
/// available for callers to check against the code they expect. The payload
/// is only decoded for successful statuses with a non-empty body.
#[derive(Debug, Clone)]
pub struct ForgeResponse<T> {
    pub status: StatusCode,
    pub data: Option<T>,
}

impl<T> ForgeResponse<T> {
    pub fn new(status: StatusCode, data: Option<T>) -> Self {
        Self { status, data }
    }

    /// Response for a received status without a payload.
    pub fn status_only(status: StatusCode) -> Self {
        Self { status, data: None }
    }
}
