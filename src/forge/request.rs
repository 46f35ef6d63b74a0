use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Request to create a new release.
pub struct CreateReleaseRequest {
    pub tag_name: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Request to edit an existing release. The id selects the release and is
/// not part of the payload.
pub struct UpdateReleaseRequest {
    #[serde(skip)]
    pub id: u64,
    pub tag_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
}
