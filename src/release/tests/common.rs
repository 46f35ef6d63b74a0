//! Common test utilities for release tests.

pub use reqwest::StatusCode;

pub use crate::{
    GhrelError, Result,
    forge::{
        config::RepoRef,
        manager::ForgeManager,
        request::{CreateReleaseRequest, UpdateReleaseRequest},
        traits::MockForge,
        types::{ForgeResponse, Release, Tag},
    },
    release::{
        outcome::ReleaseAction,
        request::{ReleaseRequest, ReleaseRequestBuilder},
    },
};

pub const TEST_TAG: &str = "v1.0.0";

pub fn test_repo(tag: &str) -> RepoRef {
    RepoRef::new("acme", "widgets", tag)
}

/// Existing release for [`TEST_TAG`] named after its tag.
pub fn test_release(id: u64, draft: bool, prerelease: bool) -> Release {
    Release {
        id,
        tag_name: TEST_TAG.into(),
        name: Some(TEST_TAG.into()),
        body: Some("notes".into()),
        draft,
        prerelease,
    }
}

/// Request builder targeting [`TEST_TAG`].
pub fn test_request() -> ReleaseRequestBuilder {
    let mut builder = ReleaseRequest::builder();
    builder.repo(test_repo(TEST_TAG));
    builder
}

pub fn respond<T>(status: StatusCode, data: T) -> Result<ForgeResponse<T>> {
    Ok(ForgeResponse::new(status, Some(data)))
}

/// Wraps the mock in a live (non dry-run) manager. Set expectations on the
/// mock before calling this.
pub fn create_test_forge(mock_forge: MockForge) -> ForgeManager {
    ForgeManager::new(Box::new(mock_forge), false)
}
