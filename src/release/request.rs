use derive_builder::Builder;

use crate::{
    GhrelError, Result,
    forge::{config::RepoRef, request::CreateReleaseRequest},
    release::status::{ReleaseStatus, effective_prerelease},
};

/// Caller supplied description of the release to create or update.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct ReleaseRequest {
    /// Target repository and tag.
    pub repo: RepoRef,
    /// Display name. Empty keeps the current name on update and falls back
    /// to the tag name on create.
    #[builder(default)]
    pub name: String,
    /// Release notes. Empty keeps the current body on update.
    #[builder(default)]
    pub body: String,
    #[builder(default)]
    pub draft: bool,
    #[builder(default)]
    pub prerelease: bool,
}

impl ReleaseRequestBuilder {
    pub fn build(&self) -> Result<ReleaseRequest> {
        let req = self._build().map_err(|e| {
            GhrelError::InvalidArgs(format!(
                "Failed to build release request: {}",
                e
            ))
        })?;

        if req.repo.tag.is_empty() {
            return Err(GhrelError::InvalidArgs(
                "a tag name is required".into(),
            ));
        }

        Ok(req)
    }
}

impl ReleaseRequest {
    pub fn builder() -> ReleaseRequestBuilder {
        ReleaseRequestBuilder::default()
    }

    pub fn tag(&self) -> &str {
        &self.repo.tag
    }

    /// Prerelease flag after applying the draft policy.
    pub fn effective_prerelease(&self) -> bool {
        effective_prerelease(self.draft, self.prerelease)
    }

    /// Status the release has once this request is applied.
    pub fn status(&self) -> ReleaseStatus {
        ReleaseStatus::from_flags(self.draft, self.effective_prerelease())
    }

    /// Name used when creating: the tag name stands in for an empty name.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.repo.tag
        } else {
            &self.name
        }
    }

    pub fn to_create_request(&self) -> CreateReleaseRequest {
        CreateReleaseRequest {
            tag_name: self.repo.tag.clone(),
            name: self.display_name().to_string(),
            body: self.body.clone(),
            draft: self.draft,
            prerelease: self.effective_prerelease(),
        }
    }
}
